//! Pure URL services.

pub mod cache_buster;
pub mod url_optimizer;
pub mod url_resolver;

pub use cache_buster::{add_cache_buster, add_cache_buster_now, current_timestamp};
pub use url_optimizer::{OptimizeOptions, default_hosts, is_optimizable_host, optimize_url};
pub use url_resolver::{build_fallback_chain, placeholder_url, resolve_reference, resolve_url};

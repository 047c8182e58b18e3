//! Image load verification adapters.
//!
//! This module provides:
//! - HTTP fetching for absolute urls and site-relative urls on an origin
//! - Local reads for site-relative urls from a public directory
//! - Routing between the two
//! - Off-thread decoding shared by both probes

pub mod decode;
pub mod http_probe;
pub mod local_probe;
pub mod router;

pub use decode::decode_image;
pub use http_probe::{DEFAULT_USER_AGENT, HttpImageProbe, HttpProbeConfig};
pub use local_probe::LocalImageProbe;
pub use router::ImageProbeRouter;

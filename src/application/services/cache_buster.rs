//! Cache-busting query parameter.

use chrono::Utc;

/// Query parameter name carrying the timestamp.
pub const CACHE_BUST_PARAM: &str = "t";

/// Appends `t=<timestamp>` to `url`.
///
/// Uses `&` when the url already has a query string, `?` otherwise. An empty
/// url is returned unchanged.
#[must_use]
pub fn add_cache_buster(url: &str, timestamp: i64) -> String {
    if url.is_empty() {
        return String::new();
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{CACHE_BUST_PARAM}={timestamp}")
}

/// Appends the current time in milliseconds as the cache buster.
#[must_use]
pub fn add_cache_buster_now(url: &str) -> String {
    add_cache_buster(url, current_timestamp())
}

/// Current Unix time in milliseconds.
#[must_use]
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

//! Image host URL optimization.

use serde::{Deserialize, Serialize};

/// Default target width for optimized images.
pub const DEFAULT_WIDTH: u32 = 800;

/// Default target height for optimized images.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 80;

/// Default resize mode.
pub const DEFAULT_FIT: &str = "crop";

/// Image hosts that understand the `w`/`h`/`q`/`fit` parameters.
pub const DEFAULT_HOSTS: &[&str] = &["images.unsplash.com"];

const OVERRIDDEN_PARAMS: &[&str] = &["w", "h", "q", "fit"];

/// Size and quality parameters for hosted images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeOptions {
    /// Target width in pixels (default: 800).
    #[serde(default = "default_width")]
    pub width: u32,
    /// Target height in pixels (default: 600).
    #[serde(default = "default_height")]
    pub height: u32,
    /// Encoder quality 1-100 (default: 80).
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// Resize mode understood by the host (default: `crop`).
    #[serde(default = "default_fit")]
    pub fit: String,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            quality: DEFAULT_QUALITY,
            fit: default_fit(),
        }
    }
}

const fn default_width() -> u32 {
    DEFAULT_WIDTH
}

const fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

const fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

fn default_fit() -> String {
    DEFAULT_FIT.to_string()
}

/// Returns the default host allow-list as owned strings.
#[must_use]
pub fn default_hosts() -> Vec<String> {
    DEFAULT_HOSTS.iter().map(ToString::to_string).collect()
}

/// Checks if a URL belongs to one of the allow-listed hosts.
#[must_use]
pub fn is_optimizable_host(url: &str, hosts: &[String]) -> bool {
    hosts.iter().any(|host| !host.is_empty() && url.contains(host.as_str()))
}

/// Adds size and quality parameters to a hosted image URL.
///
/// Empty and site-relative URLs, and URLs on hosts outside `hosts`, are
/// returned unchanged. Existing `w`, `h`, `q` and `fit` parameters are replaced;
/// any other parameters are kept after the new ones.
#[must_use]
pub fn optimize_url(url: &str, options: &OptimizeOptions, hosts: &[String]) -> String {
    if url.is_empty() || url.starts_with('/') || !is_optimizable_host(url, hosts) {
        return url.to_string();
    }

    let (base_url, existing_params) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };

    let mut params = vec![
        format!("w={}", options.width),
        format!("h={}", options.height),
        format!("q={}", options.quality),
        format!("fit={}", options.fit),
    ];

    if let Some(existing) = existing_params {
        for param in existing.split('&').filter(|p| !p.is_empty()) {
            let key = param.split('=').next().unwrap_or("");
            if !OVERRIDDEN_PARAMS.contains(&key) {
                params.push(param.to_string());
            }
        }
    }

    format!("{}?{}", base_url, params.join("&"))
}

/// Optimizes a URL with default options and hosts.
#[must_use]
pub fn optimize_url_default(url: &str) -> String {
    optimize_url(url, &OptimizeOptions::default(), &default_hosts())
}

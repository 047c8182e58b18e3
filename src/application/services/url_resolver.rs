//! Image reference resolution.

use crate::domain::entities::{BasePath, FallbackChain, ImageReference, PLACEHOLDER_PATH};

/// Resolves an optional raw reference against `base`.
///
/// Absent or empty references resolve to the placeholder. Site-relative paths
/// get the base prefix unless they already carry it. Everything else is
/// returned unchanged.
#[must_use]
pub fn resolve_url(reference: Option<&str>, base: &BasePath) -> String {
    resolve_reference(&ImageReference::parse(reference), base)
}

/// Resolves an already classified reference against `base`.
#[must_use]
pub fn resolve_reference(reference: &ImageReference, base: &BasePath) -> String {
    match reference {
        ImageReference::Absent => base.join(PLACEHOLDER_PATH),
        ImageReference::SiteRelative(path) if !base.prefixes(path) => {
            base.join(path.strip_prefix('/').unwrap_or(path))
        }
        ImageReference::SiteRelative(path) | ImageReference::External(path) => path.clone(),
    }
}

/// Returns the placeholder url for `base`.
#[must_use]
pub fn placeholder_url(base: &BasePath) -> String {
    base.join(PLACEHOLDER_PATH)
}

/// Builds the ordered candidates for a webcam image.
///
/// `[webcam/{id}.jpg, webcam/{id}_backup.jpg, placeholder.jpg]`, all under
/// `base + "images/"`.
#[must_use]
pub fn build_fallback_chain(webcam_id: &str, base: &BasePath) -> FallbackChain {
    FallbackChain::new(
        [
            base.join(&format!("images/webcam/{webcam_id}.jpg")),
            base.join(&format!("images/webcam/{webcam_id}_backup.jpg")),
        ],
        base,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None, "/", "/images/placeholder.jpg" ; "absent_root")]
    #[test_case(Some(""), "/", "/images/placeholder.jpg" ; "empty_root")]
    #[test_case(None, "/app/", "/app/images/placeholder.jpg" ; "absent_app")]
    #[test_case(Some("/images/foo.jpg"), "/", "/images/foo.jpg" ; "root_no_duplicate")]
    #[test_case(Some("/images/foo.jpg"), "/app/", "/app/images/foo.jpg" ; "prefixed")]
    #[test_case(Some("/app/images/foo.jpg"), "/app/", "/app/images/foo.jpg" ; "already_prefixed")]
    #[test_case(Some("https://cdn.example.com/a.jpg"), "/app/", "https://cdn.example.com/a.jpg" ; "external")]
    #[test_case(Some("images/a.jpg"), "/app/", "images/a.jpg" ; "bare_relative")]
    fn test_resolve_url(reference: Option<&str>, base: &str, expected: &str) {
        assert_eq!(resolve_url(reference, &BasePath::new(base)), expected);
    }

    #[test_case("/images/foo.jpg", "/" ; "root")]
    #[test_case("/images/foo.jpg", "/app/" ; "app")]
    #[test_case("/weather/cam.jpg", "/weather/" ; "already_prefixed")]
    #[test_case("https://x.test/y.jpg", "/app/" ; "external")]
    fn test_resolve_is_idempotent(reference: &str, base: &str) {
        let base = BasePath::new(base);
        let once = resolve_url(Some(reference), &base);
        let twice = resolve_url(Some(once.as_str()), &base);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fallback_chain_shape() {
        let base = BasePath::new("/app/");
        let chain = build_fallback_chain("harbor", &base);

        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.entries(),
            [
                "/app/images/webcam/harbor.jpg",
                "/app/images/webcam/harbor_backup.jpg",
                "/app/images/placeholder.jpg",
            ]
        );
        assert_eq!(chain.placeholder(), placeholder_url(&base));
    }

    #[test_case("" ; "empty_id")]
    #[test_case("summit-2" ; "dashed_id")]
    fn test_fallback_chain_ends_in_placeholder(id: &str) {
        let base = BasePath::root();
        let chain = build_fallback_chain(id, &base);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.entries().last().map(String::as_str), Some("/images/placeholder.jpg"));
    }
}

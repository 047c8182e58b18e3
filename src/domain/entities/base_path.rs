//! Deployment base path value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix applied to site-relative image references.
///
/// Always ends with `/`, so joining it with a relative path such as
/// `images/placeholder.jpg` never produces a glued segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BasePath(String);

impl BasePath {
    /// Creates a base path, appending a trailing `/` when missing.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let mut value = value.into().trim().to_string();
        if !value.ends_with('/') {
            value.push('/');
        }
        Self(value)
    }

    /// Root base path (`/`).
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Returns the base path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins a path relative to the base (no leading `/`).
    #[must_use]
    pub fn join(&self, relative: &str) -> String {
        format!("{}{relative}", self.0)
    }

    /// Returns true if the given url already carries this prefix.
    #[must_use]
    pub fn prefixes(&self, url: &str) -> bool {
        url.starts_with(self.0.as_str())
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BasePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BasePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<BasePath> for String {
    fn from(base: BasePath) -> Self {
        base.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("/", "/" ; "root")]
    #[test_case("", "/" ; "empty")]
    #[test_case("/app", "/app/" ; "missing_trailing_slash")]
    #[test_case("/app/", "/app/" ; "already_normalized")]
    #[test_case("  /cams/ ", "/cams/" ; "whitespace")]
    fn test_normalization(input: &str, expected: &str) {
        assert_eq!(BasePath::new(input).as_str(), expected);
    }

    #[test]
    fn test_join() {
        let base = BasePath::new("/app/");
        assert_eq!(base.join("images/placeholder.jpg"), "/app/images/placeholder.jpg");
    }

    #[test]
    fn test_deserialize_normalizes() {
        #[derive(Deserialize)]
        struct Wrapper {
            base: BasePath,
        }

        let parsed: Wrapper = toml::from_str(r#"base = "/weather""#).expect("valid toml");
        assert_eq!(parsed.base.as_str(), "/weather/");
    }
}

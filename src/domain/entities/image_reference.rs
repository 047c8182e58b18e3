//! Logical image reference.

/// A logical identifier for an image, before it is resolved to a URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageReference {
    /// No reference given (absent or empty string).
    #[default]
    Absent,
    /// Anything that does not start with `/`, typically an absolute URL.
    External(String),
    /// A path rooted at the site (leading `/`).
    SiteRelative(String),
}

impl ImageReference {
    /// Classifies an optional raw reference.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Absent,
            Some(s) if s.starts_with('/') => Self::SiteRelative(s.to_string()),
            Some(s) => Self::External(s.to_string()),
        }
    }

    /// Returns the raw text, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::External(s) | Self::SiteRelative(s) => Some(s),
        }
    }

    /// Returns true for site-relative references.
    #[must_use]
    pub const fn is_site_relative(&self) -> bool {
        matches!(self, Self::SiteRelative(_))
    }
}

impl From<&str> for ImageReference {
    fn from(s: &str) -> Self {
        Self::parse(Some(s))
    }
}

impl From<Option<&str>> for ImageReference {
    fn from(s: Option<&str>) -> Self {
        Self::parse(s)
    }
}

//! Ordered list of URLs to try for one webcam.

use super::BasePath;

/// Path of the placeholder image, relative to the base path.
pub const PLACEHOLDER_PATH: &str = "images/placeholder.jpg";

/// Ordered URLs for a logical image, most specific first.
///
/// Never empty; the last entry is always the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    entries: Vec<String>,
}

impl FallbackChain {
    /// Builds a chain from specific candidates followed by the placeholder.
    #[must_use]
    pub fn new(candidates: impl IntoIterator<Item = String>, base: &BasePath) -> Self {
        let mut entries: Vec<String> = candidates.into_iter().collect();
        entries.push(base.join(PLACEHOLDER_PATH));
        Self { entries }
    }

    /// A chain holding only the placeholder.
    #[must_use]
    pub fn placeholder_only(base: &BasePath) -> Self {
        Self::new(std::iter::empty(), base)
    }

    /// Returns all entries in order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the terminal placeholder entry.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        // Non-empty by construction.
        self.entries.last().map_or("", String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a chain with every entry rewritten by `f`, placeholder included.
    #[must_use]
    pub fn map(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            entries: self.entries.iter().map(|e| f(e.as_str())).collect(),
        }
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FallbackChain {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Webcam entity.

use serde::{Deserialize, Serialize};

/// A configured webcam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webcam {
    /// Identifier used in image file names.
    pub id: String,
    /// Human readable name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Webcam {
    /// Creates a webcam without a display name.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the name, or the id when no name is configured.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

//! The content record being edited.

use serde::{Deserialize, Serialize};

/// A content page as held by the external store.
///
/// Every field defaults, so a partially populated or empty JSON object
/// (`{}`) decodes into a `Document` rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub body: String,
    pub path: String,
    pub draft: bool,
}

impl Document {
    /// Whether the document carries no data at all.
    ///
    /// The store hands the view an empty document when the requested page
    /// does not exist.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.title.is_empty()
            && self.body.is_empty()
            && self.path.is_empty()
            && !self.draft
    }

    /// Text to show as the page heading, if the document has any.
    pub fn display_title(&self) -> Option<&str> {
        [self.title.as_str(), self.path.as_str()]
            .into_iter()
            .find(|s| !s.trim().is_empty())
    }
}

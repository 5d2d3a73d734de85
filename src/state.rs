//! The read-only snapshot a page edit view renders from.

use serde::{Deserialize, Serialize};

use crate::Document;

/// Route parameters of the page being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteParams {
    /// Identifier of the page in the route, e.g. `about.md`.
    pub id: String,
}

/// Snapshot of data and flags supplied by the controlling store.
///
/// The view never changes a snapshot; it only replaces it wholesale when
/// the store pushes a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// The page being edited. `None` before the store has one.
    pub document: Option<Document>,
    /// Human-readable validation errors, shown verbatim and in order.
    pub validation_errors: Vec<String>,
    /// Whether any field differs from the stored page.
    pub field_changed: bool,
    /// Whether the last save went through.
    pub updated: bool,
    /// Whether the store is currently loading the page.
    pub is_fetching: bool,
    pub route_params: RouteParams,
}

impl ViewState {
    /// Create a snapshot for the given route id with nothing loaded yet.
    pub fn for_route(id: impl Into<String>) -> Self {
        Self {
            route_params: RouteParams { id: id.into() },
            ..Self::default()
        }
    }

    /// The document, if present and not empty.
    pub fn loaded_document(&self) -> Option<&Document> {
        self.document.as_ref().filter(|document| !document.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_decodes_from_partial_json() {
        let state: ViewState = serde_json::from_str(
            r#"{ "document": {}, "field_changed": true, "route_params": { "id": "page.md" } }"#,
        )
        .unwrap();

        assert_eq!(state.route_params.id, "page.md");
        assert!(state.field_changed);
        assert!(state.validation_errors.is_empty());
        assert_eq!(state.document, Some(Document::default()));
        assert!(state.loaded_document().is_none());
    }
}

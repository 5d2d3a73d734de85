//! A page editing view for content admin interfaces, hosted on a small
//! Model-View-Update (MVU) runtime.
//!
//! [`PageEdit`] renders one page from a [`ViewState`] snapshot supplied by
//! the controlling store and forwards user intent (save, delete, field
//! edits) to injected [`DocumentEditActions`]. It owns no state of its own:
//! every branch is a function of the snapshot at render or event time.
//!
//! - Attaching clears stale validation errors once, before the first render,
//!   and asks the store for the routed page.
//! - Save only reaches the store when a field has changed.
//! - Delete only reaches the store once the [`DeleteConfirmation`] agrees.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use page_edit_mvu::{
//!     Document, MarkupRenderer, NoPrompt, PageEdit, PageEditEvent, RecordingActions,
//!     TestMvuRuntime, ViewState,
//! };
//!
//! let actions = RecordingActions::new();
//! let view = PageEdit::new(Arc::new(actions.clone()), NoPrompt);
//! let renderer = MarkupRenderer::new();
//!
//! let mut driver = TestMvuRuntime::new(ViewState::for_route("about.md"), view, renderer.clone()).run();
//! assert!(renderer.html().contains("<h1>Could not find the page.</h1>"));
//!
//! // The store has loaded the page and pushes a new snapshot
//! let loaded = ViewState {
//!     document: Some(Document {
//!         id: "about.md".into(),
//!         title: "About".into(),
//!         ..Document::default()
//!     }),
//!     ..ViewState::for_route("about.md")
//! };
//! driver.handle().emit(PageEditEvent::StateReplaced(Box::new(loaded)));
//! driver.process_events();
//!
//! assert!(renderer.html().contains("<h1>About</h1>"));
//! assert!(!renderer.html().contains("error-messages"));
//! ```

// Module declarations
mod actions;
mod config;
mod document;
mod effect;
mod emitter;
mod error;
mod logic;
mod markup;
mod page_edit;
mod renderer;
mod runtime;
mod state;

// Public re-exports
pub use actions::{DeleteConfirmation, DocumentEditActions, NoPrompt};
pub use config::{KeyChord, Labels, PageEditConfig, ID_PLACEHOLDER};
pub use document::Document;
pub use effect::Effect;
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use logic::MvuLogic;
pub use markup::{to_markup, MarkupRenderer};
pub use page_edit::{
    Button, Callback, ChangeCallback, Content, EditorProps, PageEdit, PageEditEvent,
    PageEditProps, SharedActions, SharedConfirmation, TextField, Toggle,
};
pub use renderer::Renderer;
pub use runtime::{MvuRuntime, ViewHandle};
pub use state::{RouteParams, ViewState};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use actions::{ActionCall, RecordingActions};
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{TestMvuDriver, TestMvuRuntime};

//! Handlers the page edit view forwards user intent to.

use crate::Document;

/// Side-effecting handlers owned by the controlling store.
///
/// The view calls these to request work and never looks at the outcome.
/// Implementations typically dispatch to a store which later pushes a new
/// [`ViewState`](crate::ViewState) to the view.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentEditActions {
    fn fetch_document(&self, id: &str);
    fn save_document(&self, document: &Document);
    fn delete_document(&self, id: &str);
    fn update_title(&self, value: &str);
    fn update_body(&self, value: &str);
    fn update_path(&self, value: &str);
    fn update_draft(&self, value: bool);
    fn clear_validation_errors(&self);
}

/// Asks the user to confirm a delete before it is forwarded.
///
/// This is the extension point for whatever confirmation flow the host
/// offers (a modal, a native dialog, a second click). Closures of type
/// `Fn(&str) -> bool` implement it directly.
pub trait DeleteConfirmation {
    /// Return `true` to go ahead with the delete.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> DeleteConfirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirmation for hosts without a prompt: every delete is declined.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl DeleteConfirmation for NoPrompt {
    fn confirm(&self, prompt: &str) -> bool {
        log::debug!("no confirmation prompt available, declining: {prompt}");
        false
    }
}

#[cfg(any(test, feature = "testing"))]
pub use recording::{ActionCall, RecordingActions};

#[cfg(any(test, feature = "testing"))]
mod recording {
    use portable_atomic_util::Arc;
    use spin::Mutex;

    use super::DocumentEditActions;
    use crate::Document;

    /// A handler invocation captured by [`RecordingActions`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ActionCall {
        FetchDocument(String),
        SaveDocument(Document),
        DeleteDocument(String),
        UpdateTitle(String),
        UpdateBody(String),
        UpdatePath(String),
        UpdateDraft(bool),
        ClearValidationErrors,
    }

    /// Fake handlers that record every call in order.
    ///
    /// Only available with the `testing` feature. Clones share the same
    /// log, so keep one for assertions.
    #[derive(Debug, Clone)]
    pub struct RecordingActions {
        calls: Arc<Mutex<Vec<ActionCall>>>,
    }

    impl Default for RecordingActions {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RecordingActions {
        pub fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Every call so far, oldest first.
        pub fn calls(&self) -> Vec<ActionCall> {
            self.calls.lock().clone()
        }

        /// Number of recorded calls matching `predicate`.
        pub fn count(&self, predicate: impl Fn(&ActionCall) -> bool) -> usize {
            self.calls.lock().iter().filter(|call| predicate(call)).count()
        }

        fn record(&self, call: ActionCall) {
            self.calls.lock().push(call);
        }
    }

    impl DocumentEditActions for RecordingActions {
        fn fetch_document(&self, id: &str) {
            self.record(ActionCall::FetchDocument(id.to_string()));
        }

        fn save_document(&self, document: &Document) {
            self.record(ActionCall::SaveDocument(document.clone()));
        }

        fn delete_document(&self, id: &str) {
            self.record(ActionCall::DeleteDocument(id.to_string()));
        }

        fn update_title(&self, value: &str) {
            self.record(ActionCall::UpdateTitle(value.to_string()));
        }

        fn update_body(&self, value: &str) {
            self.record(ActionCall::UpdateBody(value.to_string()));
        }

        fn update_path(&self, value: &str) {
            self.record(ActionCall::UpdatePath(value.to_string()));
        }

        fn update_draft(&self, value: bool) {
            self.record(ActionCall::UpdateDraft(value));
        }

        fn clear_validation_errors(&self) {
            self.record(ActionCall::ClearValidationErrors);
        }
    }
}

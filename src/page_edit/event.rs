use crate::{KeyChord, ViewState};

/// Everything that can happen to a page edit view.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEditEvent {
    /// The Save control was activated.
    SaveRequested,
    /// The Delete control was activated.
    DeleteRequested,
    TitleChanged(String),
    BodyChanged(String),
    PathChanged(String),
    DraftToggled(bool),
    /// A key chord was pressed while the editor had focus.
    KeyPressed(KeyChord),
    /// The controlling store pushed a new snapshot.
    StateReplaced(Box<ViewState>),
}

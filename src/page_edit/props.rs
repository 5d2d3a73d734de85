//! Render output of the page edit view.

use crate::KeyChord;

pub type Callback = Box<dyn Fn() + Send>;
pub type ChangeCallback<T> = Box<dyn Fn(T) + Send>;

/// Props produced by [`PageEdit`](super::PageEdit) for every render.
pub struct PageEditProps {
    /// Always present, whatever the state of the page.
    pub heading: String,
    /// Validation errors, `None` when there are none.
    pub errors: Option<Vec<String>>,
    pub content: Content,
}

/// Main area of the view.
pub enum Content {
    /// The store is loading the page.
    Loading,
    /// The page is absent or empty.
    NotFound,
    Editor(EditorProps),
}

/// The editing form and its side controls.
pub struct EditorProps {
    pub title: TextField,
    pub body: TextField,
    pub path: TextField,
    pub draft: Toggle,
    pub save: Button,
    pub delete: Button,
    /// Forward key chords pressed while the form has focus.
    pub on_key: ChangeCallback<KeyChord>,
}

pub struct TextField {
    pub value: String,
    pub on_change: ChangeCallback<String>,
}

pub struct Toggle {
    pub label: String,
    pub checked: bool,
    pub on_change: ChangeCallback<bool>,
}

pub struct Button {
    pub label: String,
    /// Highlighted, e.g. Save while there are unsaved changes.
    pub active: bool,
    pub on_click: Callback,
}

impl PageEditProps {
    pub fn editor(&self) -> Option<&EditorProps> {
        match &self.content {
            Content::Editor(editor) => Some(editor),
            Content::Loading | Content::NotFound => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.content, Content::Loading)
    }
}

impl EditorProps {
    pub fn press(&self, chord: KeyChord) {
        (self.on_key)(chord);
    }
}

impl TextField {
    pub fn change(&self, value: impl Into<String>) {
        (self.on_change)(value.into());
    }
}

impl Toggle {
    pub fn toggle(&self) {
        (self.on_change)(!self.checked);
    }
}

impl Button {
    pub fn click(&self) {
        (self.on_click)();
    }
}

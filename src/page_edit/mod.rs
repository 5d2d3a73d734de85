//! The page edit view.
//!
//! Renders one page from a [`ViewState`] snapshot and forwards user intent
//! to [`DocumentEditActions`]. The snapshot is owned by the controlling
//! store; the view only replaces it when the store pushes a new one.

mod event;
mod props;

use std::sync::Arc;

pub use event::PageEditEvent;
pub use props::{
    Button, Callback, ChangeCallback, Content, EditorProps, PageEditProps, TextField, Toggle,
};

use crate::{
    DeleteConfirmation, Document, DocumentEditActions, Effect, Emitter, KeyChord, Labels,
    MvuLogic, PageEditConfig, Result, ViewState,
};

pub type SharedActions = Arc<dyn DocumentEditActions + Send + Sync>;
pub type SharedConfirmation = Arc<dyn DeleteConfirmation + Send + Sync>;

/// Logic of the page edit view.
///
/// Host it with [`MvuRuntime`](crate::MvuRuntime):
///
/// ```rust
/// use std::sync::Arc;
/// use page_edit_mvu::{MvuRuntime, NoPrompt, PageEdit, PageEditProps, TestRenderer, ViewState};
/// # use page_edit_mvu::{Document, DocumentEditActions};
/// # struct Store;
/// # impl DocumentEditActions for Store {
/// #     fn fetch_document(&self, _id: &str) {}
/// #     fn save_document(&self, _document: &Document) {}
/// #     fn delete_document(&self, _id: &str) {}
/// #     fn update_title(&self, _value: &str) {}
/// #     fn update_body(&self, _value: &str) {}
/// #     fn update_path(&self, _value: &str) {}
/// #     fn update_draft(&self, _value: bool) {}
/// #     fn clear_validation_errors(&self) {}
/// # }
///
/// let view = PageEdit::new(Arc::new(Store), NoPrompt);
/// let renderer = TestRenderer::<PageEditProps>::new();
/// let runtime = MvuRuntime::new(ViewState::for_route("about.md"), view, renderer.clone());
///
/// let handle = runtime.handle();
/// handle.detach();
/// futures::executor::block_on(runtime.run());
///
/// renderer.with_latest(|props| assert_eq!(props.heading, "Could not find the page."));
/// ```
pub struct PageEdit {
    actions: SharedActions,
    confirmation: SharedConfirmation,
    labels: Labels,
    save_chord: KeyChord,
}

impl PageEdit {
    /// Create the view with the default configuration.
    ///
    /// `confirmation` decides whether a Delete click goes through; pass
    /// [`NoPrompt`](crate::NoPrompt) to keep delete inert.
    pub fn new(
        actions: SharedActions,
        confirmation: impl DeleteConfirmation + Send + Sync + 'static,
    ) -> Self {
        Self {
            actions,
            confirmation: Arc::new(confirmation),
            labels: Labels::default(),
            save_chord: KeyChord::primary('s'),
        }
    }

    pub fn with_config(
        actions: SharedActions,
        confirmation: impl DeleteConfirmation + Send + Sync + 'static,
        config: PageEditConfig,
    ) -> Result<Self> {
        let save_chord = config.save_chord()?;
        Ok(Self {
            labels: config.labels,
            save_chord,
            ..Self::new(actions, confirmation)
        })
    }

    fn save(&self, model: &ViewState) -> Effect<PageEditEvent> {
        if !model.field_changed {
            log::debug!("save ignored, no field changed");
            return Effect::none();
        }
        let Some(document) = model.loaded_document().cloned() else {
            log::debug!("save ignored, no page loaded");
            return Effect::none();
        };

        let actions = self.actions.clone();
        Effect::call(move || {
            log::info!("saving page {}", document.id);
            actions.save_document(&document);
        })
    }

    fn delete(&self, model: &ViewState) -> Effect<PageEditEvent> {
        let id = model.route_params.id.clone();
        if id.is_empty() {
            log::debug!("delete ignored, no page in route");
            return Effect::none();
        }

        let prompt = self.labels.delete_prompt_for(&id);
        let confirmation = self.confirmation.clone();
        let actions = self.actions.clone();
        Effect::call(move || {
            if confirmation.confirm(&prompt) {
                log::info!("deleting page {id}");
                actions.delete_document(&id);
            } else {
                log::debug!("delete of {id} not confirmed");
            }
        })
    }

    fn forward(
        &self,
        f: impl FnOnce(&dyn DocumentEditActions) + Send + 'static,
    ) -> Effect<PageEditEvent> {
        let actions = self.actions.clone();
        Effect::call(move || f(actions.as_ref()))
    }

    fn heading<'a>(&'a self, model: &'a ViewState) -> &'a str {
        if model.is_fetching {
            return &self.labels.loading;
        }
        match model.loaded_document() {
            Some(document) => document
                .display_title()
                .unwrap_or(&model.route_params.id),
            None => &self.labels.not_found,
        }
    }

    fn editor(
        &self,
        document: &Document,
        model: &ViewState,
        emitter: &Emitter<PageEditEvent>,
    ) -> EditorProps {
        let save_label = if model.updated {
            &self.labels.saved
        } else {
            &self.labels.save
        };

        EditorProps {
            title: TextField {
                value: document.title.clone(),
                on_change: emit_with(emitter, PageEditEvent::TitleChanged),
            },
            body: TextField {
                value: document.body.clone(),
                on_change: emit_with(emitter, PageEditEvent::BodyChanged),
            },
            path: TextField {
                value: document.path.clone(),
                on_change: emit_with(emitter, PageEditEvent::PathChanged),
            },
            draft: Toggle {
                label: self.labels.draft.clone(),
                checked: document.draft,
                on_change: emit_with(emitter, PageEditEvent::DraftToggled),
            },
            save: Button {
                label: save_label.clone(),
                active: model.field_changed,
                on_click: emit(emitter, PageEditEvent::SaveRequested),
            },
            delete: Button {
                label: self.labels.delete.clone(),
                active: false,
                on_click: emit(emitter, PageEditEvent::DeleteRequested),
            },
            on_key: emit_with(emitter, PageEditEvent::KeyPressed),
        }
    }
}

fn emit(emitter: &Emitter<PageEditEvent>, event: PageEditEvent) -> Callback {
    let emitter = emitter.clone();
    Box::new(move || emitter.emit(event.clone()))
}

fn emit_with<T: 'static>(
    emitter: &Emitter<PageEditEvent>,
    event: fn(T) -> PageEditEvent,
) -> ChangeCallback<T> {
    let emitter = emitter.clone();
    Box::new(move |value: T| emitter.emit(event(value)))
}

impl MvuLogic<PageEditEvent, ViewState, PageEditProps> for PageEdit {
    fn init(&self, model: ViewState) -> (ViewState, Effect<PageEditEvent>) {
        let actions = self.actions.clone();
        let id = model.route_params.id.clone();
        let effect = Effect::call(move || {
            actions.clear_validation_errors();
            if !id.is_empty() {
                actions.fetch_document(&id);
            }
        });
        (model, effect)
    }

    fn update(&self, event: PageEditEvent, model: &ViewState) -> (ViewState, Effect<PageEditEvent>) {
        log::trace!("page edit event: {event:?}");
        let effect = match event {
            PageEditEvent::StateReplaced(state) => return (*state, Effect::none()),
            PageEditEvent::SaveRequested => self.save(model),
            PageEditEvent::KeyPressed(chord) if self.save_chord.matches(&chord) => {
                self.save(model)
            }
            PageEditEvent::KeyPressed(_) => Effect::none(),
            PageEditEvent::DeleteRequested => self.delete(model),
            PageEditEvent::TitleChanged(value) => {
                self.forward(move |actions| actions.update_title(&value))
            }
            PageEditEvent::BodyChanged(value) => {
                self.forward(move |actions| actions.update_body(&value))
            }
            PageEditEvent::PathChanged(value) => {
                self.forward(move |actions| actions.update_path(&value))
            }
            PageEditEvent::DraftToggled(value) => {
                self.forward(move |actions| actions.update_draft(value))
            }
        };
        (model.clone(), effect)
    }

    fn view(&self, model: &ViewState, emitter: &Emitter<PageEditEvent>) -> PageEditProps {
        let errors = (!model.validation_errors.is_empty()).then(|| model.validation_errors.clone());

        let content = if model.is_fetching {
            Content::Loading
        } else {
            match model.loaded_document() {
                Some(document) => Content::Editor(self.editor(document, model, emitter)),
                None => Content::NotFound,
            }
        };

        PageEditProps {
            heading: self.heading(model).to_string(),
            errors,
            content,
        }
    }
}

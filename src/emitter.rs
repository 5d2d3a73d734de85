//! Event emitter for embedding callbacks in Props.

use flume::Sender;

/// Message carried on the host's event queue.
pub(crate) enum Signal<Event> {
    Event(Event),
    Detach,
}

/// Event emitter that can be embedded in Props.
///
/// Clone this handle to build callbacks in your Props that trigger events
/// when invoked (e.g., a click on the Save control).
///
/// `Emitter` wraps a flume channel sender, so it is cheap to clone and can
/// be used from any thread. Events are still processed one at a time by
/// the host that created the emitter.
///
/// # Example
///
/// ```rust
/// use page_edit_mvu::{Effect, Emitter, MvuLogic};
///
/// enum Event { SaveClicked }
///
/// #[derive(Clone)]
/// struct Model { dirty: bool }
///
/// struct Props {
///     dirty: bool,
///     on_save: Box<dyn Fn() + Send>,
/// }
///
/// struct Form;
///
/// impl MvuLogic<Event, Model, Props> for Form {
///     fn init(&self, model: Model) -> (Model, Effect<Event>) {
///         (model, Effect::none())
///     }
///
///     fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
///         match event {
///             Event::SaveClicked => (Model { dirty: false }, Effect::none()),
///         }
///     }
///
///     fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
///         let emitter = emitter.clone();
///         Props {
///             dirty: model.dirty,
///             on_save: Box::new(move || emitter.emit(Event::SaveClicked)),
///         }
///     }
/// }
/// ```
pub struct Emitter<Event: Send>(pub(crate) Sender<Signal<Event>>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Signal<Event>>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// The event is queued for the host. Once the host has been detached
    /// the event is dropped.
    pub fn emit(&self, event: Event) {
        if self.0.send(Signal::Event(event)).is_err() {
            log::trace!("event emitted after the view was detached; dropped");
        }
    }

    /// Ask the host to stop processing events.
    ///
    /// Events already queued ahead of the request are still processed.
    pub(crate) fn detach(&self) {
        if self.0.send(Signal::Detach).is_err() {
            log::trace!("detach requested after the host was dropped");
        }
    }
}

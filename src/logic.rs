//! Component logic trait defining the MVU contract.

use crate::{Effect, Emitter};

/// Component logic trait defining the MVU contract.
///
/// Implementations provide three functions:
/// - [`init`](Self::init): the attach hook, run once before the first render
/// - [`update`](Self::update): Transform (Event, Model) → (Model, Effect)
/// - [`view`](Self::view): Derive Props from Model with event emitter capability
///
/// [`PageEdit`](crate::PageEdit) is the component shipped with this crate.
pub trait MvuLogic<Event: Send, Model, Props> {
    /// Attach the component to its initial model.
    ///
    /// Called exactly once by the host. The returned effect is executed
    /// before the first Props are rendered, which makes it the place to
    /// reset stale state left behind by a previous navigation.
    fn init(&self, model: Model) -> (Model, Effect<Event>);

    /// Reduce an event to an updated model and side effects.
    ///
    /// All model changes happen here. Requests that belong to external
    /// collaborators are returned as effects rather than performed inline.
    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>);

    /// Derive Props from the current model.
    ///
    /// The provided [`Emitter`] lets Props carry callbacks that feed new
    /// events back into the host.
    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props;
}

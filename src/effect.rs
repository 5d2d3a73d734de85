//! Declarative effect system for describing handler calls and follow-up events.

use crate::Emitter;

/// Declarative description of work to perform after a model transition.
///
/// Effects are returned from [`MvuLogic::init`](crate::MvuLogic::init) and
/// [`MvuLogic::update`](crate::MvuLogic::update) alongside the model. The
/// host executes each effect once, synchronously, before rendering the
/// resulting Props. An effect may call out to external handlers
/// ([`Effect::call`]) or queue further events ([`Effect::just`]).
///
/// # Example
///
/// ```rust
/// use page_edit_mvu::Effect;
///
/// enum Event {
///     Reload,
/// }
///
/// // Queue a follow-up event
/// let effect = Effect::just(Event::Reload);
///
/// // Call out to an external collaborator, then queue an event
/// let effect = Effect::batch(vec![
///     Effect::call(|| println!("saving")),
///     Effect::just(Event::Reload),
/// ]);
///
/// // Nothing to do
/// let effect: Effect<Event> = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event>(Box<dyn FnOnce(&Emitter<Event>) + Send + 'static>)
where
    Event: Send;

impl<Event: Send + 'static> Effect<Event> {
    fn new(run: impl FnOnce(&Emitter<Event>) + Send + 'static) -> Self {
        Self(Box::new(run))
    }

    pub(crate) fn execute(self, emitter: &Emitter<Event>) {
        (self.0)(emitter);
    }

    /// Create an effect that does nothing.
    pub fn none() -> Self {
        Self::new(|_| {})
    }

    /// Create an effect that queues a single event.
    ///
    /// The event is processed after the current one, in emission order.
    pub fn just(event: Event) -> Self {
        Self::new(move |emitter: &Emitter<Event>| emitter.emit(event))
    }

    /// Create an effect that invokes a side-effecting closure.
    ///
    /// This is how a view forwards intent to an external handler. The
    /// closure's outcome is not observed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use page_edit_mvu::Effect;
    ///
    /// enum Event {}
    ///
    /// let saves = Arc::new(AtomicUsize::new(0));
    /// let counter = saves.clone();
    /// let effect: Effect<Event> = Effect::call(move || {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    /// ```
    pub fn call(f: impl FnOnce() + Send + 'static) -> Self {
        Self::new(move |_| f())
    }

    /// Combine multiple effects into a single effect.
    ///
    /// Effects run in the order given.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self::new(move |emitter: &Emitter<Event>| {
            for effect in effects {
                effect.execute(emitter);
            }
        })
    }
}

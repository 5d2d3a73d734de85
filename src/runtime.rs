//! The MVU host that attaches a view, drives its event loop and detaches it.

use flume::Receiver;

use crate::emitter::Signal;
use crate::{Emitter, MvuLogic, Renderer};

/// Handle given to the controller that owns a hosted view.
///
/// The controller uses it to push events the user did not cause (a new
/// [`ViewState`](crate::ViewState) snapshot from the store, for instance)
/// and to detach the view when it is unmounted.
pub struct ViewHandle<Event: Send> {
    emitter: Emitter<Event>,
}

impl<Event: Send> Clone for ViewHandle<Event> {
    fn clone(&self) -> Self {
        Self {
            emitter: self.emitter.clone(),
        }
    }
}

impl<Event: Send> ViewHandle<Event> {
    /// Queue an event for the hosted view.
    pub fn emit(&self, event: Event) {
        self.emitter.emit(event);
    }

    /// Detach the hosted view.
    ///
    /// Events queued before this call are still processed; anything
    /// emitted afterwards is dropped once the host has stopped.
    pub fn detach(&self) {
        self.emitter.detach();
    }
}

/// The MVU host that orchestrates the event loop.
///
/// It:
/// 1. Attaches the view via [`MvuLogic::init`] and executes the attach effect
/// 2. Renders the initial Props
/// 3. Processes events through [`MvuLogic::update`], executing each effect
/// 4. Reduces the Model to Props via [`MvuLogic::view`] and hands them to the [`Renderer`]
///
/// Events can be emitted from any thread but are processed one at a time
/// on whichever task awaits [`MvuRuntime::run`].
///
/// For tests with manual control, use [`TestMvuRuntime`] with a [`crate::TestRenderer`].
///
/// # Type Parameters
///
/// * `Event` - The event type of the view
/// * `Model` - The model the view renders from
/// * `Props` - The props type produced by the view function
/// * `Logic` - The logic implementation type (implements [`MvuLogic`])
/// * `Render` - The renderer implementation type (implements [`Renderer`])
pub struct MvuRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send,
    Model: Clone,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Signal<Event>>,
    model: Model,
    emitter: Emitter<Event>,
    _props: core::marker::PhantomData<Props>,
}

impl<Event, Model, Props, Logic, Render> MvuRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Create a new host.
    ///
    /// Nothing is attached or rendered until [`MvuRuntime::run`] is awaited.
    ///
    /// # Arguments
    ///
    /// * `init_model` - The model to attach with
    /// * `logic` - The view's logic implementing MvuLogic
    /// * `renderer` - Platform rendering implementation for rendering Props
    pub fn new(init_model: Model, logic: Logic, renderer: Render) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        MvuRuntime {
            logic,
            renderer,
            event_receiver,
            model: init_model,
            emitter: Emitter::new(event_sender),
            _props: core::marker::PhantomData,
        }
    }

    /// Get a handle for pushing events to, and detaching, this view.
    pub fn handle(&self) -> ViewHandle<Event> {
        ViewHandle {
            emitter: self.emitter.clone(),
        }
    }

    /// Attach the view and run the event processing loop until detached.
    ///
    /// - Runs MvuLogic::init and executes its effect.
    /// - Renders the initial Props.
    /// - Processes queued events in order until a detach request arrives.
    ///
    /// Returns the model as it stood when the view was detached.
    pub async fn run(mut self) -> Model {
        self.attach();

        while let Ok(signal) = self.event_receiver.recv_async().await {
            match signal {
                Signal::Event(event) => self.step(event),
                Signal::Detach => break,
            }
        }

        log::debug!("view detached");
        self.model
    }

    fn attach(&mut self) {
        let (model, effect) = self.logic.init(self.model.clone());
        self.model = model;
        effect.execute(&self.emitter);

        let props = self.logic.view(&self.model, &self.emitter);
        self.renderer.render(props);
        log::debug!("view attached");
    }

    fn step(&mut self, event: Event) {
        let (model, effect) = self.logic.update(event, &self.model);
        self.model = model;
        effect.execute(&self.emitter);

        let props = self.logic.view(&self.model, &self.emitter);
        self.renderer.render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test driver for manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Returned by [`TestMvuRuntime::run`]. See [`TestMvuRuntime`] for usage.
pub struct TestMvuDriver<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render>,
    detached: bool,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render> TestMvuDriver<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Process all queued events.
    ///
    /// Drains the queue, including events queued by effects along the way.
    /// Stops early at a detach request; later calls then do nothing.
    pub fn process_events(&mut self) {
        if self.detached {
            return;
        }
        while let Ok(signal) = self.runtime.event_receiver.try_recv() {
            match signal {
                Signal::Event(event) => self.runtime.step(event),
                Signal::Detach => {
                    log::debug!("view detached");
                    self.detached = true;
                    break;
                }
            }
        }
    }

    /// Get a handle for pushing events to, and detaching, the view.
    pub fn handle(&self) -> ViewHandle<Event> {
        self.runtime.handle()
    }

    /// Whether a detach request has been processed.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// The current model.
    pub fn model(&self) -> &Model {
        &self.runtime.model
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test host for MVU with manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Unlike [`MvuRuntime`], this host does not process events as they are
/// emitted. Tests call [`process_events`](TestMvuDriver::process_events)
/// on the returned driver to drain the queue.
///
/// ```rust
/// use page_edit_mvu::{Emitter, Effect, Renderer, MvuLogic, TestMvuRuntime};
/// # enum Event { Touch }
/// # #[derive(Clone)]
/// # struct Model { touched: u32 }
/// # struct Props { touched: u32, on_touch: Box<dyn Fn()> }
/// # struct Toucher;
/// # impl MvuLogic<Event, Model, Props> for Toucher {
/// #     fn init(&self, model: Model) -> (Model, Effect<Event>) { (model, Effect::none()) }
/// #     fn update(&self, _event: Event, model: &Model) -> (Model, Effect<Event>) {
/// #         (Model { touched: model.touched + 1 }, Effect::none())
/// #     }
/// #     fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
/// #         let e = emitter.clone();
/// #         Props { touched: model.touched, on_touch: Box::new(move || e.emit(Event::Touch)) }
/// #     }
/// # }
/// # struct NullRenderer;
/// # impl Renderer<Props> for NullRenderer { fn render(&mut self, _props: Props) {} }
/// let runtime = TestMvuRuntime::new(Model { touched: 0 }, Toucher, NullRenderer);
/// let mut driver = runtime.run();
/// driver.handle().emit(Event::Touch);
/// driver.process_events();
/// assert_eq!(driver.model().touched, 1);
/// ```
pub struct TestMvuRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render> TestMvuRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Create a new test host.
    ///
    /// # Arguments
    ///
    /// * `init_model` - The model to attach with
    /// * `logic` - The view's logic implementing MvuLogic
    /// * `renderer` - Rendering implementation, usually a [`crate::TestRenderer`]
    pub fn new(init_model: Model, logic: Logic, renderer: Render) -> Self {
        TestMvuRuntime {
            runtime: MvuRuntime::new(init_model, logic, renderer),
        }
    }

    /// Attach the view and return a driver for manual event processing.
    ///
    /// The attach effect has run and the initial Props have been rendered
    /// by the time this returns. Events queued by the attach effect wait
    /// for [`process_events`](TestMvuDriver::process_events).
    pub fn run(mut self) -> TestMvuDriver<Event, Model, Props, Logic, Render> {
        self.runtime.attach();

        TestMvuDriver {
            runtime: self.runtime,
            detached: false,
        }
    }
}

//! Renderer abstraction for rendering Props.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for rendering Props.
///
/// Implement this trait to put a view on screen (HTML, terminal, native
/// toolkit, ...). [`render`](Self::render) is called after attach and after
/// every processed event with Props freshly derived from the model.
///
/// See [`MarkupRenderer`](crate::MarkupRenderer) for an HTML fragment renderer.
///
/// # Example
///
/// ```rust
/// use page_edit_mvu::Renderer;
///
/// struct Props {
///     heading: String,
/// }
///
/// struct ConsoleRenderer;
///
/// impl Renderer<Props> for ConsoleRenderer {
///     fn render(&mut self, props: Props) {
///         println!("# {}", props.heading);
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props.
    ///
    /// Props may contain callbacks (via [`Emitter`](crate::Emitter)) that
    /// trigger new events.
    fn render(&mut self, props: Props);
}

impl<Props, R: Renderer<Props> + ?Sized> Renderer<Props> for Box<R> {
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so keep one clone for
/// assertions and hand the other to [`TestMvuRuntime`](crate::TestMvuRuntime).
///
/// # Example
///
/// ```rust
/// use page_edit_mvu::{TestMvuRuntime, TestRenderer, MvuLogic, Effect, Emitter};
///
/// # struct Props { heading: String }
/// #
/// # struct Heading;
/// #
/// # impl MvuLogic<(), String, Props> for Heading {
/// #     fn init(&self, m: String) -> (String, Effect<()>) { (m, Effect::none()) }
/// #     fn update(&self, _e: (), m: &String) -> (String, Effect<()>) {
/// #         (m.clone(), Effect::none())
/// #     }
/// #     fn view(&self, m: &String, _: &Emitter<()>) -> Props {
/// #         Props { heading: m.clone() }
/// #     }
/// # }
/// let renderer = TestRenderer::<Props>::new();
///
/// let runtime = TestMvuRuntime::new("Welcome".to_string(), Heading, renderer.clone());
/// let _driver = runtime.run();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].heading, "Welcome");
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives every captured Props in render order. Use it
    /// to assert on output or to invoke a callback, such as clicking Save
    /// on the most recent render.
    ///
    /// Do not call back into the same renderer from inside the closure;
    /// the capture storage is locked for its duration.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Access the most recent render.
    ///
    /// # Panics
    ///
    /// Panics when nothing has been rendered yet.
    pub fn with_latest<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Props) -> R,
    {
        let renders = self.renders.lock();
        f(renders.last().expect("nothing has been rendered"))
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Something that scrolls and accepts scroll listeners.
pub trait ScrollTarget {
    type Listener;

    fn offset(&self) -> Option<f64>;
    /// `None` when the listener could not be registered.
    fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Option<Self::Listener>;
    fn unlisten(&self, listener: &Self::Listener);
}

pub struct WindowScroll(Window);

impl WindowScroll {
    pub fn new(window: Window) -> Self {
        Self(window)
    }
}

impl ScrollTarget for WindowScroll {
    type Listener = Closure<dyn FnMut()>;

    fn offset(&self) -> Option<f64> {
        self.0.scroll_y().ok()
    }

    fn listen(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Option<Self::Listener> {
        let reader = self.0.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        match self
            .0
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        {
            Ok(()) => Some(scroll_callback),
            Err(err) => {
                log::warn!("Could not listen for scroll events: {:?}", err);
                None
            }
        }
    }

    fn unlisten(&self, scroll_callback: &Self::Listener) {
        if let Err(err) = self
            .0
            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        {
            log::warn!("Could not remove scroll listener: {:?}", err);
        }
    }
}

/// A single scroll subscription, released on drop.
///
/// The current offset is reported once on attach, since a page may be
/// restored mid-scroll on reload.
pub struct ScrollWatch<T: ScrollTarget> {
    target: T,
    listener: Option<T::Listener>,
}

impl<T: ScrollTarget> ScrollWatch<T> {
    pub fn attach(target: T, mut report: impl FnMut(f64) + 'static) -> Self {
        if let Some(y) = target.offset() {
            report(y);
        }
        let listener = target.listen(Box::new(report));
        Self { target, listener }
    }
}

impl<T: ScrollTarget> Drop for ScrollWatch<T> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.target.unlisten(&listener);
        }
    }
}

//! The page host: timers, viewport and scroll position.
//!
//! Components never touch `window` directly. They go through [`Host`], which
//! hands back explicit handles for every timer and listener so teardown can
//! release exactly what was acquired.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Handle to a pending one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub(crate) u64);

/// Handle to a registered resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub(crate) u64);

pub trait Host {
    /// Run `callback` once after `delay_ms`. `None` if the host refused.
    fn schedule_once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<TimerHandle>;

    /// Cancel a timer. Cancelling an already fired timer is a no-op.
    fn cancel(&self, handle: TimerHandle);

    /// Call `callback` with the new viewport width on every resize.
    fn subscribe_resize(&self, callback: Rc<dyn Fn(f64)>) -> Option<ListenerHandle>;

    fn unsubscribe(&self, handle: ListenerHandle);

    fn viewport_width(&self) -> Option<f64>;

    /// Reset the page scroll position to (0, 0).
    fn scroll_to_top(&self);
}

/// [`Host`] backed by the browser `window`.
///
/// Closures handed to the browser are kept here until cancelled or
/// unsubscribed; dropping the host releases whatever is left.
#[derive(Default)]
pub struct BrowserHost {
    next_id: Cell<u64>,
    timers: RefCell<HashMap<u64, (i32, Closure<dyn FnMut()>)>>,
    listeners: RefCell<HashMap<u64, Closure<dyn FnMut(web_sys::Event)>>>,
}

impl BrowserHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

fn current_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

impl Host for BrowserHost {
    fn schedule_once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<TimerHandle> {
        let window = web_sys::window()?;
        let closure: Closure<dyn FnMut()> = Closure::once(callback);
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(browser_id) => {
                let id = self.next_id();
                self.timers.borrow_mut().insert(id, (browser_id, closure));
                Some(TimerHandle(id))
            }
            Err(err) => {
                tracing::warn!(?err, "setTimeout rejected");
                None
            }
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        let Some((browser_id, _closure)) = self.timers.borrow_mut().remove(&handle.0) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(browser_id);
        }
    }

    fn subscribe_resize(&self, callback: Rc<dyn Fn(f64)>) -> Option<ListenerHandle> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(width) = current_width() {
                callback(width);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(err) =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to register resize listener");
            return None;
        }

        let id = self.next_id();
        self.listeners.borrow_mut().insert(id, closure);
        Some(ListenerHandle(id))
    }

    fn unsubscribe(&self, handle: ListenerHandle) {
        let Some(closure) = self.listeners.borrow_mut().remove(&handle.0) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) =
            window.remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to remove resize listener");
        }
    }

    fn viewport_width(&self) -> Option<f64> {
        current_width()
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

impl Drop for BrowserHost {
    fn drop(&mut self) {
        let timers: Vec<u64> = self.timers.borrow().keys().copied().collect();
        for id in timers {
            self.cancel(TimerHandle(id));
        }
        let listeners: Vec<u64> = self.listeners.borrow().keys().copied().collect();
        for id in listeners {
            self.unsubscribe(ListenerHandle(id));
        }
    }
}

//! Run/stop handle for animation-frame and timeout loops
//!
//! A `Ticker` owns one JS callback for its whole life. Each step returns
//! `Next` to say how (or whether) to run again, and `stop()` cancels whatever
//! is pending. Dropping the ticker stops it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// What a step wants after it ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Run again on the next animation frame
    Frame,
    /// Run again after a delay (ms)
    After(u32),
    /// Stop the loop
    Done,
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Frame(i32),
    Timeout(i32),
}

struct Inner {
    running: Cell<bool>,
    pending: Cell<Option<Pending>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Inner {
    fn schedule(&self, next: Next) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        let function = callback.as_ref().unchecked_ref();

        let pending = match next {
            Next::Frame => window.request_animation_frame(function).map(Pending::Frame),
            Next::After(ms) => window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    function,
                    ms.min(i32::MAX as u32) as i32,
                )
                .map(Pending::Timeout),
            Next::Done => {
                self.running.set(false);
                return;
            }
        };

        match pending {
            Ok(p) => self.pending.set(Some(p)),
            Err(e) => {
                log::warn!("Failed to schedule callback: {:?}", e);
                self.running.set(false);
            }
        }
    }

    fn cancel(&self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        match pending {
            Pending::Frame(id) => {
                let _ = window.cancel_animation_frame(id);
            }
            Pending::Timeout(id) => window.clear_timeout_with_handle(id),
        }
    }
}

/// Explicit start/stop handle around a repeating browser callback
pub struct Ticker {
    inner: Rc<Inner>,
}

impl Ticker {
    /// Wrap a step function; it receives `performance.now()` in ms
    pub fn new(mut step: impl FnMut(f64) -> Next + 'static) -> Self {
        let inner = Rc::new(Inner {
            running: Cell::new(false),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if !inner.running.get() {
                return;
            }
            let next = step(now_ms());
            // The step may have stopped us
            if inner.running.get() {
                inner.schedule(next);
            }
        });
        *inner.callback.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Begin the loop; the first step runs as `first` says
    pub fn start(&self, first: Next) {
        self.inner.cancel();
        if first == Next::Done {
            self.inner.running.set(false);
            return;
        }
        self.inner.running.set(true);
        self.inner.schedule(first);
    }

    /// Cancel any pending step
    pub fn stop(&self) {
        self.inner.running.set(false);
        self.inner.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Current high-resolution time in ms
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

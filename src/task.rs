//! Timer-driven tasks on the browser event loop.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Handle to a task started with [`spawn_loop`]. Clones share the same task.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    stopped: Rc<Cell<bool>>,
}

impl TaskHandle {
    /// End the task before its next step. A step already running finishes.
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Run `step` until it returns `None` or the handle is stopped.
/// `Some(ms)` is the delay before the next step.
pub fn spawn_loop(mut step: impl FnMut() -> Option<u32> + 'static) -> TaskHandle {
    let handle = TaskHandle {
        stopped: Rc::new(Cell::new(false)),
    };
    let stopped = handle.stopped.clone();
    spawn_local(async move {
        while !stopped.get() {
            match step() {
                Some(delay_ms) => TimeoutFuture::new(delay_ms).await,
                None => break,
            }
        }
        stopped.set(true);
    });
    handle
}

/// Run `f` once after `delay_ms`.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, f).forget();
}

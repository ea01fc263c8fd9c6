//! Shared Tokio runtime helper for integration tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use tokio::runtime::{Builder, Runtime};

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    /// Creates a current-thread runtime whose clock starts paused.
    ///
    /// Sleeping tasks complete as soon as the runtime is otherwise idle, so
    /// timers run instantly while still observing their order.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be built.
    pub fn paused() -> Result<Self, io::Error> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .start_paused(true)
            .build()?;
        Ok(Self::new(runtime))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

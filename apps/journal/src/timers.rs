//! Delayed single-shot timers with "most recent schedule wins" semantics.
//!
//! Both timer-driven behaviors in the app - the self-clearing status line and
//! the idle auto-lock - reschedule on every new activity, and only the latest
//! schedule may ever fire. There is never a queue of pending timers for the
//! same purpose.

use std::time::Duration;

use tokio::task::JoinHandle;

#[derive(Default)]
pub struct ResettableTimer {
    task: Option<JoinHandle<()>>,
}

impl ResettableTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `on_fire` after `delay`, cancelling any pending schedule.
    pub fn schedule<F>(&mut self, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ResettableTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

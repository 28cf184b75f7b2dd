//! Trailing-edge debounce on a tokio runtime.
//!
//! Each call cancels the pending timer and starts a new one; the work only
//! runs once `delay` passes without another call. Once the timer fires the
//! work is spawned on its own task, so a later call never cancels a request
//! that already left.

use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

/// Collapses bursts of calls into the last one.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer that schedules work on `runtime`.
    pub fn new(delay: Duration, runtime: Handle) -> Self {
        Self {
            delay,
            runtime,
            pending: None,
        }
    }

    /// Schedule `work`, superseding anything still waiting on its timer.
    pub fn call<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.cancel() {
            trace!("debounce timer reset");
        }

        let delay = self.delay;
        let runtime = self.runtime.clone();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Detach so that aborting the timer no longer reaches the work.
            runtime.spawn(work);
        }));
    }

    /// Drop the pending call, if its timer has not fired yet.
    ///
    /// Returns whether a waiting call was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(timer) if !timer.is_finished() => {
                timer.abort();
                true
            }
            _ => false,
        }
    }

    /// Whether a call is waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

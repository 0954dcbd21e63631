use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesces bursts of mutations into one delayed task.
///
/// Rescheduling aborts the previous timer, so a burst of N mutations runs
/// the task once, `delay` after the last one. At most one task is pending.
pub struct Debouncer {
    delay: Duration,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            handle: Mutex::new(None),
        }
    }

    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let next = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        let mut slot = self.handle.lock().expect("debounce lock poisoned");
        if let Some(prev) = slot.replace(next) {
            prev.abort();
        }
    }

    /// Drops the pending task, if any, without running it.
    pub fn cancel(&self) {
        let mut slot = self.handle.lock().expect("debounce lock poisoned");
        if let Some(pending) = slot.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

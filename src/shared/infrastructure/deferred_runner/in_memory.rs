// In memory implementation of the DeferredRunner port.
//
// Purpose
// - Let tests decide when deferred work runs instead of waiting on a clock.
//
// Responsibilities
// - Queue submitted tasks with their requested delay.
// - Run every queued task on demand, outside the queue lock.

use crate::shared::infrastructure::deferred_runner::{DeferredRunner, DeferredTask};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Default)]
pub struct ManualDeferredRunner {
    queue: Mutex<Vec<(Duration, DeferredTask)>>,
}

impl ManualDeferredRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue().len()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.queue().iter().map(|(delay, _)| *delay).collect()
    }

    /// Runs all queued tasks and returns how many ran.
    pub fn run_pending(&self) -> usize {
        let tasks = std::mem::take(&mut *self.queue());
        let ran = tasks.len();
        for (_, task) in tasks {
            task();
        }
        ran
    }

    fn queue(&self) -> MutexGuard<'_, Vec<(Duration, DeferredTask)>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeferredRunner for ManualDeferredRunner {
    fn run_after(&self, delay: Duration, task: DeferredTask) {
        self.queue().push((delay, task));
    }
}

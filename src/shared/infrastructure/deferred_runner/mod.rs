// Port for running a callback once after a delay.
//
// The core never owns timers. It hands a task to a DeferredRunner and forgets about it;
// whether the task ever runs (for example when the process exits first) is best effort.

pub mod in_memory;
pub mod tokio_runtime;

use std::time::Duration;
use thiserror::Error;

pub type DeferredTask = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Error)]
pub enum DeferredRunnerError {
    #[error("runtime unavailable: {0}")]
    RuntimeUnavailable(String),
}

pub trait DeferredRunner: Send + Sync {
    fn run_after(&self, delay: Duration, task: DeferredTask);
}

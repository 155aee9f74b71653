use crate::shared::infrastructure::deferred_runner::{
    DeferredRunner, DeferredRunnerError, DeferredTask,
};
use std::time::Duration;
use tokio::runtime::Handle;

/// Spawns one lightweight task per submission that sleeps, then runs the callback.
#[derive(Clone)]
pub struct TokioDeferredRunner {
    handle: Handle,
}

impl TokioDeferredRunner {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    pub fn from_current() -> Result<Self, DeferredRunnerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| DeferredRunnerError::RuntimeUnavailable(e.to_string()))
    }
}

impl DeferredRunner for TokioDeferredRunner {
    fn run_after(&self, delay: Duration, task: DeferredTask) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

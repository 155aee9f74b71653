use crate::modules::onboarding::core::counter_store::CounterStore;
use crate::shared::infrastructure::deferred_runner::DeferredRunner;
use std::sync::Arc;
use std::time::Duration;

/// Wait between promotion to `Ready` and the eviction attempt.
pub const EVICTION_DELAY: Duration = Duration::from_secs(5 * 60);

/// Hands deferred `try_evict` calls to a DeferredRunner. Serialization is left to the store.
#[derive(Clone)]
pub struct EvictionScheduler {
    store: Arc<CounterStore>,
    runner: Arc<dyn DeferredRunner>,
}

impl EvictionScheduler {
    pub fn new(store: Arc<CounterStore>, runner: Arc<dyn DeferredRunner>) -> Self {
        Self { store, runner }
    }

    pub fn schedule_eviction(&self, user_id: &str, delay: Duration) {
        let store = Arc::clone(&self.store);
        let user_id = user_id.to_owned();
        self.runner.run_after(
            delay,
            Box::new(move || {
                if store.try_evict(&user_id) {
                    tracing::info!(user_id = %user_id, ?delay, "user removed from cache");
                } else {
                    tracing::debug!(user_id = %user_id, "no ready record to evict");
                }
            }),
        );
    }
}

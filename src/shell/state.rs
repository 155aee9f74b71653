use crate::modules::onboarding::adapters::outbound::eviction_scheduler::EvictionScheduler;
use crate::modules::onboarding::core::counter_store::CounterStore;
use crate::modules::onboarding::use_cases::get_onboarding_status::queries_port::OnboardingQueries;
use crate::modules::onboarding::use_cases::record_onboarding_event::handler::RecordOnboardingEventHandler;
use crate::shared::infrastructure::deferred_runner::DeferredRunner;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn OnboardingQueries + Send + Sync>,
    pub record_handler: Arc<RecordOnboardingEventHandler>,
    pub store: Arc<CounterStore>,
}

impl AppState {
    pub fn new(runner: Arc<dyn DeferredRunner>) -> Self {
        let store = Arc::new(CounterStore::new());
        let scheduler = EvictionScheduler::new(store.clone(), runner);
        let record_handler = Arc::new(RecordOnboardingEventHandler::new(store.clone(), scheduler));
        Self {
            queries: store.clone(),
            record_handler,
            store,
        }
    }
}

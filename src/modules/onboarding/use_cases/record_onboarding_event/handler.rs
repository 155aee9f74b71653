use crate::modules::onboarding::adapters::outbound::eviction_scheduler::{
    EVICTION_DELAY, EvictionScheduler,
};
use crate::modules::onboarding::core::counter_store::CounterStore;
use crate::modules::onboarding::core::view::OnboardingView;
use crate::modules::onboarding::use_cases::record_onboarding_event::command::RecordOnboardingEvent;
use std::sync::Arc;

pub struct RecordOnboardingEventHandler {
    store: Arc<CounterStore>,
    scheduler: EvictionScheduler,
}

impl RecordOnboardingEventHandler {
    pub fn new(store: Arc<CounterStore>, scheduler: EvictionScheduler) -> Self {
        Self { store, scheduler }
    }

    pub fn handle(&self, command: RecordOnboardingEvent) -> OnboardingView {
        let RecordOnboardingEvent { user_id } = command;
        let outcome = self.store.record_event(&user_id);

        // Scheduled on the crossing call only; later Ready calls reuse the pending eviction.
        if outcome.just_promoted {
            tracing::info!(
                user_id = %user_id,
                count = outcome.count,
                "user is ready, scheduling eviction"
            );
            self.scheduler.schedule_eviction(&user_id, EVICTION_DELAY);
        }

        OnboardingView {
            user_id,
            status: outcome.status,
        }
    }
}

#[cfg(test)]
mod record_onboarding_event_handler_tests {
    use super::*;
    use crate::modules::onboarding::core::status::OnboardingStatus;
    use crate::shared::infrastructure::deferred_runner::in_memory::ManualDeferredRunner;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<CounterStore>,
        Arc<ManualDeferredRunner>,
        RecordOnboardingEventHandler,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(CounterStore::new());
        let runner = Arc::new(ManualDeferredRunner::new());
        let scheduler = EvictionScheduler::new(store.clone(), runner.clone());
        let handler = RecordOnboardingEventHandler::new(store.clone(), scheduler);
        (store, runner, handler)
    }

    fn record(handler: &RecordOnboardingEventHandler, user_id: &str) -> OnboardingView {
        handler.handle(RecordOnboardingEvent {
            user_id: user_id.to_string(),
        })
    }

    #[rstest]
    fn it_should_schedule_one_eviction_on_the_third_event(before_each: BeforeEachReturn) {
        let (_, runner, handler) = before_each;
        let statuses: Vec<_> = (0..3).map(|_| record(&handler, "alice").status).collect();
        assert_eq!(
            statuses,
            vec![
                OnboardingStatus::InProgress,
                OnboardingStatus::InProgress,
                OnboardingStatus::Ready,
            ]
        );
        assert_eq!(runner.delays(), vec![EVICTION_DELAY]);
    }

    #[rstest]
    fn it_should_not_schedule_again_while_ready(before_each: BeforeEachReturn) {
        let (_, runner, handler) = before_each;
        for _ in 0..3 {
            record(&handler, "alice");
        }
        let fourth = record(&handler, "alice");
        assert_eq!(
            fourth,
            OnboardingView {
                user_id: "alice".into(),
                status: OnboardingStatus::Ready,
            }
        );
        assert_eq!(runner.pending(), 1);
    }

    #[rstest]
    fn it_should_start_over_after_the_eviction_runs(before_each: BeforeEachReturn) {
        let (store, runner, handler) = before_each;
        for _ in 0..3 {
            record(&handler, "alice");
        }
        runner.run_pending();
        assert!(store.is_empty());
        assert_eq!(
            record(&handler, "alice").status,
            OnboardingStatus::InProgress
        );
        assert_eq!(store.count("alice"), 1);
        assert_eq!(runner.pending(), 0);
    }

    #[rstest]
    fn it_should_schedule_per_user(before_each: BeforeEachReturn) {
        let (store, runner, handler) = before_each;
        for _ in 0..3 {
            record(&handler, "alice");
            record(&handler, "bob");
        }
        record(&handler, "carol");
        assert_eq!(runner.pending(), 2);
        runner.run_pending();
        assert_eq!(store.len(), 1);
        assert_eq!(store.count("carol"), 1);
    }
}

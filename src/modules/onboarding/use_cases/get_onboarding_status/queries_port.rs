use crate::modules::onboarding::core::counter_store::CounterStore;
use crate::modules::onboarding::core::view::OnboardingView;

/// Read side of the onboarding counters. Never mutates.
pub trait OnboardingQueries {
    fn status_of(&self, user_id: &str) -> OnboardingView;
}

impl OnboardingQueries for CounterStore {
    fn status_of(&self, user_id: &str) -> OnboardingView {
        OnboardingView {
            user_id: user_id.to_string(),
            status: self.status(user_id),
        }
    }
}

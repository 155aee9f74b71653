use serde::Serialize;

use crate::modules::onboarding::core::status::OnboardingStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingView {
    pub user_id: String,
    pub status: OnboardingStatus,
}

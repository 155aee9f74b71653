use async_graphql::{Context, Enum, Object, SimpleObject};

use crate::modules::onboarding::core::status::OnboardingStatus;
use crate::modules::onboarding::core::view::OnboardingView;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GqlOnboardingStatus {
    InProgress,
    Ready,
}

impl From<OnboardingStatus> for GqlOnboardingStatus {
    fn from(status: OnboardingStatus) -> Self {
        match status {
            OnboardingStatus::InProgress => Self::InProgress,
            OnboardingStatus::Ready => Self::Ready,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlOnboardingView {
    pub user_id: String,
    pub status: GqlOnboardingStatus,
}

impl From<OnboardingView> for GqlOnboardingView {
    fn from(v: OnboardingView) -> Self {
        Self {
            user_id: v.user_id,
            status: v.status.into(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn onboarding_status(&self, context: &Context<'_>, user_id: String) -> GqlOnboardingView {
        let state = context.data_unchecked::<AppState>();
        state.queries.status_of(&user_id).into()
    }
}

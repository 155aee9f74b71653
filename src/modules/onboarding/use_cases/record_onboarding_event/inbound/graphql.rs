use async_graphql::{Context, Object};

use crate::modules::onboarding::use_cases::get_onboarding_status::inbound::graphql::GqlOnboardingView;
use crate::modules::onboarding::use_cases::record_onboarding_event::command::RecordOnboardingEvent;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn record_onboarding_event(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlOnboardingView {
        let state = context.data_unchecked::<AppState>();
        state
            .record_handler
            .handle(RecordOnboardingEvent { user_id })
            .into()
    }
}

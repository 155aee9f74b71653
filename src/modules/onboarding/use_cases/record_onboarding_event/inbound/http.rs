use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::onboarding::use_cases::record_onboarding_event::command::RecordOnboardingEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordOnboardingEventBody {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordOnboardingEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected onboarding request body");
            return (StatusCode::BAD_REQUEST, "Invalid JSON").into_response();
        }
    };

    tracing::debug!(user_id = %body.user_id, name = ?body.name, "onboarding event received");

    let view = state.record_handler.handle(RecordOnboardingEvent {
        user_id: body.user_id,
    });
    (StatusCode::OK, Json(view)).into_response()
}

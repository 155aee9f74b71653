use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::onboarding::use_cases::get_onboarding_status::inbound::http as status_http;
use crate::modules::onboarding::use_cases::record_onboarding_event::inbound::http as record_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/onboard", post(record_http::handle))
        .route("/onboard/{user_id}", get(status_http::handle))
        .with_state(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

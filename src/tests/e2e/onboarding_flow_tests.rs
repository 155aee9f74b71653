// End to end onboarding flow through the HTTP router on tokio's paused clock.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::modules::onboarding::adapters::outbound::eviction_scheduler::EVICTION_DELAY;
use crate::modules::onboarding::core::counter_store::CounterStore;
use crate::shared::infrastructure::deferred_runner::tokio_runtime::TokioDeferredRunner;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn make_app() -> (Router, Arc<CounterStore>) {
    let runner = Arc::new(TokioDeferredRunner::from_current().expect("runtime available"));
    let state = AppState::new(runner);
    let store = state.store.clone();
    (router(state), store)
}

async fn onboard(app: &Router, user_id: &str) -> serde_json::Value {
    let body = serde_json::json!({ "user_id": user_id, "name": "Test User" }).to_string();
    let response = app
        .clone()
        .oneshot(
            Request::post("/onboard")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test(start_paused = true)]
async fn it_should_promote_on_the_third_event_and_evict_after_the_delay() {
    let (app, store) = make_app();

    assert_eq!(onboard(&app, "alice").await["status"], "InProgress");
    assert_eq!(onboard(&app, "alice").await["status"], "InProgress");
    assert_eq!(
        onboard(&app, "alice").await,
        serde_json::json!({"user_id": "alice", "status": "Ready"})
    );

    tokio::time::sleep(EVICTION_DELAY - Duration::from_secs(1)).await;
    assert_eq!(onboard(&app, "alice").await["status"], "Ready");
    assert_eq!(store.count("alice"), 4);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(store.count("alice"), 0);

    assert_eq!(onboard(&app, "alice").await["status"], "InProgress");
    assert_eq!(store.count("alice"), 1);
}

#[tokio::test(start_paused = true)]
async fn it_should_keep_users_independent_across_evictions() {
    let (app, store) = make_app();

    for _ in 0..3 {
        onboard(&app, "bob").await;
    }
    assert_eq!(onboard(&app, "alice").await["status"], "InProgress");

    tokio::time::sleep(EVICTION_DELAY + Duration::from_secs(1)).await;

    assert_eq!(store.count("bob"), 0);
    assert_eq!(store.count("alice"), 1);
    assert_eq!(store.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_not_lose_concurrent_events_for_the_same_user() {
    let (app, store) = make_app();

    let requests: Vec<_> = (0..50)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { onboard(&app, "carol").await })
        })
        .collect();
    for request in requests {
        request.await.unwrap();
    }

    assert_eq!(store.count("carol"), 50);
}

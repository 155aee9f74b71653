use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use user_onboarding::shared::infrastructure::deferred_runner::tokio_runtime::TokioDeferredRunner;
use user_onboarding::shell::config::AppConfig;
use user_onboarding::shell::http::router;
use user_onboarding::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let runner = Arc::new(TokioDeferredRunner::from_current()?);
    let state = AppState::new(runner);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://{}", addr);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

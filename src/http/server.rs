//! Router assembly and HTTP server lifecycle.

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{AppError, Result};

use super::handlers::{self, AppState};

/// Handler for `GET /health` — returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// Assemble the application router over the shared state.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", post(handlers::add_task))
        .route("/delete/{id}", get(handlers::delete_task))
        .route("/complete/{id}", get(handlers::complete_task))
        .route("/edit/{id}", get(handlers::edit_task))
        .route("/update/{id}", post(handlers::update_task))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind on loopback and serve until the cancellation token fires.
///
/// # Errors
///
/// Returns `AppError::Config` if the port cannot be bound, or
/// `AppError::Io` if the server fails while running.
pub async fn serve(state: AppState, port: u16, ct: CancellationToken) -> Result<()> {
    let bind = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|err| AppError::Config(format!("failed to bind HTTP on {bind}: {err}")))?;

    info!(%bind, "starting HTTP server");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            ct.cancelled().await;
        })
        .await
        .map_err(|err| AppError::Io(format!("HTTP server error: {err}")))?;

    info!("HTTP server shut down");
    Ok(())
}

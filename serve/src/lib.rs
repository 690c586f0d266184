//! HTTP chat server for sibyl (axum).
//!
//! Serves the embedded chat page at `/`, the model list at `/api/models`, and
//! runs one agent turn per `POST /api/chat`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`].

mod app;
mod chat;
mod models;
mod ui;

use std::sync::Arc;

use config::Secrets;
use tokio::net::TcpListener;
use tracing::info;

use app::{router, AppState};

/// Default bind address; the original deployment pins port 7860.
pub const DEFAULT_ADDR: &str = "0.0.0.0:7860";

/// Runs the chat server on an existing listener. Used by tests (bind to
/// 127.0.0.1:0 first, then pass the listener in).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    secrets: Secrets,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("chat server listening on http://{}", addr);
    let state = Arc::new(AppState::new(secrets));
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Runs the chat server. Listens on `addr` (default 0.0.0.0:7860).
pub async fn run_serve(
    addr: Option<&str>,
    secrets: Secrets,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.unwrap_or(DEFAULT_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, secrets).await
}

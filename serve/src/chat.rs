//! Chat endpoint: one request is one agent turn.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sibyl::{models, run_turn, Message};

use super::app::AppState;

/// One prior chat turn as the UI stores it.
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryMessage {
    pub(crate) role: String,
    pub(crate) content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) history: Vec<HistoryMessage>,
    /// Model id from the selector; the catalog default when omitted.
    #[serde(default)]
    pub(crate) model: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    pub(crate) answer: String,
    pub(crate) url: String,
}

fn to_message(m: &HistoryMessage) -> Message {
    match m.role.as_str() {
        "assistant" => Message::assistant(m.content.clone()),
        "system" => Message::system(m.content.clone()),
        _ => Message::user(m.content.clone()),
    }
}

/// Runs one turn and returns `{answer, url}`.
///
/// Unknown or local model ids are a 400; agent failures (malformed model
/// output included) surface as a 500 with the error text.
pub(crate) async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let model = req.model.as_deref().unwrap_or(models::DEFAULT_MODEL);
    let known_hosted = models::find(model).map(|m| !m.local).unwrap_or(false);
    if !known_hosted {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("unknown or unavailable model: {model}"),
        ));
    }

    let history: Vec<Message> = req.history.iter().map(to_message).collect();
    let llm = (state.llm_factory)(model);
    tracing::info!(model, "running turn");
    let output = run_turn(llm, state.tools.clone(), req.message, history, model)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "turn failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;
    Ok(Json(ChatResponse {
        answer: output.answer,
        url: output.url,
    }))
}

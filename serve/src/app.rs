//! Axum app: shared state and router.
//!
//! Routes: `GET /` (embedded chat page), `GET /api/models`, `POST /api/chat`.
//! State is read-only after startup; each request builds its own LLM client
//! through the factory so handler tests can inject a mock.

use std::sync::Arc;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use config::Secrets;
use sibyl::{build_tool_registry, ChatOpenRouter, LlmClient, TavilyClient, ToolRegistry};

use super::chat::chat;
use super::models::list_models;
use super::ui::INDEX_HTML;

/// Builds an [`LlmClient`] for the model id a request selected.
pub(crate) type LlmFactory = Arc<dyn Fn(&str) -> Arc<dyn LlmClient> + Send + Sync>;

/// Shared state for the chat server.
///
/// Cloned per request via `Arc`; holds the fixed tool table and the LLM
/// client factory.
pub(crate) struct AppState {
    pub(crate) llm_factory: LlmFactory,
    pub(crate) tools: Arc<ToolRegistry>,
}

impl AppState {
    /// Production wiring: OpenRouter for completions, Tavily for search.
    pub(crate) fn new(secrets: Secrets) -> Self {
        let openrouter_key = secrets.openrouter_api_key;
        let llm_factory: LlmFactory = Arc::new(move |model: &str| {
            Arc::new(ChatOpenRouter::new(openrouter_key.clone(), model)) as Arc<dyn LlmClient>
        });
        let tools = build_tool_registry(TavilyClient::new(secrets.tavily_api_key));
        Self { llm_factory, tools }
    }

    /// Test wiring: hand in a factory and tool table directly.
    #[cfg(test)]
    pub(crate) fn with_parts(llm_factory: LlmFactory, tools: Arc<ToolRegistry>) -> Self {
        Self { llm_factory, tools }
    }
}

/// Builds the router.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/models", get(list_models))
        .route("/api/chat", post(chat))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use sibyl::MockLlm;

    fn test_router(response: &str) -> Router {
        let response = response.to_string();
        let llm_factory: LlmFactory =
            Arc::new(move |_model: &str| Arc::new(MockLlm::new(response.clone())) as Arc<dyn LlmClient>);
        let tools = build_tool_registry(TavilyClient::new("tvly-test"));
        router(Arc::new(AppState::with_parts(llm_factory, tools)))
    }

    #[tokio::test]
    async fn index_serves_the_chat_page() {
        let app = test_router("{}");
        let res = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("<select"), "model selector present");
        assert!(html.contains("/api/chat"), "page talks to the chat API");
    }

    #[tokio::test]
    async fn models_endpoint_lists_hosted_models_with_cost_lines() {
        let app = test_router("{}");
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/models")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let models: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let list = models.as_array().unwrap();
        assert!(!list.is_empty());
        for entry in list {
            assert!(entry["id"].is_string());
            assert!(entry["cost_line"].as_str().unwrap().contains("input tokens"));
        }
        // Local models are not offered.
        assert!(list.iter().all(|m| m["id"] != "llama3.2"));
        // Exactly one default.
        let defaults: Vec<_> = list.iter().filter(|m| m["default"] == true).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0]["id"], sibyl::DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn chat_endpoint_returns_the_final_answer() {
        let app = test_router(
            r#"{"name": "final_answer", "parameters": {"answer": "All good.", "url": "https://example.com"}}"#,
        );
        let req = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"message": "how are you?", "history": []}"#,
            ))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let out: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(out["answer"], "All good.");
        assert_eq!(out["url"], "https://example.com");
    }

    #[tokio::test]
    async fn chat_endpoint_rejects_unknown_model() {
        let app = test_router("{}");
        let req = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"message": "hi", "model": "no/such-model"}"#,
            ))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_endpoint_maps_malformed_model_output_to_500() {
        let app = test_router("this reply has no tool call at all");
        let req = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"message": "hi"}"#))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Web search tool: wraps the Tavily client for the agent.

use async_trait::async_trait;
use serde_json::json;

use crate::error::AgentError;
use crate::search::TavilyClient;

use super::{Tool, ToolSpec};

pub const TOOL_SEARCH: &str = "search";

/// Web search via Tavily.
///
/// Output is the result blocks joined by blank lines, or "No results found."
/// when the search came back empty (including swallowed transport failures).
pub struct SearchTool {
    client: TavilyClient,
}

impl SearchTool {
    pub fn new(client: TavilyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        TOOL_SEARCH
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_SEARCH.to_string(),
            description: Some(
                "Search the web for up-to-date information. Returns ranked results \
                 with title, url, and content."
                    .to_string(),
            ),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string" }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: serde_json::Value) -> Result<String, AgentError> {
        let query = args
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AgentError::ExecutionFailed("search: missing query".to_string()))?;
        let results = self.client.search(query).await;
        if results.is_empty() {
            return Ok("No results found.".to_string());
        }
        Ok(results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_requires_query() {
        let tool = SearchTool::new(TavilyClient::new("k"));
        let spec = tool.spec();
        assert_eq!(spec.name, "search");
        assert_eq!(spec.parameters["required"][0], "query");
    }

    #[tokio::test]
    async fn missing_query_is_an_error() {
        let tool = SearchTool::new(TavilyClient::new("k"));
        let err = tool.call(serde_json::json!({})).await.unwrap_err();
        assert!(err.to_string().contains("missing query"), "{err}");
    }
}

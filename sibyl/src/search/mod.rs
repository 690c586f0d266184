//! Tavily search client: query in, ranked results out.
//!
//! Transport and decode failures are swallowed: they are logged at `warn` and
//! an empty result list is returned, so the oracle reasons over "no results"
//! instead of failing the turn.

use serde::{Deserialize, Serialize};

const TAVILY_API_URL: &str = "https://api.tavily.com/search";
const MAX_RESULTS: u32 = 10;

fn tavily_api_url() -> String {
    std::env::var("TAVILY_API_URL").unwrap_or_else(|_| TAVILY_API_URL.to_string())
}

/// One ranked search result.
///
/// Consumed only as serialized text in the next oracle prompt; `Display`
/// renders the block that is inserted there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
    pub score: f64,
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}\nurl: {}\nContent:\n{}",
            self.title, self.url, self.content
        )
    }
}

/// Tavily search response body; only the fields the agent consumes.
#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
    include_answer: &'a str,
}

/// Search collaborator backed by the Tavily API.
#[derive(Clone)]
pub struct TavilyClient {
    api_key: String,
}

impl TavilyClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Searches the web; returns up to 10 ranked results.
    ///
    /// Failure (transport, non-2xx, decode) is not surfaced to the caller:
    /// it is logged and an empty list is returned.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        match self.try_search(query).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(error = %e, "error getting results from Tavily");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<Vec<SearchResult>, String> {
        let body = TavilyRequest {
            api_key: &self.api_key,
            query,
            max_results: MAX_RESULTS,
            include_answer: "basic",
        };
        let client = reqwest::Client::new();
        let res = client
            .post(tavily_api_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !res.status().is_success() {
            let status = res.status();
            let err_body = res.text().await.unwrap_or_default();
            return Err(format!("Tavily API error {status}: {err_body}"));
        }
        let out: TavilyResponse = res.json().await.map_err(|e| e.to_string())?;
        Ok(out.results)
    }
}

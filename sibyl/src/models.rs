//! Static model catalog: display names, per-token costs, hosted/local flag.
//!
//! Only hosted (gateway) models are offered by the UI; the local entries are
//! kept in the table but filtered out until a local runtime is wired back in.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Default model preselected in the UI.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-24b-instruct-2501";

/// Model cost: USD per 1M input tokens, per 1M output tokens, per 1K input
/// images. `None` means the price is not published for that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelCost {
    pub input: Option<f64>,
    pub output: Option<f64>,
    pub image: Option<f64>,
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    /// Gateway model identifier (also the value sent by the UI selector).
    pub id: &'static str,
    pub display_name: &'static str,
    pub cost: ModelCost,
    /// True for models served by a local runtime instead of the gateway.
    pub local: bool,
}

impl ModelInfo {
    /// The cost line shown under the model selector.
    pub fn cost_line(&self) -> String {
        format!(
            "{} / M input tokens  ||  {} / M output tokens  ||  {} / K input imgs",
            cost_to_str(self.cost.input),
            cost_to_str(self.cost.output),
            cost_to_str(self.cost.image),
        )
    }
}

/// `$` plus the amount right-aligned to six characters, or ` N/A ` when unpriced.
fn cost_to_str(cost: Option<f64>) -> String {
    match cost {
        Some(c) => format!("${:>6}", format_amount(c)),
        None => " N/A ".to_string(),
    }
}

fn format_amount(c: f64) -> String {
    if c == c.trunc() {
        format!("{}", c as i64)
    } else {
        format!("{c}")
    }
}

static CATALOG: Lazy<Vec<ModelInfo>> = Lazy::new(|| {
    vec![
        ModelInfo {
            id: "mistralai/mistral-small-24b-instruct-2501",
            display_name: "Mistral Small 3 24B",
            cost: ModelCost {
                input: Some(0.1),
                output: Some(0.3),
                image: None,
            },
            local: false,
        },
        ModelInfo {
            id: "meta-llama/llama-3.3-70b-instruct",
            display_name: "Llama 3.3 70B Instruct",
            cost: ModelCost {
                input: Some(0.12),
                output: Some(0.3),
                image: None,
            },
            local: false,
        },
        ModelInfo {
            id: "openai/gpt-4o-mini",
            display_name: "GPT-4o mini",
            cost: ModelCost {
                input: Some(0.15),
                output: Some(0.6),
                image: Some(7.225),
            },
            local: false,
        },
        ModelInfo {
            id: "anthropic/claude-3.5-haiku",
            display_name: "Claude 3.5 Haiku",
            cost: ModelCost {
                input: Some(0.8),
                output: Some(4.0),
                image: None,
            },
            local: false,
        },
        ModelInfo {
            id: "qwen/qwen-2.5-72b-instruct",
            display_name: "Qwen2.5 72B Instruct",
            cost: ModelCost {
                input: Some(0.13),
                output: Some(0.4),
                image: None,
            },
            local: false,
        },
        ModelInfo {
            id: "llama3.2",
            display_name: "Llama 3.2 3B (Ollama)",
            cost: ModelCost {
                input: None,
                output: None,
                image: None,
            },
            local: true,
        },
    ]
});

/// The full catalog, local entries included.
pub fn catalog() -> &'static [ModelInfo] {
    &CATALOG
}

/// The models offered by the UI: hosted only.
pub fn hosted() -> Vec<&'static ModelInfo> {
    CATALOG.iter().filter(|m| !m.local).collect()
}

/// Looks a model up by id.
pub fn find(id: &str) -> Option<&'static ModelInfo> {
    CATALOG.iter().find(|m| m.id == id)
}

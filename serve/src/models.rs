//! Model list endpoint: the selector's data, hosted models only.

use axum::Json;
use serde::Serialize;
use sibyl::models;

#[derive(Debug, Serialize)]
pub(crate) struct ModelEntry {
    id: &'static str,
    display_name: &'static str,
    /// Preformatted cost string shown under the selector.
    cost_line: String,
    default: bool,
}

pub(crate) async fn list_models() -> Json<Vec<ModelEntry>> {
    let entries = models::hosted()
        .into_iter()
        .map(|m| ModelEntry {
            id: m.id,
            display_name: m.display_name,
            cost_line: m.cost_line(),
            default: m.id == models::DEFAULT_MODEL,
        })
        .collect();
    Json(entries)
}

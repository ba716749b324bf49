use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ServerResult;
use crate::state::ServerState;

/// Comparison request body.
///
/// Field names mirror the browser extension that posts here, hence the
/// camelCase renames and the historical `dateTimeFormat`/`marker` pair for
/// the extraction window.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(rename = "originalDocument")]
    pub original_document: String,

    /// Raw HTML of the revised page.
    #[serde(rename = "htmlBodyContent")]
    pub html_body_content: String,

    /// Start marker of the extraction window.
    #[serde(rename = "dateTimeFormat")]
    pub start_marker: String,

    /// End marker of the extraction window.
    #[serde(rename = "marker")]
    pub end_marker: String,

    #[serde(rename = "currentUrl", default)]
    pub current_url: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub success: bool,
    pub html_output: String,
    pub message: String,
}

/// Compare an original document against a revised HTML page.
pub async fn compare(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<CompareRequest>,
) -> ServerResult<impl IntoResponse> {
    tracing::info!(
        original_len = body.original_document.len(),
        html_len = body.html_body_content.len(),
        url = body.current_url.as_deref().unwrap_or("-"),
        "comparison requested"
    );

    let request = clausediff::CompareRequest {
        original_document: body.original_document,
        html_content: body.html_body_content,
        start_marker: body.start_marker,
        end_marker: body.end_marker,
    };

    let outcome =
        clausediff::compare(&request, state.provider.as_ref(), &state.align_config()).await?;

    tracing::info!(
        original_clauses = outcome.original_clauses,
        revised_clauses = outcome.revised_clauses,
        "comparison completed"
    );

    Ok(Json(CompareResponse {
        success: true,
        html_output: outcome.html,
        message: outcome.message,
    }))
}

//! Text and URL analysis routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use briefly_analyze::{analyze, AnalysisResult, LengthMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze-text", post(analyze_text))
        .route("/analyze-url", post(analyze_url))
}

fn default_mode() -> String {
    "extractive".into()
}

fn default_length() -> String {
    "medium".into()
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
    /// Accepted for client compatibility; only extractive summaries exist.
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_length")]
    pub length: String,
}

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_length")]
    pub length: String,
}

/// Body of `/analyze-url`: either a full analysis or `{ "error": ... }`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UrlAnalysis {
    Analysis(AnalysisResult),
    Error { error: String },
}

/// POST /analyze-text — analyze text supplied in the request.
async fn analyze_text(Json(req): Json<TextRequest>) -> Json<AnalysisResult> {
    debug!(mode = %req.mode, length = %req.length, "analyze-text request");
    let result = analyze(&req.text, LengthMode::from_name(&req.length));
    info!(
        word_count = result.word_count,
        summary_len = result.summary.len(),
        "Analyzed text"
    );
    Json(result)
}

/// POST /analyze-url — fetch a page and analyze its paragraph text.
///
/// Fetch failures are reported in the body with status 200.
async fn analyze_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UrlRequest>,
) -> Json<UrlAnalysis> {
    debug!(url = %req.url, mode = %req.mode, length = %req.length, "analyze-url request");

    match state.fetcher.fetch_text(&req.url).await {
        Ok(text) => {
            let result = analyze(&text, LengthMode::from_name(&req.length));
            info!(
                url = %req.url,
                word_count = result.word_count,
                "Analyzed page"
            );
            Json(UrlAnalysis::Analysis(result))
        }
        Err(e) => {
            warn!(url = %req.url, error = %e, "Page analysis failed");
            Json(UrlAnalysis::Error {
                error: e.to_string(),
            })
        }
    }
}

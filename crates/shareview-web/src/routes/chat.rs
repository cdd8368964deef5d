//! Analysis route handler.

use axum::Json;
use shareview_core::analysis::{self, model::AnalysisResult};
use shareview_core::Envelope;
use tracing::info;

/// POST /api/chat - Return the sample market-share analysis.
///
/// The request body and headers are ignored.
pub async fn chat() -> Json<Envelope<AnalysisResult>> {
    let reply = analysis::chat_reply();
    info!(rows = reply.result.as_ref().map_or(0, |r| r.table.len()), "Serving analysis");
    Json(reply)
}

//! Chart route handler.

use axum::{extract::rejection::JsonRejection, Json};
use shareview_core::chart::{self, model::{ChartReply, ChartRequest}};
use tracing::info;

use crate::error::ApiError;

/// POST /api/chart - Suggest a chart for a prompt.
pub async fn chart(
    payload: Result<Json<ChartRequest>, JsonRejection>,
) -> Result<Json<ChartReply>, ApiError> {
    let Json(req) = payload?;
    let reply = chart::chart_reply(&req.prompt)?;
    info!(chart_type = %reply.chart_type, "Serving chart");
    Ok(Json(reply))
}

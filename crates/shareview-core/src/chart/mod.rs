//! Chart suggestions for free-text prompts.

pub mod model;

use model::{ChartData, ChartKind, ChartReply};
use tracing::debug;

use crate::error::{ShareviewError, ShareviewResult};

/// Pick a chart kind from a prompt.
///
/// Matching is case-insensitive and checked in the order line, pie, bar.
/// Anything else is a bar chart.
pub fn detect_kind(prompt: &str) -> ChartKind {
    let prompt = prompt.to_lowercase();
    if prompt.contains("line") {
        ChartKind::Line
    } else if prompt.contains("pie") {
        ChartKind::Pie
    } else {
        ChartKind::Bar
    }
}

/// Quarterly sales sample every chart reply carries.
pub fn q1_sales() -> ChartData {
    ChartData {
        labels: vec!["Jan".to_string(), "Feb".to_string(), "Mar".to_string()],
        values: vec![50_000, 70_000, 120_000],
    }
}

/// Build the chart reply for a prompt.
pub fn chart_reply(prompt: &str) -> ShareviewResult<ChartReply> {
    if prompt.trim().is_empty() {
        return Err(ShareviewError::EmptyPrompt);
    }

    let kind = detect_kind(prompt);
    debug!(%kind, "Detected chart kind");

    Ok(ChartReply {
        summary: format!("Here is your {kind} chart for Q1 sales."),
        chart_type: kind,
        data: q1_sales(),
    })
}

//! The fixed market-share analysis served by `/api/chat`.
//!
//! Nothing here is computed. The rows are sample data, including Retailer C,
//! which is labelled `Losing` despite a positive value-share change.

pub mod model;

use model::{AnalysisResult, Metadata, TableRow};

use crate::envelope::Envelope;

pub const DIMENSION: &str = "Brand/Retailer";
pub const VALUE_SHARE_CURRENT: &str = "Value_Share_Current";
pub const VALUE_SHARE_CHANGE_BPS: &str = "Value_Share_Change_bps";
pub const VOLUME_SHARE_CURRENT: &str = "Volume_Share_Current";
pub const VOLUME_SHARE_CHANGE_BPS: &str = "Volume_Share_Change_bps";
pub const PERFORMANCE: &str = "Performance";

/// Metric columns in display order.
pub const METRICS: [&str; 5] = [
    VALUE_SHARE_CURRENT,
    VALUE_SHARE_CHANGE_BPS,
    VOLUME_SHARE_CURRENT,
    VOLUME_SHARE_CHANGE_BPS,
    PERFORMANCE,
];

const EXPLANATION: &str = "This analysis identifies which retailers or brands are driving Unilever's performance by examining market share data. \
The code first identifies Unilever-related entries (looking for 'HUL' which appears to be Hindustan Unilever Limited), \
then analyzes market share trends across different retailers/brands. It determines where Unilever is winning or losing market share \
by looking at the basis point changes in Value Share and Volume Share. The results are sorted to show the top market share holders, \
as well as the top 5 winning and losing entities based on Value Share changes. This provides a clear picture of which retailers are \
driving Unilever's performance and where the company is gaining or losing ground in the market.";

/// (retailer, value share, value change bps, volume share, volume change bps, performance)
const ROWS: [(&str, i64, i64, i64, i64, &str); 3] = [
    ("Retailer A", 25, 40, 40, 80, "Winning"),
    ("Retailer B", 30, 20, 30, -30, "Winning"),
    ("Retailer C", 45, 40, 20, 10, "Losing"),
];

/// Build a fresh copy of the sample analysis.
pub fn market_share_analysis() -> AnalysisResult {
    let table = ROWS
        .iter()
        .map(|&(name, value, value_bps, volume, volume_bps, performance)| {
            TableRow::new()
                .with(DIMENSION, name)
                .with(VALUE_SHARE_CURRENT, value)
                .with(VALUE_SHARE_CHANGE_BPS, value_bps)
                .with(VOLUME_SHARE_CURRENT, volume)
                .with(VOLUME_SHARE_CHANGE_BPS, volume_bps)
                .with(PERFORMANCE, performance)
        })
        .collect();

    AnalysisResult {
        explanation: EXPLANATION.to_string(),
        metadata: Metadata {
            x_axis: vec![DIMENSION.to_string()],
            y_axis: METRICS.iter().map(|m| m.to_string()).collect(),
        },
        table,
    }
}

/// The complete `/api/chat` reply.
pub fn chat_reply() -> Envelope<AnalysisResult> {
    Envelope::ok(market_share_analysis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Cell;

    fn row<'a>(analysis: &'a AnalysisResult, name: &str) -> &'a TableRow {
        analysis
            .table
            .iter()
            .find(|r| r.get(DIMENSION) == Some(&Cell::from(name)))
            .unwrap()
    }

    #[test]
    fn test_metadata_axes() {
        let analysis = market_share_analysis();
        assert_eq!(analysis.metadata.x_axis, vec!["Brand/Retailer"]);
        assert_eq!(
            analysis.metadata.y_axis,
            vec![
                "Value_Share_Current",
                "Value_Share_Change_bps",
                "Volume_Share_Current",
                "Volume_Share_Change_bps",
                "Performance",
            ]
        );
    }

    #[test]
    fn test_rows_in_order() {
        let analysis = market_share_analysis();
        let names: Vec<_> = analysis.table.iter().map(|r| r.get(DIMENSION).cloned()).collect();
        assert_eq!(
            names,
            vec![
                Some(Cell::from("Retailer A")),
                Some(Cell::from("Retailer B")),
                Some(Cell::from("Retailer C")),
            ]
        );
    }

    #[test]
    fn test_retailer_a_values() {
        let analysis = market_share_analysis();
        let a = row(&analysis, "Retailer A");
        assert_eq!(a.get(VALUE_SHARE_CURRENT), Some(&Cell::Integer(25)));
        assert_eq!(a.get(VALUE_SHARE_CHANGE_BPS), Some(&Cell::Integer(40)));
        assert_eq!(a.get(VOLUME_SHARE_CURRENT), Some(&Cell::Integer(40)));
        assert_eq!(a.get(VOLUME_SHARE_CHANGE_BPS), Some(&Cell::Integer(80)));
        assert_eq!(a.get(PERFORMANCE), Some(&Cell::from("Winning")));
    }

    #[test]
    fn test_retailer_c_label_is_literal() {
        let analysis = market_share_analysis();
        let c = row(&analysis, "Retailer C");
        assert_eq!(c.get(VALUE_SHARE_CHANGE_BPS), Some(&Cell::Integer(40)));
        assert_eq!(c.get(PERFORMANCE), Some(&Cell::from("Losing")));
    }

    #[test]
    fn test_row_columns_follow_axes() {
        let analysis = market_share_analysis();
        for r in &analysis.table {
            let columns: Vec<_> = r.columns().collect();
            assert_eq!(columns[0], DIMENSION);
            assert_eq!(&columns[1..], &METRICS[..]);
        }
    }

    #[test]
    fn test_chat_reply_is_deterministic() {
        let first = serde_json::to_vec(&chat_reply()).unwrap();
        let second = serde_json::to_vec(&chat_reply()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_explanation_text() {
        let expected = "This analysis identifies which retailers or brands are driving Unilever's performance by examining market share data. The code first identifies Unilever-related entries (looking for 'HUL' which appears to be Hindustan Unilever Limited), then analyzes market share trends across different retailers/brands. It determines where Unilever is winning or losing market share by looking at the basis point changes in Value Share and Volume Share. The results are sorted to show the top market share holders, as well as the top 5 winning and losing entities based on Value Share changes. This provides a clear picture of which retailers are driving Unilever's performance and where the company is gaining or losing ground in the market.";
        assert_eq!(market_share_analysis().explanation, expected);
    }

    #[test]
    fn test_chat_reply_envelope() {
        let value = serde_json::to_value(chat_reply()).unwrap();
        assert_eq!(value["success"], true);
        assert!(value["error"].is_null());
        assert_eq!(value["result"]["table"][1]["Volume_Share_Change_bps"], -30);
        assert!(value["result"]["explanation"]
            .as_str()
            .unwrap()
            .starts_with("This analysis identifies"));
    }
}

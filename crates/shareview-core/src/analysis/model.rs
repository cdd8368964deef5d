//! Analysis domain models.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// An analysis result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub explanation: String,
    pub metadata: Metadata,
    pub table: Vec<TableRow>,
}

/// Axis names a chart of the table should use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub x_axis: Vec<String>,
    pub y_axis: Vec<String>,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Text(String),
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One table row: column name to cell, in insertion order.
///
/// Serializes as a JSON object whose keys keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    cells: Vec<(String, Cell)>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. A repeated column name replaces the earlier value in place.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Cell>) -> Self {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((column, value)),
        }
        self
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keeps_column_order() {
        let row = TableRow::new().with("b", 1i64).with("a", "x").with("c", -7i64);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"b":1,"a":"x","c":-7}"#);
    }

    #[test]
    fn test_row_repeated_column_replaces() {
        let row = TableRow::new().with("a", 1i64).with("b", 2i64).with("a", 3i64);
        assert_eq!(row.get("a"), Some(&Cell::Integer(3)));
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_negative_integer_cell() {
        let json = serde_json::to_string(&Cell::from(-30i64)).unwrap();
        assert_eq!(json, "-30");
    }
}

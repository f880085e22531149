use serde::Serialize;

use super::model::{ColumnKind, Table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    /// Pandas-style dtype label (`int64`, `float64`, `object`, `empty`).
    pub dtype: &'static str,
}

/// Shape and per-column types of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub rows: usize,
    pub columns: usize,
    pub column_types: Vec<ColumnSummary>,
    /// Names of the columns a chart can be drawn from, in table order.
    pub numeric_columns: Vec<String>,
}

pub fn summarize(table: &Table) -> TableSummary {
    TableSummary {
        rows: table.len(),
        columns: table.column_count(),
        column_types: table
            .columns
            .iter()
            .map(|c| ColumnSummary {
                name: c.name.clone(),
                kind: c.kind,
                dtype: c.kind.dtype_label(),
            })
            .collect(),
        numeric_columns: table.numeric_columns().map(|c| c.name.clone()).collect(),
    }
}

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the common Pandas scalar dtypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Numeric view of the cell, `None` for text and nulls.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Text written to a CSV field. Nulls become an empty field.
    pub fn to_csv_field(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Floats with no fractional part keep a trailing `.0` so an integral float
/// column still reads as float (`3.0`, not `3`).
pub fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => f.write_str(&format_float(*v)),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "nan"),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnKind – closed type tag inferred once at load time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Integer,
    Float,
    Categorical,
    /// No non-empty cell to infer from.
    Unknown,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }

    /// Pandas-style dtype label shown in the summary.
    pub fn dtype_label(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "int64",
            ColumnKind::Float => "float64",
            ColumnKind::Categorical => "object",
            ColumnKind::Unknown => "empty",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dtype_label())
    }
}

// ---------------------------------------------------------------------------
// Column / Table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// `(row_index, value)` for every non-null numeric cell.
    pub fn numeric_points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_f64().map(|x| (i, x)))
    }
}

/// An ordered set of equally long, named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].values.len() == w[1].values.len()),
            "columns must have the same length"
        );
        Self { columns }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.kind.is_numeric())
    }

    /// The first `max_rows` rows rendered as display strings.
    pub fn preview(&self, max_rows: usize) -> Vec<Vec<String>> {
        (0..self.len().min(max_rows))
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| c.values[row].to_string())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            Column::new(
                "n",
                ColumnKind::Integer,
                vec![CellValue::Integer(1), CellValue::Integer(2), CellValue::Integer(3)],
            ),
            Column::new(
                "x",
                ColumnKind::Float,
                vec![CellValue::Float(3.0), CellValue::Null, CellValue::Float(0.25)],
            ),
            Column::new(
                "label",
                ColumnKind::Categorical,
                vec![
                    CellValue::Text("a".into()),
                    CellValue::Text("b".into()),
                    CellValue::Text("c".into()),
                ],
            ),
        ])
    }

    #[test]
    fn shape() {
        let t = sample();
        assert_eq!(t.len(), 3);
        assert_eq!(t.column_count(), 3);
        assert!(Table::default().is_empty());
    }

    #[test]
    fn numeric_columns_skip_categorical() {
        let t = sample();
        let names: Vec<&str> = t.numeric_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["n", "x"]);
    }

    #[test]
    fn preview_formats_cells() {
        let rows = sample().preview(2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1", "3.0", "a"]);
        assert_eq!(rows[1], vec!["2", "nan", "b"]);
    }

    #[test]
    fn numeric_points_skip_nulls() {
        let t = sample();
        let points: Vec<(usize, f64)> = t.column("x").unwrap().numeric_points().collect();
        assert_eq!(points, vec![(0, 3.0), (2, 0.25)]);
    }

    #[test]
    fn float_formatting() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(-0.125), "-0.125");
        assert_eq!(CellValue::Null.to_csv_field(), "");
    }
}

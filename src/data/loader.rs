use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, Column, ColumnKind, Table};
use crate::error::{DataError, DataResult};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a CSV file from disk.
pub fn load_file(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let table = parse_csv(bytes.as_slice()).with_context(|| format!("parsing {}", path.display()))?;
    Ok(table)
}

/// Parse CSV content (header row + records) into a typed [`Table`].
///
/// Every record must have as many fields as the header. A header-only
/// input is a valid table with zero rows.
pub fn parse_csv<R: Read>(reader: R) -> DataResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(DataError::EmptyFile);
    }
    if headers.iter().all(String::is_empty) && headers.len() == 1 {
        return Err(DataError::NoColumns);
    }

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in reader.records() {
        let record = result?;
        for (col, field) in raw.iter_mut().zip(record.iter()) {
            col.push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw)
        .enumerate()
        .map(|(i, (name, cells))| {
            let name = if name.is_empty() { format!("Unnamed: {i}") } else { name };
            typed_column(name, &cells)
        })
        .collect();

    Ok(Table::new(columns))
}

// ---------------------------------------------------------------------------
// Type inference
// ---------------------------------------------------------------------------

/// Markers read as a missing value (Pandas' default `na_values`).
pub const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(cell: &str) -> bool {
    NA_MARKERS.contains(&cell.trim())
}

/// Infer the column kind from its non-missing cells.
///
/// Integers with missing cells widen to float, as Pandas does.
pub fn infer_kind(cells: &[String]) -> ColumnKind {
    let mut present = cells.iter().map(|s| s.trim()).filter(|s| !is_missing(s)).peekable();
    if present.peek().is_none() {
        return ColumnKind::Unknown;
    }

    let mut all_int = true;
    for s in present {
        if s.parse::<i64>().is_ok() {
            continue;
        }
        all_int = false;
        if s.parse::<f64>().is_err() {
            return ColumnKind::Categorical;
        }
    }

    let has_missing = cells.iter().any(|s| is_missing(s));
    if all_int && !has_missing {
        ColumnKind::Integer
    } else {
        ColumnKind::Float
    }
}

fn typed_column(name: String, cells: &[String]) -> Column {
    let kind = infer_kind(cells);
    let values = cells.iter().map(|s| parse_cell(s, kind)).collect();
    Column::new(name, kind, values)
}

fn parse_cell(s: &str, kind: ColumnKind) -> CellValue {
    if is_missing(s) {
        return CellValue::Null;
    }
    let t = s.trim();
    match kind {
        ColumnKind::Integer => t.parse().map(CellValue::Integer).unwrap_or(CellValue::Null),
        ColumnKind::Float => t.parse().map(CellValue::Float).unwrap_or(CellValue::Null),
        ColumnKind::Categorical | ColumnKind::Unknown => CellValue::Text(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_mixed_columns() {
        let csv = "id,price,name\n1,9.5,apple\n2,3,pear\n";
        let table = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names(), vec!["id", "price", "name"]);
        assert_eq!(table.columns[0].kind, ColumnKind::Integer);
        assert_eq!(table.columns[1].kind, ColumnKind::Float);
        assert_eq!(table.columns[2].kind, ColumnKind::Categorical);
        assert_eq!(table.columns[1].values[1], CellValue::Float(3.0));
    }

    #[test]
    fn integers_with_gaps_widen_to_float() {
        assert_eq!(infer_kind(&strings(&["1", "", "3"])), ColumnKind::Float);
        assert_eq!(infer_kind(&strings(&["1", "2", "3"])), ColumnKind::Integer);
        assert_eq!(infer_kind(&strings(&["", " "])), ColumnKind::Unknown);
        assert_eq!(infer_kind(&strings(&["1", "x"])), ColumnKind::Categorical);
        assert_eq!(infer_kind(&strings(&["true", "false"])), ColumnKind::Categorical);
    }

    #[test]
    fn na_markers_keep_column_numeric() {
        assert_eq!(infer_kind(&strings(&["1", "NA", "3"])), ColumnKind::Float);
        assert_eq!(infer_kind(&strings(&["2.5", "N/A", "null"])), ColumnKind::Float);
        assert_eq!(infer_kind(&strings(&["NA", "<NA>"])), ColumnKind::Unknown);

        let table = parse_csv("v\n1\nNA\n3\n".as_bytes()).unwrap();
        assert_eq!(table.columns[0].kind, ColumnKind::Float);
        assert_eq!(
            table.columns[0].values,
            vec![CellValue::Float(1.0), CellValue::Null, CellValue::Float(3.0)]
        );
    }

    #[test]
    fn nan_text_is_null_not_float_nan() {
        let table = parse_csv("v,label\n1.5,a\nnan,NaN\n-nan,c\n".as_bytes()).unwrap();
        let v = &table.columns[0];
        assert_eq!(v.kind, ColumnKind::Float);
        assert_eq!(v.values[1], CellValue::Null);
        assert_eq!(v.values[2], CellValue::Null);
        assert_eq!(table.columns[1].values[1], CellValue::Null);
        assert_eq!(table.preview(3)[1], vec!["nan", "nan"]);
    }

    #[test]
    fn histogram_counts_only_present_values() {
        use crate::data::chart::{build_chart, ChartData, ChartKind};

        let table = parse_csv("v\n1\nnan\n3\nNA\n4\n".as_bytes()).unwrap();
        let column = &table.columns[0];
        let present = column.values.iter().filter(|v| **v != CellValue::Null).count();
        assert_eq!(present, 3);

        let ChartData::Histogram(bins) = build_chart(column, ChartKind::Histogram, 5).data else {
            panic!("expected histogram data");
        };
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), present);
    }

    #[test]
    fn missing_cells_become_null() {
        let table = parse_csv("a,b\n1,\n,x\n".as_bytes()).unwrap();
        assert_eq!(table.columns[0].values, vec![CellValue::Float(1.0), CellValue::Null]);
        assert_eq!(table.columns[1].values[0], CellValue::Null);
        assert_eq!(table.columns[1].kind, ColumnKind::Categorical);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let table = parse_csv("name,qty\n\"Doe, Jane\",4\n".as_bytes()).unwrap();
        assert_eq!(table.columns[0].values[0], CellValue::Text("Doe, Jane".into()));
        assert_eq!(table.columns[1].kind, ColumnKind::Integer);
    }

    #[test]
    fn header_only_is_empty_table() {
        let table = parse_csv("a,b,c\n".as_bytes()).unwrap();
        assert_eq!(table.column_count(), 3);
        assert!(table.is_empty());
        assert!(table.columns.iter().all(|c| c.kind == ColumnKind::Unknown));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_csv("".as_bytes()), Err(DataError::EmptyFile)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_csv("a,b\n1,2\n3,4,5\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let bytes: &[u8] = b"a,b\n\xff\xfe,1\n";
        assert!(parse_csv(bytes).is_err());
    }

    #[test]
    fn blank_header_gets_a_name() {
        let table = parse_csv(",v\n0,1\n".as_bytes()).unwrap();
        assert_eq!(table.column_names(), vec!["Unnamed: 0", "v"]);
    }

    #[test]
    fn load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "x,y\n1,2\n3,4\n").unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("nope.csv"));
    }
}

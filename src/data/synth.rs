use rand::Rng;

use super::model::{CellValue, Column, ColumnKind, Table};

pub const SYNTHETIC_ROWS: usize = 100;

/// Category label for the 1-based row counter `i`.
pub fn category_for(i: usize) -> &'static str {
    match i % 3 {
        0 => "A",
        1 => "B",
        _ => "C",
    }
}

/// Generate a demo table with `rows` rows and four columns:
///
/// * `time_period` – counter `1..=rows`
/// * `sales` – `2i` plus integer noise in `[0, 10)`
/// * `profit` – `1.5i` plus integer noise in `[0, 15)`
/// * `category` – `A`/`B`/`C` cycling with period 3
pub fn generate<R: Rng>(rng: &mut R, rows: usize) -> Table {
    let counter: Vec<usize> = (1..=rows).collect();

    let time_period = counter.iter().map(|&i| CellValue::Integer(i as i64)).collect();
    let sales = counter
        .iter()
        .map(|&i| CellValue::Integer(i as i64 * 2 + rng.gen_range(0..10)))
        .collect();
    let profit = counter
        .iter()
        .map(|&i| CellValue::Float(i as f64 * 1.5 + rng.gen_range(0..15u32) as f64))
        .collect();
    let category = counter
        .iter()
        .map(|&i| CellValue::Text(category_for(i).to_string()))
        .collect();

    Table::new(vec![
        Column::new("time_period", ColumnKind::Integer, time_period),
        Column::new("sales", ColumnKind::Integer, sales),
        Column::new("profit", ColumnKind::Float, profit),
        Column::new("category", ColumnKind::Categorical, category),
    ])
}

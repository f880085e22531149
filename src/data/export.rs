use std::path::Path;

use anyhow::{Context, Result};

use super::model::Table;

pub const EXPORT_FILE_NAME: &str = "data.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// Serialize the table as UTF-8 CSV: header row, comma separated, `\n`
/// line endings, no index column, nulls as empty fields.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(table.columns.iter().map(|c| c.name.as_str()))
        .context("writing CSV header")?;

    for row in 0..table.len() {
        writer
            .write_record(table.columns.iter().map(|c| c.values[row].to_csv_field()))
            .with_context(|| format!("writing CSV row {row}"))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV buffer: {}", e.error()))
}

/// Write the CSV export of `table` to `path`.
pub fn save_csv(table: &Table, path: &Path) -> Result<()> {
    let bytes = to_csv_bytes(table)?;
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {} rows to {}", table.len(), path.display());
    Ok(())
}

use serde::Serialize;

use crate::data::chart::{build_chart, clamp_bins, ChartKind, ChartSpec, DEFAULT_BINS};
use crate::data::export::{EXPORT_FILE_NAME, EXPORT_MIME};
use crate::data::summary::{summarize, TableSummary};
use crate::settings::ExplorerSettings;
use crate::state::ExplorerSession;

use super::Notice;

pub const EMPTY_HINT: &str = "Please upload a CSV file or generate simple data to begin.";
pub const NO_NUMERIC_WARNING: &str = "No numeric columns found for visualization.";

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Chart controls picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerForm {
    /// Requested column; falls back to the first numeric column.
    pub column: Option<String>,
    pub chart_kind: ChartKind,
    pub bins: usize,
}

impl Default for ExplorerForm {
    fn default() -> Self {
        Self {
            column: None,
            chart_kind: ChartKind::default(),
            bins: DEFAULT_BINS,
        }
    }
}

impl ExplorerForm {
    pub fn with_bins(bins: usize) -> Self {
        Self {
            bins: clamp_bins(bins),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportOffer {
    pub label: &'static str,
    pub file_name: &'static str,
    pub mime: &'static str,
}

impl Default for ExportOffer {
    fn default() -> Self {
        Self {
            label: "Download data as CSV",
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Visualization {
    Chart {
        /// Numeric columns offered by the selector.
        choices: Vec<String>,
        column: String,
        kind: ChartKind,
        /// Present for histograms only.
        bins: Option<usize>,
        chart: ChartSpec,
    },
    Skipped(Notice),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExplorerBody {
    Empty(Notice),
    Loaded {
        preview: Preview,
        summary: TableSummary,
        visualization: Visualization,
        export: ExportOffer,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerView {
    pub notices: Vec<Notice>,
    pub body: ExplorerBody,
}

impl ExplorerView {
    pub fn chart(&self) -> Option<&ChartSpec> {
        match &self.body {
            ExplorerBody::Loaded {
                visualization: Visualization::Chart { chart, .. },
                ..
            } => Some(chart),
            _ => None,
        }
    }
}

/// Build the explorer tab for the current session and chart controls.
pub fn render(
    session: &ExplorerSession,
    form: &ExplorerForm,
    settings: &ExplorerSettings,
) -> ExplorerView {
    let notices = session.notices.clone();

    let Some(table) = &session.table else {
        return ExplorerView {
            notices,
            body: ExplorerBody::Empty(Notice::info(EMPTY_HINT)),
        };
    };

    let summary = summarize(table);
    let preview = Preview {
        headers: table.column_names(),
        rows: table.preview(settings.preview_rows),
    };

    let selected = form
        .column
        .as_ref()
        .filter(|c| summary.numeric_columns.contains(*c))
        .or_else(|| summary.numeric_columns.first());

    let visualization = match selected.and_then(|name| table.column(name)) {
        Some(column) => {
            let bins = clamp_bins(form.bins);
            Visualization::Chart {
                choices: summary.numeric_columns.clone(),
                column: column.name.clone(),
                kind: form.chart_kind,
                bins: (form.chart_kind == ChartKind::Histogram).then_some(bins),
                chart: build_chart(column, form.chart_kind, bins),
            }
        }
        None => Visualization::Skipped(Notice::warning(NO_NUMERIC_WARNING)),
    };

    ExplorerView {
        notices,
        body: ExplorerBody::Loaded {
            preview,
            summary,
            visualization,
            export: ExportOffer::default(),
        },
    }
}

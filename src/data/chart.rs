//! Chart descriptions for a single numeric column.
//!
//! Nothing here draws; [`ChartSpec`] is handed to `ui::plot`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::Column;

pub const MIN_BINS: usize = 5;
pub const MAX_BINS: usize = 50;
pub const DEFAULT_BINS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Histogram,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Histogram];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Line => write!(f, "Line Chart"),
            ChartKind::Bar => write!(f, "Bar Chart"),
            ChartKind::Histogram => write!(f, "Histogram"),
        }
    }
}

pub fn clamp_bins(bins: usize) -> usize {
    bins.clamp(MIN_BINS, MAX_BINS)
}

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartData {
    /// `[row_index, value]` pairs, used by line and bar charts.
    Series(Vec<[f64; 2]>),
    Histogram(Vec<HistogramBin>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub data: ChartData,
}

/// Describe `column` as the chosen chart. `bins` only matters for
/// histograms and is clamped to `MIN_BINS..=MAX_BINS`.
pub fn build_chart(column: &Column, kind: ChartKind, bins: usize) -> ChartSpec {
    let name = column.name.clone();
    let title = format!("{kind}: {name}");

    match kind {
        ChartKind::Line | ChartKind::Bar => ChartSpec {
            kind,
            title,
            x_label: "Index".to_string(),
            y_label: name,
            data: ChartData::Series(
                column
                    .numeric_points()
                    .map(|(i, v)| [i as f64, v])
                    .collect(),
            ),
        },
        ChartKind::Histogram => {
            let values: Vec<f64> = column.numeric_points().map(|(_, v)| v).collect();
            ChartSpec {
                kind,
                title,
                x_label: name,
                y_label: "Frequency".to_string(),
                data: ChartData::Histogram(histogram(&values, bins)),
            }
        }
    }
}

/// Equal-width histogram over `[min, max]`.
///
/// Every bin is half-open except the last, which includes `max`. A constant
/// column spans `[v - 0.5, v + 0.5]`; no values span `[0, 1]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let bins = clamp_bins(bins);
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    let (lo, hi) = match finite.iter().copied().fold(None, |acc: Option<(f64, f64)>, v| {
        Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
    }) {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        Some(range) => range,
    };

    // Scale before subtracting: `hi - lo` overflows for ranges near f64::MAX.
    let width = hi / bins as f64 - lo / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = ((v / width - lo / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, ColumnKind};

    fn column(values: &[Option<f64>]) -> Column {
        Column::new(
            "y",
            ColumnKind::Float,
            values
                .iter()
                .map(|v| v.map_or(CellValue::Null, CellValue::Float))
                .collect(),
        )
    }

    #[test]
    fn line_chart_plots_against_index() {
        let spec = build_chart(&column(&[Some(1.0), None, Some(4.0)]), ChartKind::Line, 20);
        assert_eq!(spec.title, "Line Chart: y");
        assert_eq!(spec.x_label, "Index");
        assert_eq!(spec.y_label, "y");
        assert_eq!(spec.data, ChartData::Series(vec![[0.0, 1.0], [2.0, 4.0]]));
    }

    #[test]
    fn bar_chart_labels() {
        let spec = build_chart(&column(&[Some(2.0)]), ChartKind::Bar, 20);
        assert_eq!(spec.title, "Bar Chart: y");
        assert_eq!(spec.kind, ChartKind::Bar);
    }

    #[test]
    fn histogram_labels_and_bin_count() {
        let spec = build_chart(&column(&[Some(0.0), Some(10.0)]), ChartKind::Histogram, 10);
        assert_eq!(spec.title, "Histogram: y");
        assert_eq!(spec.x_label, "y");
        assert_eq!(spec.y_label, "Frequency");
        let ChartData::Histogram(bins) = spec.data else {
            panic!("expected histogram data");
        };
        assert_eq!(bins.len(), 10);
    }

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (0..=100).map(f64::from).collect();
        let bins = histogram(&values, 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[19].end, 100.0);
        // max lands in the last bin
        assert_eq!(bins[19].count, 6);
    }

    #[test]
    fn extreme_range_histogram() {
        let bins = histogram(&[-1e308, 0.0, 1e308], 20);
        assert!(bins.iter().all(|b| b.start.is_finite() && b.end.is_finite()));
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert_eq!(bins[0].start, -1e308);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[9].count + bins[10].count, 1);
        assert_eq!(bins[19].count, 1);
        assert_eq!(bins[19].end, 1e308);
    }

    #[test]
    fn histogram_bins_are_clamped() {
        assert_eq!(histogram(&[1.0, 2.0], 1).len(), MIN_BINS);
        assert_eq!(histogram(&[1.0, 2.0], 500).len(), MAX_BINS);
    }

    #[test]
    fn constant_column_histogram() {
        let bins = histogram(&[3.0, 3.0, 3.0], 5);
        assert_eq!(bins[0].start, 2.5);
        assert_eq!(bins[4].end, 3.5);
        assert_eq!(bins[2].count, 3);
    }

    #[test]
    fn empty_histogram() {
        let bins = histogram(&[], 5);
        assert_eq!(bins.len(), 5);
        assert!(bins.iter().all(|b| b.count == 0));
        assert_eq!(bins[4].end, 1.0);
    }

    #[test]
    fn chart_kind_labels() {
        let labels: Vec<String> = ChartKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, vec!["Line Chart", "Bar Chart", "Histogram"]);
    }
}

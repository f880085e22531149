use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::color::series_color;
use crate::data::chart::{ChartData, ChartKind, ChartSpec};

// ---------------------------------------------------------------------------
// Chart rendering
// ---------------------------------------------------------------------------

/// Paint a [`ChartSpec`] with egui_plot.
pub fn chart_plot(ui: &mut Ui, spec: &ChartSpec) {
    let color = series_color();

    ui.strong(spec.title.as_str());
    Plot::new("explorer_plot")
        .height(360.0)
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| match (&spec.kind, &spec.data) {
            (ChartKind::Line, ChartData::Series(points)) => {
                let points: PlotPoints = points.iter().copied().collect();
                plot_ui.line(Line::new(points).name(&spec.y_label).color(color).width(1.5));
            }
            (_, ChartData::Series(points)) => {
                let bars = points
                    .iter()
                    .map(|&[x, y]| Bar::new(x, y).width(0.8).fill(color))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(&spec.y_label).color(color));
            }
            (_, ChartData::Histogram(bins)) => {
                let bars = bins
                    .iter()
                    .map(|b| {
                        Bar::new(b.center(), b.count as f64)
                            .width(b.width())
                            .fill(color)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(&spec.x_label).color(color));
            }
        });
}

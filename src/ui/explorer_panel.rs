use eframe::egui::{self, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::chart::{ChartKind, MAX_BINS, MIN_BINS};
use crate::state::AppState;
use crate::ui::{notice, panels, plot};
use crate::view::explorer::{render, ExplorerBody, Preview, Visualization};

/// Render the data explorer tab.
pub fn explorer_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📊 Simple Data Explorer");
    ui.label("Upload your CSV file or generate simple data");
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Choose a CSV file…").clicked() {
            panels::open_file_dialog(state);
        }
        if ui.button("Generate Simple Data").clicked() {
            state.generate_data();
        }
    });

    let view = render(
        &state.explorer,
        &state.explorer_form,
        &state.settings.explorer,
    );

    for n in &view.notices {
        notice(ui, n);
    }
    ui.separator();

    let ExplorerBody::Loaded {
        preview,
        summary,
        visualization,
        export,
    } = &view.body
    else {
        if let ExplorerBody::Empty(hint) = &view.body {
            notice(ui, hint);
        }
        return;
    };

    ScrollArea::vertical()
        .id_salt("explorer_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let preview_rows = state.settings.explorer.preview_rows;
            ui.strong(format!("Data Preview (First {preview_rows} rows)"));
            preview_table(ui, preview);
            ui.add_space(8.0);

            ui.strong("Data Summary");
            ui.label(format!("Rows: {}", summary.rows));
            ui.label(format!("Columns: {}", summary.columns));
            ui.label("Column Types:");
            for col in &summary.column_types {
                ui.label(format!("- {}: {}", col.name, col.dtype));
            }
            ui.add_space(8.0);

            ui.strong("Data Visualization");
            match visualization {
                Visualization::Chart {
                    choices,
                    column,
                    bins,
                    chart,
                    ..
                } => {
                    let form = &mut state.explorer_form;
                    egui::ComboBox::from_label("Select column to visualize")
                        .selected_text(column.as_str())
                        .show_ui(ui, |ui: &mut Ui| {
                            for choice in choices {
                                let selected = choice == column;
                                if ui.selectable_label(selected, choice.as_str()).clicked() {
                                    form.column = Some(choice.clone());
                                }
                            }
                        });

                    ui.horizontal(|ui: &mut Ui| {
                        ui.label("Select Chart Type");
                        for kind in ChartKind::ALL {
                            ui.radio_value(&mut form.chart_kind, kind, kind.to_string());
                        }
                    });

                    if bins.is_some() {
                        ui.add(
                            egui::Slider::new(&mut form.bins, MIN_BINS..=MAX_BINS)
                                .text("Number of bins"),
                        );
                    }

                    plot::chart_plot(ui, chart);
                }
                Visualization::Skipped(warning) => notice(ui, warning),
            }

            ui.add_space(8.0);
            if ui.button(export.label).clicked() {
                panels::save_file_dialog(state);
            }
        });
}

fn preview_table(ui: &mut Ui, preview: &Preview) {
    ui.push_id("preview_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .columns(TableColumn::auto().at_least(60.0), preview.headers.len())
            .header(20.0, |mut header| {
                for name in &preview.headers {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name.as_str());
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, preview.rows.len(), |mut row| {
                    let cells = &preview.rows[row.index()];
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            });
    });
}

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export::{save_csv, EXPORT_FILE_NAME};
use crate::data::loader::load_file;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Generate Simple Data").clicked() {
                state.generate_data();
                ui.close_menu();
            }
            let has_table = state.explorer.table.is_some();
            if ui
                .add_enabled(has_table, egui::Button::new("Save CSV…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
            if ui.add_enabled(has_table, egui::Button::new("Clear")).clicked() {
                state.explorer.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.tab, Tab::Bmi, "🧮 BMI Calculator");
        ui.selectable_value(&mut state.tab, Tab::Explorer, "📊 Data Explorer");

        ui.separator();

        if let Some(table) = &state.explorer.table {
            ui.label(format!(
                "{} rows × {} columns loaded",
                table.len(),
                table.column_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Choose a CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.status_message = None;
        state.set_table(load_file(&path));
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let Some(table) = &state.explorer.table else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Download data as CSV")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match save_csv(table, &path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to save file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

use eframe::egui::{self, RichText, Ui};

use crate::bmi::classify::BmiBands;
use crate::bmi::units::{HeightUnit, WeightUnit};
use crate::state::AppState;
use crate::ui::notice;
use crate::view::bmi::{render, BmiOutcome, InputField};

/// Render the BMI calculator tab.
pub fn bmi_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🧮 BMI Calculator");
    ui.label("Calculate your Body Mass Index (BMI) easily with different units!");
    ui.add_space(8.0);

    let view = render(&state.bmi, state.settings.bmi.bands);
    let form = &mut state.bmi;
    let mut changed = false;

    ui.strong("Select Units");
    egui::Grid::new("bmi_units").num_columns(2).show(ui, |ui: &mut Ui| {
        ui.label("Height Unit");
        egui::ComboBox::from_id_salt("height_unit")
            .selected_text(form.height_unit.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for unit in HeightUnit::ALL {
                    changed |= ui
                        .selectable_value(&mut form.height_unit, unit, unit.to_string())
                        .changed();
                }
            });
        ui.end_row();

        ui.label("Weight Unit");
        egui::ComboBox::from_id_salt("weight_unit")
            .selected_text(form.weight_unit.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for unit in WeightUnit::ALL {
                    changed |= ui
                        .selectable_value(&mut form.weight_unit, unit, unit.to_string())
                        .changed();
                }
            });
        ui.end_row();

        ui.label("Thresholds");
        egui::ComboBox::from_id_salt("bmi_bands")
            .selected_text(state.settings.bmi.bands.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for bands in BmiBands::ALL {
                    ui.selectable_value(&mut state.settings.bmi.bands, bands, bands.to_string());
                }
            });
        ui.end_row();
    });

    ui.add_space(8.0);

    egui::Grid::new("bmi_inputs").num_columns(2).show(ui, |ui: &mut Ui| {
        for field in view.height_fields.iter().chain(&view.weight_fields) {
            changed |= input_row(ui, field, form.value_mut(field.key));
        }
    });

    if changed {
        form.submitted = false;
        ui.ctx().request_repaint();
    }

    ui.add_space(8.0);
    if ui.button("Calculate BMI").clicked() {
        form.submitted = true;
        ui.ctx().request_repaint();
    }

    match &view.outcome {
        Some(BmiOutcome::Report(report)) => {
            ui.add_space(8.0);
            ui.label(RichText::new(&report.headline).heading());
            notice(ui, &report.verdict);
        }
        Some(BmiOutcome::Invalid(n)) => notice(ui, n),
        None => {}
    }
}

fn input_row(ui: &mut Ui, field: &InputField, value: &mut f64) -> bool {
    ui.label(field.label);
    let mut drag = egui::DragValue::new(value)
        .range(field.min..=field.max)
        .speed(field.step);
    if field.integer {
        drag = drag.fixed_decimals(0);
    } else {
        drag = drag.max_decimals(2);
    }
    let changed = ui.add(drag).changed();
    ui.end_row();
    changed
}

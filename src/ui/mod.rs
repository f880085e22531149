pub mod bmi_panel;
pub mod explorer_panel;
pub mod panels;
pub mod plot;

use eframe::egui::{RichText, Ui};

use crate::color::severity_color;
use crate::view::Notice;

/// Paint a notice in its severity colour.
pub fn notice(ui: &mut Ui, notice: &Notice) {
    ui.label(RichText::new(&notice.text).color(severity_color(notice.severity)));
}

use eframe::egui;

use crate::settings::Settings;
use crate::state::{AppState, Tab};
use crate::ui::{bmi_panel, explorer_panel, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyExplorerApp {
    pub state: AppState,
}

impl RustyExplorerApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for RustyExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.label("Built with egui! 🚀");
        });

        // ---- Central panel: active tool ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Bmi => bmi_panel::bmi_panel(ui, &mut self.state),
            Tab::Explorer => explorer_panel::explorer_panel(ui, &mut self.state),
        });
    }
}

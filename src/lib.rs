//! BMI calculator and CSV data explorer.
//!
//! The domain logic (`bmi`, `data`, `view`) is UI-agnostic; `ui` and `app`
//! paint the view models with egui.

pub mod app;
pub mod bmi;
pub mod color;
pub mod data;
pub mod error;
pub mod settings;
pub mod state;
pub mod ui;
pub mod view;

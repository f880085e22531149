use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::view::Severity;

// ---------------------------------------------------------------------------
// HSL helpers
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees) to an egui colour.
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

/// Fill colour for chart series and histogram bars.
pub fn series_color() -> Color32 {
    hsl(210.0, 0.75, 0.55)
}

// ---------------------------------------------------------------------------
// Severity colours
// ---------------------------------------------------------------------------

/// Text colour for a notice of the given severity.
pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Success => hsl(130.0, 0.60, 0.45),
        Severity::Info => hsl(205.0, 0.70, 0.55),
        Severity::Warning => hsl(40.0, 0.90, 0.50),
        Severity::Error => hsl(0.0, 0.75, 0.55),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsl(0.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl(120.0, 1.0, 0.5), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsl(240.0, 1.0, 0.5), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn severities_are_distinct() {
        let colors = [
            severity_color(Severity::Success),
            severity_color(Severity::Info),
            severity_color(Severity::Warning),
            severity_color(Severity::Error),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

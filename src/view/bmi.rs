use serde::Serialize;

use crate::bmi::classify::{bmi, BmiBands, BmiCategory};
use crate::bmi::units::{
    FieldBounds, HeightInput, HeightUnit, WeightInput, WeightUnit, DECIMAL_FEET_BOUNDS,
    FEET_BOUNDS, INCHES_BOUNDS, KILOGRAMS_BOUNDS, METERS_BOUNDS, POUNDS_BOUNDS,
};

use super::{Notice, Severity};

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Identifies one numeric input of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKey {
    Meters,
    Feet,
    Inches,
    DecimalFeet,
    Kilograms,
    Pounds,
}

/// Everything the user has typed or picked on the BMI tab.
///
/// Values for every unit are kept so switching units back and forth does
/// not lose input. Defaults sit at the lower bound of each field.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiForm {
    pub height_unit: HeightUnit,
    pub weight_unit: WeightUnit,
    pub meters: f64,
    pub feet: f64,
    pub inches: f64,
    pub decimal_feet: f64,
    pub kilograms: f64,
    pub pounds: f64,
    /// Set by the "Calculate BMI" button, cleared when an input changes.
    pub submitted: bool,
}

impl Default for BmiForm {
    fn default() -> Self {
        Self {
            height_unit: HeightUnit::default(),
            weight_unit: WeightUnit::default(),
            meters: METERS_BOUNDS.min,
            feet: FEET_BOUNDS.min,
            inches: INCHES_BOUNDS.min,
            decimal_feet: DECIMAL_FEET_BOUNDS.min,
            kilograms: KILOGRAMS_BOUNDS.min,
            pounds: POUNDS_BOUNDS.min,
            submitted: false,
        }
    }
}

impl BmiForm {
    pub fn value_mut(&mut self, key: FieldKey) -> &mut f64 {
        match key {
            FieldKey::Meters => &mut self.meters,
            FieldKey::Feet => &mut self.feet,
            FieldKey::Inches => &mut self.inches,
            FieldKey::DecimalFeet => &mut self.decimal_feet,
            FieldKey::Kilograms => &mut self.kilograms,
            FieldKey::Pounds => &mut self.pounds,
        }
    }

    /// Height in the selected unit, clamped to the widget bounds.
    pub fn height(&self) -> HeightInput {
        match self.height_unit {
            HeightUnit::Meters => HeightInput::Meters(METERS_BOUNDS.clamp(self.meters)),
            HeightUnit::FeetInches => HeightInput::FeetInches {
                feet: FEET_BOUNDS.clamp(self.feet).trunc(),
                inches: INCHES_BOUNDS.clamp(self.inches).trunc(),
            },
            HeightUnit::DecimalFeet => {
                HeightInput::DecimalFeet(DECIMAL_FEET_BOUNDS.clamp(self.decimal_feet))
            }
        }
    }

    /// Weight in the selected unit, clamped to the widget bounds.
    pub fn weight(&self) -> WeightInput {
        match self.weight_unit {
            WeightUnit::Kilograms => WeightInput::Kilograms(KILOGRAMS_BOUNDS.clamp(self.kilograms)),
            WeightUnit::Pounds => WeightInput::Pounds(POUNDS_BOUNDS.clamp(self.pounds)),
        }
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputField {
    pub key: FieldKey,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Whole numbers only (feet, inches).
    pub integer: bool,
}

impl InputField {
    fn new(key: FieldKey, label: &'static str, bounds: &FieldBounds, integer: bool) -> Self {
        Self {
            key,
            label,
            min: bounds.min,
            max: bounds.max,
            step: bounds.step,
            integer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
    pub headline: String,
    pub verdict: Notice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BmiOutcome {
    Report(BmiReport),
    Invalid(Notice),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiView {
    pub height_fields: Vec<InputField>,
    pub weight_fields: Vec<InputField>,
    /// `None` until the form is submitted.
    pub outcome: Option<BmiOutcome>,
}

fn height_fields(unit: HeightUnit) -> Vec<InputField> {
    match unit {
        HeightUnit::Meters => vec![InputField::new(
            FieldKey::Meters,
            "Enter your height (in meters):",
            &METERS_BOUNDS,
            false,
        )],
        HeightUnit::FeetInches => vec![
            InputField::new(FieldKey::Feet, "Feet:", &FEET_BOUNDS, true),
            InputField::new(FieldKey::Inches, "Inches:", &INCHES_BOUNDS, true),
        ],
        HeightUnit::DecimalFeet => vec![InputField::new(
            FieldKey::DecimalFeet,
            "Enter your height in feet (e.g., 5.5):",
            &DECIMAL_FEET_BOUNDS,
            false,
        )],
    }
}

fn weight_fields(unit: WeightUnit) -> Vec<InputField> {
    match unit {
        WeightUnit::Kilograms => vec![InputField::new(
            FieldKey::Kilograms,
            "Enter your weight (in kg):",
            &KILOGRAMS_BOUNDS,
            false,
        )],
        WeightUnit::Pounds => vec![InputField::new(
            FieldKey::Pounds,
            "Enter your weight (in pounds):",
            &POUNDS_BOUNDS,
            false,
        )],
    }
}

fn severity_for(category: BmiCategory) -> Severity {
    match category {
        BmiCategory::Underweight | BmiCategory::Overweight => Severity::Warning,
        BmiCategory::Normal => Severity::Info,
        BmiCategory::Obese => Severity::Error,
    }
}

/// Build the BMI tab for the current form state.
pub fn render(form: &BmiForm, bands: BmiBands) -> BmiView {
    let outcome = form.submitted.then(|| {
        let height_m = form.height().to_meters();
        let weight_kg = form.weight().to_kilograms();
        match bmi(weight_kg, height_m) {
            Ok(value) => {
                let category = bands.classify(value);
                log::debug!("BMI {value:.4} from {weight_kg} kg / {height_m} m -> {category}");
                BmiOutcome::Report(BmiReport {
                    bmi: value,
                    category,
                    headline: format!("Your BMI is: {value:.2}"),
                    verdict: Notice::new(severity_for(category), category.message()),
                })
            }
            Err(e) => {
                log::debug!("BMI input rejected: {e}");
                BmiOutcome::Invalid(Notice::error(e.user_message()))
            }
        }
    });

    BmiView {
        height_fields: height_fields(form.height_unit),
        weight_fields: weight_fields(form.weight_unit),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(form: BmiForm) -> BmiForm {
        BmiForm {
            submitted: true,
            ..form
        }
    }

    #[test]
    fn nothing_computed_before_submit() {
        let view = render(&BmiForm::default(), BmiBands::Standard);
        assert!(view.outcome.is_none());
        assert_eq!(view.height_fields.len(), 1);
        assert_eq!(view.height_fields[0].key, FieldKey::Meters);
    }

    #[test]
    fn metric_report() {
        let form = submitted(BmiForm {
            meters: 1.75,
            kilograms: 70.0,
            ..BmiForm::default()
        });
        let Some(BmiOutcome::Report(report)) = render(&form, BmiBands::Standard).outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.bmi, 70.0 / (1.75 * 1.75));
        assert_eq!(report.headline, "Your BMI is: 22.86");
        assert_eq!(report.category, BmiCategory::Normal);
        assert_eq!(report.verdict.severity, Severity::Info);
        assert_eq!(report.verdict.text, "You have a normal weight.");
    }

    #[test]
    fn imperial_report() {
        let form = submitted(BmiForm {
            height_unit: HeightUnit::FeetInches,
            weight_unit: WeightUnit::Pounds,
            feet: 5.0,
            inches: 6.0,
            pounds: 160.0,
            ..BmiForm::default()
        });
        let Some(BmiOutcome::Report(report)) = render(&form, BmiBands::Standard).outcome else {
            panic!("expected a report");
        };
        let expected = (160.0 * 0.453592) / (1.6764f64 * 1.6764);
        assert!((report.bmi - expected).abs() < 1e-9);
        assert_eq!(report.category, BmiCategory::Overweight);
        assert_eq!(report.verdict.severity, Severity::Warning);
    }

    #[test]
    fn decimal_feet_report() {
        let form = submitted(BmiForm {
            height_unit: HeightUnit::DecimalFeet,
            decimal_feet: 5.5,
            kilograms: 60.0,
            ..BmiForm::default()
        });
        let view = render(&form, BmiBands::Standard);
        assert_eq!(view.height_fields.len(), 1);
        assert_eq!(view.height_fields[0].key, FieldKey::DecimalFeet);

        let Some(BmiOutcome::Report(report)) = view.outcome else {
            panic!("expected a report");
        };
        let meters = 5.5 * 0.3048;
        assert!((report.bmi - 60.0 / (meters * meters)).abs() < 1e-9);
        assert_eq!(report.headline, "Your BMI is: 21.35");
        assert_eq!(report.category, BmiCategory::Normal);
    }

    #[test]
    fn meters_with_pounds_report() {
        let form = submitted(BmiForm {
            weight_unit: WeightUnit::Pounds,
            meters: 1.8,
            pounds: 180.0,
            ..BmiForm::default()
        });
        let view = render(&form, BmiBands::Standard);
        assert_eq!(view.weight_fields[0].key, FieldKey::Pounds);

        let Some(BmiOutcome::Report(report)) = view.outcome else {
            panic!("expected a report");
        };
        assert!((report.bmi - (180.0 * 0.453592) / (1.8 * 1.8)).abs() < 1e-9);
        assert_eq!(report.category, BmiCategory::Overweight);
        assert_eq!(report.verdict.severity, Severity::Warning);
    }

    #[test]
    fn zero_feet_and_inches_is_invalid() {
        let form = submitted(BmiForm {
            height_unit: HeightUnit::FeetInches,
            ..BmiForm::default()
        });
        let view = render(&form, BmiBands::Standard);
        assert_eq!(view.height_fields.len(), 2);
        assert_eq!(
            view.outcome,
            Some(BmiOutcome::Invalid(Notice::error(
                "Please enter valid height and weight."
            )))
        );
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let form = BmiForm {
            meters: 9.0,
            kilograms: 1.0,
            ..BmiForm::default()
        };
        assert_eq!(form.height(), HeightInput::Meters(2.5));
        assert_eq!(form.weight(), WeightInput::Kilograms(10.0));
    }

    #[test]
    fn obese_is_error_severity() {
        let form = submitted(BmiForm {
            meters: 1.6,
            kilograms: 120.0,
            ..BmiForm::default()
        });
        let Some(BmiOutcome::Report(report)) = render(&form, BmiBands::Legacy).outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.category, BmiCategory::Obese);
        assert_eq!(report.verdict.severity, Severity::Error);
    }
}

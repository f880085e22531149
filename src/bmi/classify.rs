use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Body Mass Index: `weight_kg / height_m²`.
///
/// Both values must be positive and finite; otherwise no division happens
/// and the offending measurement is reported.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<f64, ValidationError> {
    if !(height_m.is_finite() && height_m > 0.0) {
        return Err(ValidationError::NonPositiveHeight(height_m));
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(ValidationError::NonPositiveWeight(weight_kg));
    }
    Ok(weight_kg / (height_m * height_m))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Sentence shown under the result.
    pub fn message(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "You are underweight.",
            BmiCategory::Normal => "You have a normal weight.",
            BmiCategory::Overweight => "You are overweight.",
            BmiCategory::Obese => "You are obese.",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "underweight"),
            BmiCategory::Normal => write!(f, "normal weight"),
            BmiCategory::Overweight => write!(f, "overweight"),
            BmiCategory::Obese => write!(f, "obese"),
        }
    }
}

// ---------------------------------------------------------------------------
// Band sets
// ---------------------------------------------------------------------------

/// Threshold set used to classify a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiBands {
    /// Contiguous bounds at 18.5 / 25 / 30.
    #[default]
    Standard,
    /// Bounds at 18.5 / 24.9 / 25 / 29.9. Values in `[24.9, 25)` fall
    /// through every band and end up obese.
    Legacy,
}

impl BmiBands {
    pub const ALL: [BmiBands; 2] = [BmiBands::Standard, BmiBands::Legacy];

    pub fn classify(&self, bmi: f64) -> BmiCategory {
        match self {
            BmiBands::Standard => {
                if bmi < 18.5 {
                    BmiCategory::Underweight
                } else if bmi < 25.0 {
                    BmiCategory::Normal
                } else if bmi < 30.0 {
                    BmiCategory::Overweight
                } else {
                    BmiCategory::Obese
                }
            }
            BmiBands::Legacy => {
                if bmi < 18.5 {
                    BmiCategory::Underweight
                } else if (18.5..24.9).contains(&bmi) {
                    BmiCategory::Normal
                } else if (25.0..29.9).contains(&bmi) {
                    BmiCategory::Overweight
                } else {
                    BmiCategory::Obese
                }
            }
        }
    }
}

impl fmt::Display for BmiBands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiBands::Standard => write!(f, "Standard (18.5 / 25 / 30)"),
            BmiBands::Legacy => write!(f, "Legacy (18.5 / 24.9 / 29.9)"),
        }
    }
}

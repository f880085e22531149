use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Conversion constants
// ---------------------------------------------------------------------------

pub const METERS_PER_INCH: f64 = 0.0254;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const KILOGRAMS_PER_POUND: f64 = 0.453592;
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Inverse of the feet-and-inches conversion.
pub fn meters_to_inches(meters: f64) -> f64 {
    meters / METERS_PER_INCH
}

// ---------------------------------------------------------------------------
// Units offered by the form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Meters,
    FeetInches,
    DecimalFeet,
}

impl HeightUnit {
    pub const ALL: [HeightUnit; 3] = [
        HeightUnit::Meters,
        HeightUnit::FeetInches,
        HeightUnit::DecimalFeet,
    ];
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightUnit::Meters => write!(f, "Meters"),
            HeightUnit::FeetInches => write!(f, "Feet & Inches"),
            HeightUnit::DecimalFeet => write!(f, "Feet (e.g., 5.5)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Kilograms,
    Pounds,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Kilograms, WeightUnit::Pounds];
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kilograms => write!(f, "Kilograms"),
            WeightUnit::Pounds => write!(f, "Pounds"),
        }
    }
}

// ---------------------------------------------------------------------------
// Input bounds
// ---------------------------------------------------------------------------

/// Bounds and step of one numeric input widget.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const METERS_BOUNDS: FieldBounds = FieldBounds::new(0.5, 2.5, 0.01);
pub const FEET_BOUNDS: FieldBounds = FieldBounds::new(0.0, 8.0, 1.0);
pub const INCHES_BOUNDS: FieldBounds = FieldBounds::new(0.0, 11.0, 1.0);
pub const DECIMAL_FEET_BOUNDS: FieldBounds = FieldBounds::new(1.0, 8.0, 0.01);
pub const KILOGRAMS_BOUNDS: FieldBounds = FieldBounds::new(10.0, 300.0, 0.5);
pub const POUNDS_BOUNDS: FieldBounds = FieldBounds::new(22.0, 660.0, 0.5);

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

/// A height in one of the supported units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightInput {
    Meters(f64),
    FeetInches { feet: f64, inches: f64 },
    DecimalFeet(f64),
}

impl HeightInput {
    pub fn to_meters(self) -> f64 {
        match self {
            HeightInput::Meters(m) => m,
            HeightInput::FeetInches { feet, inches } => {
                (feet * INCHES_PER_FOOT + inches) * METERS_PER_INCH
            }
            HeightInput::DecimalFeet(feet) => feet * METERS_PER_FOOT,
        }
    }
}

/// A weight in one of the supported units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInput {
    Kilograms(f64),
    Pounds(f64),
}

impl WeightInput {
    pub fn to_kilograms(self) -> f64 {
        match self {
            WeightInput::Kilograms(kg) => kg,
            WeightInput::Pounds(lb) => lb * KILOGRAMS_PER_POUND,
        }
    }
}

//! Height/weight conversion and BMI classification.

pub mod classify;
pub mod units;

pub use classify::{bmi, BmiBands, BmiCategory};
pub use units::{HeightInput, HeightUnit, WeightInput, WeightUnit};

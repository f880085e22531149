use thiserror::Error;

// ---------------------------------------------------------------------------
// Input validation (BMI calculator)
// ---------------------------------------------------------------------------

/// Rejected measurement: the canonical value is zero, negative or not finite.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("height must be positive, got {0} m")]
    NonPositiveHeight(f64),

    #[error("weight must be positive, got {0} kg")]
    NonPositiveWeight(f64),
}

impl ValidationError {
    /// Message shown to the user in place of a result.
    pub fn user_message(&self) -> &'static str {
        "Please enter valid height and weight."
    }
}

// ---------------------------------------------------------------------------
// Table loading (data explorer)
// ---------------------------------------------------------------------------

/// Errors that can occur while turning a CSV file into a [`Table`](crate::data::model::Table).
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Nothing to parse, not even a header row.
    #[error("No columns to parse from file")]
    EmptyFile,

    /// Header row present but without any named column.
    #[error("No columns found")]
    NoColumns,
}

pub type DataResult<T> = Result<T, DataError>;

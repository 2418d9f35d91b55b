use thiserror::Error;

use crate::fields::ValidationError;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("unknown field '{field_id}' for calculator '{calculator_id}'")]
    UnknownField {
        calculator_id: String,
        field_id: String,
    },

    #[error("'{value}' is not an option for field '{field_id}'")]
    InvalidChoice { field_id: String, value: String },

    #[error("malformed field entry '{0}', expected field=value")]
    MalformedEntry(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

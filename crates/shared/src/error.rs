//! Error types for the jordbruk codelists

use thiserror::Error;

/// Error thrown when a code value is not exactly three digits
#[derive(Debug, Error)]
#[error("Invalid code: '{code}'. Must be exactly 3 digits (e.g., '101')")]
pub struct InvalidCodeError {
    pub code: String,
}

/// Error thrown when a measurement unit is not part of the codelist vocabulary
#[derive(Debug, Error)]
#[error("Invalid measurement unit: '{unit}'. Must be one of: {}", valid_units.join(", "))]
pub struct InvalidMeasurementUnitError {
    pub unit: String,
    pub valid_units: Vec<String>,
}

/// Error thrown when a category is not present in the registry
#[derive(Debug, Error)]
#[error("Unknown category '{category}'. Available categories: {}", available.join(", "))]
pub struct UnknownCategoryError {
    pub category: String,
    pub available: Vec<String>,
}

/// Error thrown when a code value is registered twice
#[derive(Debug, Error)]
#[error("Code '{code}' is already registered")]
pub struct DuplicateCodeError {
    pub code: String,
}

/// General error type for the jordbruk crates
#[derive(Debug, Error)]
pub enum JordbrukError {
    #[error(transparent)]
    InvalidCode(#[from] InvalidCodeError),

    #[error(transparent)]
    InvalidMeasurementUnit(#[from] InvalidMeasurementUnitError),

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategoryError),

    #[error(transparent)]
    DuplicateCode(#[from] DuplicateCodeError),

    #[error("Invalid group for code '{code}': group names must be non-empty")]
    EmptyGroup { code: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, JordbrukError>;

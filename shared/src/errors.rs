//! Error types for the BMI calculator

use std::fmt;
use thiserror::Error;

/// Which form input a measurement error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementField {
    Weight,
    Height,
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementField::Weight => write!(f, "weight"),
            MeasurementField::Height => write!(f, "height"),
        }
    }
}

/// Reasons a pair of form inputs cannot be turned into a measurement
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("{0} is not a number")]
    Unparseable(MeasurementField),

    #[error("{0} must be a finite number")]
    NonFinite(MeasurementField),

    #[error("{0} must be greater than zero")]
    NonPositive(MeasurementField),
}

impl MeasurementError {
    /// The input that failed validation
    pub fn field(&self) -> MeasurementField {
        match self {
            MeasurementError::Unparseable(field)
            | MeasurementError::NonFinite(field)
            | MeasurementError::NonPositive(field) => *field,
        }
    }
}

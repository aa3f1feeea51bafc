//! BMI calculation and classification
//!
//! Pure functions only. The client crate renders these results into form
//! widgets; the wasm crate exposes them to a browser page.

use crate::errors::{MeasurementError, MeasurementField};
use crate::validation::parse_positive;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Measurement
// ============================================================================

/// A validated weight/height pair taken from a form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Weight in kilograms, finite and positive
    pub weight_kg: f64,
    /// Height in centimeters, finite and positive
    pub height_cm: f64,
}

impl Measurement {
    /// Parse raw form values into a measurement
    ///
    /// Weight is checked first, so a form with two bad inputs reports the
    /// weight field.
    pub fn parse(weight_input: &str, height_input: &str) -> Result<Self, MeasurementError> {
        let weight_kg = parse_positive(weight_input, MeasurementField::Weight)?;
        let height_cm = parse_positive(height_input, MeasurementField::Height)?;
        Ok(Self {
            weight_kg,
            height_cm,
        })
    }
}

// ============================================================================
// Categories
// ============================================================================

/// BMI category classification
///
/// Serialized with the variant name, which is also the text shown to the
/// user and the value stored by the save endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Display name of the category
    pub fn name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// One-sentence advice shown next to the result
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "BMI below healthy range — consider a nutrient-dense diet and consult a professional if needed."
            }
            BmiCategory::Healthy => "Within healthy range — keep doing balanced diet & exercise.",
            BmiCategory::Overweight => {
                "Slightly above healthy range — consider lifestyle adjustments."
            }
            BmiCategory::Obese => "BMI indicates obesity. Consider seeking professional guidance.",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const UNDERWEIGHT_LIMIT: f64 = 18.5;
const HEALTHY_LIMIT: f64 = 25.0;
const OVERWEIGHT_LIMIT: f64 = 30.0;

/// Classify BMI into category
///
/// Each threshold belongs to the band above it: 18.5 is Healthy, 25 is
/// Overweight, 30 is Obese. NaN compares false everywhere and lands in Obese.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_LIMIT {
        BmiCategory::Underweight
    } else if bmi < HEALTHY_LIMIT {
        BmiCategory::Healthy
    } else if bmi < OVERWEIGHT_LIMIT {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Advice text for a category
pub fn advice_text(category: BmiCategory) -> &'static str {
    category.advice()
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,
    pub category: BmiCategory,
}

/// Calculate unrounded BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round to one decimal place, halves rounding up
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate the rounded, classified BMI for a measurement
///
/// Classification runs on the rounded value, so 18.46 rounds to 18.5 and
/// reads as Healthy.
pub fn calculate_bmi_result(measurement: &Measurement) -> BmiResult {
    let value = round_one_decimal(calculate_bmi(measurement.weight_kg, measurement.height_cm));
    BmiResult {
        value,
        category: classify_bmi(value),
    }
}

/// Parse form values and compute the result in one step
pub fn compute_from_inputs(
    weight_input: &str,
    height_input: &str,
) -> Result<(Measurement, BmiResult), MeasurementError> {
    let measurement = Measurement::parse(weight_input, height_input)?;
    Ok((measurement, calculate_bmi_result(&measurement)))
}

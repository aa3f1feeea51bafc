//! BMI Calculator WASM Module
//!
//! This crate exposes the BMI calculation to a browser page, so the page
//! script only has to move values between inputs and display elements.

use bmi_calculator_shared::bmi::{advice_text, classify_bmi, compute_from_inputs};
use wasm_bindgen::prelude::*;

/// Compute the rounded BMI from raw weight (kg) and height (cm) inputs
///
/// Returns `undefined` when either input is not a positive finite number.
#[wasm_bindgen]
pub fn compute_bmi(weight_input: &str, height_input: &str) -> Option<f64> {
    compute_from_inputs(weight_input, height_input)
        .ok()
        .map(|(_, result)| result.value)
}

/// Category name for a BMI value
#[wasm_bindgen]
pub fn classify(bmi: f64) -> String {
    classify_bmi(bmi).name().to_string()
}

/// Advice sentence for a BMI value
#[wasm_bindgen]
pub fn advice_for(bmi: f64) -> String {
    advice_text(classify_bmi(bmi)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bmi() {
        assert_eq!(compute_bmi("70", "175"), Some(22.9));
        assert_eq!(compute_bmi("70", "0"), None);
        assert_eq!(compute_bmi("", "175"), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(18.5), "Healthy");
        assert_eq!(classify(30.0), "Obese");
        assert!(advice_for(17.0).starts_with("BMI below healthy range"));
    }
}

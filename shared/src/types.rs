//! API request and response types

use crate::bmi::{BmiCategory, BmiResult, Measurement};
use serde::{Deserialize, Serialize};

/// Fallback reason when the server rejects a request without saying why
pub const UNKNOWN_ERROR: &str = "unknown";

/// Body of `POST /api/save_bmi`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveBmiRequest {
    pub weight: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub category: BmiCategory,
    /// Serialized as `null` when absent
    pub note: Option<String>,
}

impl SaveBmiRequest {
    /// Build the payload for a freshly computed result
    pub fn new(measurement: &Measurement, result: &BmiResult, note: Option<String>) -> Self {
        Self {
            weight: measurement.weight_kg,
            height_cm: measurement.height_cm,
            bmi: result.value,
            category: result.category,
            note,
        }
    }
}

/// Response of `POST /api/save_bmi`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveBmiResponse {
    /// Missing means the save did not happen
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveBmiResponse {
    /// Human-readable reason for a failed save
    pub fn failure_reason(&self) -> &str {
        reason_or_unknown(self.error.as_deref())
    }
}

/// Server error text, with empty or missing text read as "unknown"
fn reason_or_unknown(error: Option<&str>) -> &str {
    error.filter(|e| !e.is_empty()).unwrap_or(UNKNOWN_ERROR)
}

/// Body of `POST /api/check_bmi`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckBmiRequest {
    pub weight: f64,
    pub height_cm: f64,
}

/// Response of `POST /api/check_bmi`
///
/// `bmi` and `category` are present when `ok` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckBmiResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub category: Option<BmiCategory>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CheckBmiResponse {
    /// The server's verdict as a result, if it computed one
    pub fn result(&self) -> Option<BmiResult> {
        match (self.ok, self.bmi, self.category) {
            (true, Some(value), Some(category)) => Some(BmiResult { value, category }),
            _ => None,
        }
    }

    /// Human-readable reason for a rejected check
    pub fn failure_reason(&self) -> &str {
        reason_or_unknown(self.error.as_deref())
    }
}

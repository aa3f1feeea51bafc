//! BMI Calculator Shared Library
//!
//! This crate contains the BMI domain logic and wire types used by the
//! form controller client and the WASM module.

pub mod bmi;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use bmi::*;
pub use errors::*;
pub use types::*;

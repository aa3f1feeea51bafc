//! BMI Calculator Client Library
//!
//! The form controller behind the quick calculator and the dashboard save
//! form, plus the HTTP client for the site's BMI API.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod ui;

pub use controller::{FormController, SaveOutcome, Session};

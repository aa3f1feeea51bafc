//! Remote API access
//!
//! The save endpoint sits behind a trait so the form controller can be
//! driven by the HTTP client in production and by fakes in tests.

mod http;

pub use http::HttpApiClient;

use crate::error::ClientResult;
use async_trait::async_trait;
use bmi_calculator_shared::types::{SaveBmiRequest, SaveBmiResponse};

/// Path of the save endpoint
pub const SAVE_BMI_PATH: &str = "/api/save_bmi";
/// Path of the stateless server-side check endpoint
pub const CHECK_BMI_PATH: &str = "/api/check_bmi";

/// Endpoint that persists a computed BMI for the logged-in user
#[async_trait]
pub trait SaveEndpoint: Send + Sync {
    /// Send one save request and return the server's verdict
    ///
    /// `Err` means no usable response arrived.
    async fn save_bmi(&self, request: &SaveBmiRequest) -> ClientResult<SaveBmiResponse>;
}

#[async_trait]
impl<T: SaveEndpoint + ?Sized> SaveEndpoint for std::sync::Arc<T> {
    async fn save_bmi(&self, request: &SaveBmiRequest) -> ClientResult<SaveBmiResponse> {
        (**self).save_bmi(request).await
    }
}

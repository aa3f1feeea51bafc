//! HTTP implementation of the remote API

use super::{SaveEndpoint, CHECK_BMI_PATH, SAVE_BMI_PATH};
use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use bmi_calculator_shared::bmi::Measurement;
use bmi_calculator_shared::types::{
    CheckBmiRequest, CheckBmiResponse, SaveBmiRequest, SaveBmiResponse,
};
use reqwest::header::COOKIE;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// JSON client for the BMI site's API
///
/// No timeout is configured; requests run until the transport gives up.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
    session_cookie: Option<SecretString>,
}

impl HttpApiClient {
    /// Create a client for the site at `base_url`
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bmi-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_cookie: None,
        })
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        let client = Self::new(config.base_url.trim())?;
        Ok(match &config.session_cookie {
            Some(cookie) if !cookie.is_empty() => {
                client.with_session_cookie(SecretString::new(cookie.clone()))
            }
            _ => client,
        })
    }

    /// Forward a session cookie with every request
    pub fn with_session_cookie(mut self, cookie: SecretString) -> Self {
        self.session_cookie = Some(cookie);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and decode the JSON answer
    ///
    /// The body is decoded whatever the HTTP status: the server reports
    /// rejections (401, 400) as `{"ok": false, "error": ...}`.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie.expose_secret().as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "Received API response");

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(path, status = status.as_u16(), error = %e, "Response body is not valid JSON");
            ClientError::InvalidResponse {
                endpoint: path.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Ask the server to compute and classify a measurement
    pub async fn check_bmi(&self, measurement: &Measurement) -> ClientResult<CheckBmiResponse> {
        let request = CheckBmiRequest {
            weight: measurement.weight_kg,
            height_cm: measurement.height_cm,
        };
        self.post_json(CHECK_BMI_PATH, &request).await
    }
}

#[async_trait]
impl SaveEndpoint for HttpApiClient {
    async fn save_bmi(&self, request: &SaveBmiRequest) -> ClientResult<SaveBmiResponse> {
        self.post_json(SAVE_BMI_PATH, request).await
    }
}

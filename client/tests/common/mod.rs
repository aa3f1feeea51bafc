//! Common test utilities for integration tests
//!
//! Wraps a wiremock server standing in for the BMI site.

#![allow(dead_code)]

use bmi_calculator_client::{
    api::HttpApiClient,
    ui::{Notice, Notifier},
    FormController, Session,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Notifier that keeps every notice for later inspection
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub type TestController = FormController<HttpApiClient, Arc<RecordingNotifier>>;

/// Test site wrapper
pub struct TestSite {
    pub server: MockServer,
}

impl TestSite {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn client(&self) -> HttpApiClient {
        HttpApiClient::new(self.server.uri()).expect("Failed to build HTTP client")
    }

    /// Controller wired to this site, plus its notice log
    pub fn controller(&self, session: Session) -> (TestController, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        (
            FormController::new(session, self.client(), notifier.clone()),
            notifier,
        )
    }

    /// Answer save requests with the given status and JSON body
    pub async fn mock_save(&self, status: u16, body: Value, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/api/save_bmi"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_save_ok(&self, expected_calls: u64) {
        self.mock_save(200, json!({ "ok": true }), expected_calls).await;
    }

    /// Bodies of every save request the site received
    pub async fn save_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == "/api/save_bmi")
            .map(|r| serde_json::from_slice(&r.body).expect("Save body is not JSON"))
            .collect()
    }
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a local port");
    let port = listener.local_addr().expect("Probe port has no address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

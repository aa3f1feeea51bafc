//! Integration tests for the quick and dashboard save flows

mod common;

use bmi_calculator_client::{
    api::HttpApiClient,
    ui::{DashboardForm, Notice, QuickForm, PLACEHOLDER},
    FormController, SaveOutcome, Session,
};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_anonymous_save_never_reaches_server() {
    let site = common::TestSite::start().await;
    site.mock_save_ok(0).await;
    let (controller, notifier) = site.controller(Session::Anonymous);

    let mut quick = QuickForm::with_inputs("70", "175");
    let mut dashboard = DashboardForm::with_inputs("70", "175", "");

    assert_eq!(controller.save_quick(&mut quick).await, SaveOutcome::LoginRequired);
    assert_eq!(
        controller.save_dashboard(&mut dashboard).await,
        SaveOutcome::LoginRequired
    );

    assert!(site.save_bodies().await.is_empty());
    assert_eq!(
        notifier.notices(),
        vec![Notice::LoginRequired, Notice::LoginRequired]
    );
}

#[tokio::test]
async fn test_quick_save_round_trip() {
    let site = common::TestSite::start().await;
    site.mock_save_ok(1).await;
    let (controller, notifier) = site.controller(Session::Authenticated);
    let mut form = QuickForm::with_inputs("70", "175");

    let outcome = controller.save_quick(&mut form).await;

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(
        site.save_bodies().await,
        vec![json!({
            "weight": 70.0,
            "height_cm": 175.0,
            "bmi": 22.9,
            "category": "Healthy",
            "note": "Saved from quick form"
        })]
    );
    assert_eq!(notifier.notices(), vec![Notice::SavedQuick]);
    assert_eq!(form.weight.value(), "70");
    assert_eq!(form.height.value(), "175");
    assert_eq!(form.score.text(), "22.9");
    assert_eq!(form.category.text(), "Healthy");
}

#[tokio::test]
async fn test_dashboard_save_round_trip_clears_form() {
    let site = common::TestSite::start().await;
    site.mock_save_ok(1).await;
    let (controller, notifier) = site.controller(Session::Authenticated);
    let mut form = DashboardForm::with_inputs("110", "180", "");

    let outcome = controller.save_dashboard(&mut form).await;

    assert_eq!(outcome, SaveOutcome::Saved);
    let bodies = site.save_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["category"], "Obese");
    assert_eq!(bodies[0]["note"], serde_json::Value::Null);
    assert_eq!(notifier.notices(), vec![Notice::SavedDashboard]);
    assert_eq!(form.weight.value(), "");
    assert_eq!(form.note.value(), "");
    assert_eq!(form.score.text(), PLACEHOLDER);
    assert_eq!(form.category.text(), PLACEHOLDER);
}

#[tokio::test]
async fn test_server_rejection_is_shown() {
    let site = common::TestSite::start().await;
    site.mock_save(401, json!({ "ok": false, "error": "Not authenticated" }), 1)
        .await;
    let (controller, notifier) = site.controller(Session::Authenticated);
    let mut form = DashboardForm::with_inputs("70", "175", "evening");

    let outcome = controller.save_dashboard(&mut form).await;

    assert_eq!(outcome, SaveOutcome::Rejected("Not authenticated".to_string()));
    assert_eq!(
        notifier.notices(),
        vec![Notice::SaveFailed("Not authenticated".to_string())]
    );
    assert_eq!(form.note.value(), "evening");
}

#[tokio::test]
async fn test_network_failure_is_shown() {
    let client = HttpApiClient::new(common::unreachable_base_url().await).unwrap();
    let notifier = Arc::new(common::RecordingNotifier::default());
    let controller = FormController::new(Session::Authenticated, client, notifier.clone());
    let mut form = QuickForm::with_inputs("70", "175");

    let outcome = controller.save_quick(&mut form).await;

    assert_eq!(outcome, SaveOutcome::NetworkError);
    assert_eq!(notifier.notices(), vec![Notice::NetworkError]);
    assert_eq!(form.score.text(), "22.9");
}

#[tokio::test]
async fn test_cancel_never_reaches_server() {
    let site = common::TestSite::start().await;
    site.mock_save_ok(0).await;
    let (controller, notifier) = site.controller(Session::Authenticated);
    let mut form = DashboardForm::with_inputs("70", "175", "note");
    controller.compute_dashboard(&mut form);

    controller.cancel_dashboard(&mut form);

    assert_eq!(form, DashboardForm::new());
    assert!(site.save_bodies().await.is_empty());
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_invalid_input_never_reaches_server() {
    let site = common::TestSite::start().await;
    site.mock_save_ok(0).await;
    let (controller, notifier) = site.controller(Session::Authenticated);
    let mut form = DashboardForm::with_inputs("0", "175", "");

    assert_eq!(
        controller.save_dashboard(&mut form).await,
        SaveOutcome::InvalidInput
    );
    assert!(site.save_bodies().await.is_empty());
    assert!(notifier.notices().is_empty());
    assert_eq!(form.category.text(), "Enter valid values");
}

#[tokio::test]
async fn test_reply_without_ok_field_is_a_rejection() {
    let site = common::TestSite::start().await;
    site.mock_save(400, json!({ "error": "Invalid payload" }), 1).await;
    let (controller, notifier) = site.controller(Session::Authenticated);
    let mut form = QuickForm::with_inputs("70", "175");

    let outcome = controller.save_quick(&mut form).await;

    assert_eq!(outcome, SaveOutcome::Rejected("Invalid payload".to_string()));
    assert_eq!(
        notifier.notices(),
        vec![Notice::SaveFailed("Invalid payload".to_string())]
    );
}

#[tokio::test]
async fn test_empty_error_text_reads_unknown() {
    let site = common::TestSite::start().await;
    site.mock_save(200, json!({ "ok": false, "error": "" }), 1).await;
    let (controller, notifier) = site.controller(Session::Authenticated);
    let mut form = DashboardForm::with_inputs("70", "175", "");

    let outcome = controller.save_dashboard(&mut form).await;

    assert_eq!(outcome, SaveOutcome::Rejected("unknown".to_string()));
    assert_eq!(notifier.notices(), vec![Notice::SaveFailed("unknown".to_string())]);
}

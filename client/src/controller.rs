//! Form controller
//!
//! Each user action on the quick form or the dashboard form maps to one
//! method here. Actions read the live field values every time; nothing from
//! an earlier computation is cached.

use crate::api::SaveEndpoint;
use crate::config::DEFAULT_QUICK_NOTE;
use crate::ui::{
    format_score, DashboardForm, Notice, Notifier, QuickForm, ResultSlots, INVALID_INPUT_TEXT,
};
use bmi_calculator_shared::bmi::{advice_text, compute_from_inputs, BmiResult, Measurement};
use bmi_calculator_shared::types::SaveBmiRequest;
use tracing::{debug, info, warn};

/// Tooltip on the quick save button while logged out
pub const LOGIN_TO_SAVE_TITLE: &str = "Login to save results";

/// Whether the current user may save, as reported by the host page
///
/// Only gates the client side; the server checks authorization again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Authenticated,
    Anonymous,
}

impl Session {
    pub fn from_flag(logged_in: bool) -> Self {
        if logged_in {
            Session::Authenticated
        } else {
            Session::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated)
    }
}

/// How a save action ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Blocked before any request: no session
    LoginRequired,
    /// Blocked before any request: inputs did not compute
    InvalidInput,
    Saved,
    /// Server answered `ok: false` with this reason
    Rejected(String),
    /// No usable response arrived
    NetworkError,
}

/// Enabled state and tooltip of the quick save button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveButtonState {
    pub enabled: bool,
    pub title: &'static str,
}

/// Compute a BMI from raw inputs and render it into the slots
///
/// Unusable inputs show the placeholder score and "Enter valid values",
/// clear the advice, and return `None`.
pub fn compute_and_show(
    weight_input: &str,
    height_input: &str,
    slots: ResultSlots<'_>,
) -> Option<BmiResult> {
    compute_measurement(weight_input, height_input, slots).map(|(_, result)| result)
}

fn compute_measurement(
    weight_input: &str,
    height_input: &str,
    slots: ResultSlots<'_>,
) -> Option<(Measurement, BmiResult)> {
    match compute_from_inputs(weight_input, height_input) {
        Ok((measurement, result)) => {
            slots.score.show(format_score(result.value));
            slots.category.show(result.category.name());
            if let Some(advice) = slots.advice {
                advice.show(advice_text(result.category));
            }
            debug!(bmi = result.value, category = %result.category, "Computed BMI");
            Some((measurement, result))
        }
        Err(e) => {
            slots.score.reset();
            slots.category.show(INVALID_INPUT_TEXT);
            if let Some(advice) = slots.advice {
                advice.clear();
            }
            debug!(field = %e.field(), reason = %e, "Rejected BMI inputs");
            None
        }
    }
}

/// Handles compute, save and cancel actions for both forms
pub struct FormController<E, N> {
    session: Session,
    endpoint: E,
    notifier: N,
    quick_note: String,
}

impl<E: SaveEndpoint, N: Notifier> FormController<E, N> {
    pub fn new(session: Session, endpoint: E, notifier: N) -> Self {
        Self {
            session,
            endpoint,
            notifier,
            quick_note: DEFAULT_QUICK_NOTE.to_string(),
        }
    }

    /// Replace the note attached to quick form saves
    pub fn with_quick_note(mut self, note: impl Into<String>) -> Self {
        self.quick_note = note.into();
        self
    }

    /// State of the quick save button for the current session
    pub fn save_button_state(&self) -> SaveButtonState {
        if self.session.is_authenticated() {
            SaveButtonState {
                enabled: true,
                title: "",
            }
        } else {
            SaveButtonState {
                enabled: false,
                title: LOGIN_TO_SAVE_TITLE,
            }
        }
    }

    /// Compute button on the quick form
    pub fn compute_quick(&self, form: &mut QuickForm) -> Option<BmiResult> {
        let (weight, height, slots) = form.split();
        compute_and_show(weight, height, slots)
    }

    /// Compute button on the dashboard form
    pub fn compute_dashboard(&self, form: &mut DashboardForm) -> Option<BmiResult> {
        let (weight, height, slots) = form.split();
        compute_and_show(weight, height, slots)
    }

    /// Save button on the quick form
    ///
    /// Fields are left as they are after a successful save.
    pub async fn save_quick(&self, form: &mut QuickForm) -> SaveOutcome {
        if !self.require_session() {
            return SaveOutcome::LoginRequired;
        }

        let (weight, height, slots) = form.split();
        let Some((measurement, result)) = compute_measurement(weight, height, slots) else {
            return SaveOutcome::InvalidInput;
        };

        let request = SaveBmiRequest::new(&measurement, &result, Some(self.quick_note.clone()));
        self.submit("quick", &request, Notice::SavedQuick).await
    }

    /// Save button on the dashboard form
    ///
    /// A successful save clears the form.
    pub async fn save_dashboard(&self, form: &mut DashboardForm) -> SaveOutcome {
        if !self.require_session() {
            return SaveOutcome::LoginRequired;
        }

        let note = form.note_value();
        let (weight, height, slots) = form.split();
        let Some((measurement, result)) = compute_measurement(weight, height, slots) else {
            return SaveOutcome::InvalidInput;
        };

        let request = SaveBmiRequest::new(&measurement, &result, note);
        let outcome = self.submit("dashboard", &request, Notice::SavedDashboard).await;
        if outcome == SaveOutcome::Saved {
            form.reset();
        }
        outcome
    }

    /// Cancel button on the dashboard form
    pub fn cancel_dashboard(&self, form: &mut DashboardForm) {
        form.reset();
        debug!("Dashboard form cleared");
    }

    fn require_session(&self) -> bool {
        if self.session.is_authenticated() {
            return true;
        }
        warn!("Save attempted without a session");
        self.notifier.notify(Notice::LoginRequired);
        false
    }

    async fn submit(
        &self,
        form: &'static str,
        request: &SaveBmiRequest,
        saved: Notice,
    ) -> SaveOutcome {
        info!(form, bmi = request.bmi, category = %request.category, "Saving BMI");

        match self.endpoint.save_bmi(request).await {
            Ok(response) if response.ok => {
                info!(form, "BMI saved");
                self.notifier.notify(saved);
                SaveOutcome::Saved
            }
            Ok(response) => {
                let reason = response.failure_reason().to_string();
                warn!(form, reason = %reason, "Server rejected BMI save");
                self.notifier.notify(Notice::SaveFailed(reason.clone()));
                SaveOutcome::Rejected(reason)
            }
            Err(e) => {
                warn!(form, error = %e, "BMI save did not complete");
                self.notifier.notify(Notice::NetworkError);
                SaveOutcome::NetworkError
            }
        }
    }
}

//! Form session
//!
//! One session per mounted form. Owns the aggregate behind a lock, the
//! snapshot store, the submission gateway, and the autosave debouncer,
//! and sequences the asynchronous edges the aggregate itself stays free
//! of.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use solis_common::{FieldName, InquirySnapshot};
use tokio::sync::Mutex;

use crate::application::autosave::Debouncer;
use crate::domain::aggregates::{FormPhase, InquiryForm, SaveStatus, SubmitGate};
use crate::domain::events::InquiryEvent;
use crate::ports::inbound::{FormUseCases, SessionError, SubmitOutcome};
use crate::ports::outbound::{SnapshotStore, SubmissionGateway};

/// Shown when the attempt fails without a server response.
pub const SUBMIT_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Session tuning knobs.
#[derive(Clone, Copy, Debug)]
pub struct FormConfig {
    /// Quiet period before an autosave write.
    pub autosave_debounce: Duration,
    /// Upper bound on one submission round-trip.
    pub submit_timeout: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            autosave_debounce: Duration::from_millis(1000),
            submit_timeout: Duration::from_secs(15),
        }
    }
}

/// Form session service.
pub struct FormSession {
    form: Arc<Mutex<InquiryForm>>,
    store: Arc<dyn SnapshotStore>,
    gateway: Arc<dyn SubmissionGateway>,
    autosave: Debouncer,
    config: FormConfig,
}

impl FormSession {
    /// Create a session with default timings.
    pub fn new(store: Arc<dyn SnapshotStore>, gateway: Arc<dyn SubmissionGateway>) -> Self {
        Self::with_config(store, gateway, FormConfig::default())
    }

    /// Create a session with explicit timings.
    pub fn with_config(
        store: Arc<dyn SnapshotStore>,
        gateway: Arc<dyn SubmissionGateway>,
        config: FormConfig,
    ) -> Self {
        Self {
            form: Arc::new(Mutex::new(InquiryForm::new())),
            store,
            gateway,
            autosave: Debouncer::new(config.autosave_debounce),
            config,
        }
    }

    // =========================================================================
    // Read surface for the UI layer
    // =========================================================================

    pub async fn snapshot(&self) -> InquirySnapshot {
        self.form.lock().await.snapshot().clone()
    }

    pub async fn phase(&self) -> FormPhase {
        self.form.lock().await.phase()
    }

    pub async fn save_status(&self) -> SaveStatus {
        self.form.lock().await.save_status()
    }

    pub async fn has_saved_data(&self) -> bool {
        self.form.lock().await.has_saved_data()
    }

    pub async fn field_error(&self, field: FieldName) -> Option<String> {
        self.form.lock().await.error(field).map(str::to_string)
    }

    pub async fn field_errors(&self) -> HashMap<FieldName, String> {
        self.form.lock().await.errors().clone()
    }

    pub async fn field_valid(&self, field: FieldName) -> Option<bool> {
        self.form.lock().await.is_valid(field)
    }

    pub async fn captcha_error(&self) -> Option<String> {
        self.form.lock().await.captcha_error().map(str::to_string)
    }

    /// Drain domain events for UI side effects.
    pub async fn drain_events(&self) -> Vec<InquiryEvent> {
        self.form.lock().await.take_events()
    }
}

#[async_trait]
impl FormUseCases for FormSession {
    async fn restore(&self) -> bool {
        match self.store.load().await {
            Ok(Some(snapshot)) => {
                self.form.lock().await.restore(snapshot);
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load saved inquiry");
                false
            }
        }
    }

    async fn edit_field(&self, field: FieldName, raw_value: &str) {
        let snapshot = {
            let mut form = self.form.lock().await;
            if form.phase() != FormPhase::Editing {
                return;
            }
            form.set_field(field, raw_value);
            if form.snapshot().is_empty() {
                None
            } else {
                form.autosave_scheduled();
                Some(form.snapshot().clone())
            }
        };

        // An all-empty form is not worth persisting; drop any pending
        // write as well so it cannot resurrect stale values.
        let snapshot = match snapshot {
            Some(snapshot) => snapshot,
            None => {
                self.autosave.cancel();
                return;
            }
        };

        let store = self.store.clone();
        let form = self.form.clone();
        self.autosave.schedule(async move {
            match store.save(&snapshot).await {
                Ok(()) => form.lock().await.autosave_succeeded(),
                Err(e) => {
                    tracing::warn!(error = %e, "inquiry autosave failed");
                    form.lock().await.autosave_failed(e.to_string());
                }
            }
        });
    }

    async fn focus_field(&self, field: FieldName) {
        self.form.lock().await.focus(field);
    }

    async fn blur_field(&self, field: FieldName) -> bool {
        self.form.lock().await.blur(field)
    }

    async fn captcha_verified(&self, token: &str) {
        self.form.lock().await.captcha_verified(token);
    }

    async fn captcha_expired(&self) {
        self.form.lock().await.captcha_expired();
    }

    async fn submit(&self) -> SubmitOutcome {
        let gate = self.form.lock().await.begin_submit();
        let payload = match gate {
            SubmitGate::AlreadySubmitting => return SubmitOutcome::AlreadyInFlight,
            SubmitGate::Blocked => return SubmitOutcome::Blocked,
            SubmitGate::AwaitingCaptcha => return SubmitOutcome::AwaitingCaptcha,
            SubmitGate::Ready(payload) => payload,
        };

        let response =
            tokio::time::timeout(self.config.submit_timeout, self.gateway.submit(payload)).await;

        match response {
            Ok(Ok(result)) => {
                self.form.lock().await.complete_submission(&result);
                if result.success {
                    self.autosave.cancel();
                    if let Err(e) = self.store.clear().await {
                        tracing::warn!(error = %e, "failed to clear saved inquiry after acceptance");
                    }
                    SubmitOutcome::Succeeded(result.message)
                } else {
                    SubmitOutcome::Failed(result.message)
                }
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "inquiry submission failed");
                self.form.lock().await.fail_submission(SUBMIT_ERROR_MESSAGE);
                SubmitOutcome::Failed(SUBMIT_ERROR_MESSAGE.to_string())
            }
            Err(_) => {
                tracing::error!("inquiry submission timed out");
                self.form.lock().await.fail_submission(SUBMIT_ERROR_MESSAGE);
                SubmitOutcome::Failed(SUBMIT_ERROR_MESSAGE.to_string())
            }
        }
    }

    async fn clear_saved(&self) -> Result<(), SessionError> {
        self.autosave.cancel();
        self.store.clear().await?;
        self.form.lock().await.clear();
        Ok(())
    }

    async fn start_new_inquiry(&self) {
        self.form.lock().await.new_inquiry();
    }
}

//! Inquiry Form Aggregate
//!
//! The form state machine: field values, validity and error maps, focus
//! tracking, captcha token, autosave status, and the submission phase.
//! All transitions are synchronous; the application layer owns the
//! asynchronous edges (autosave timer, network call) and feeds results
//! back in.

use std::collections::HashMap;

use chrono::Utc;
use solis_common::{FieldName, InquiryPayload, InquirySnapshot, SubmissionResult};

use crate::domain::events::InquiryEvent;
use crate::domain::validation;
use crate::domain::value_objects::PhoneMask;

/// Shown when submission is attempted without a captcha token.
pub const CAPTCHA_REQUIRED_MESSAGE: &str = "Please complete the captcha.";

/// Global submission phase. Validation outcomes (blocked, awaiting
/// captcha, failed) return the form to `Editing`; only an accepted
/// submission reaches `Succeeded`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting edits.
    #[default]
    Editing,
    /// One submission in flight; edits and further submits are no-ops.
    Submitting,
    /// Accepted; the UI shows the success view until a new inquiry starts.
    Succeeded,
}

/// Autosave indicator state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing pending.
    #[default]
    Idle,
    /// A debounced save is scheduled.
    Saving,
    /// The last save succeeded.
    Saved,
    /// The last save failed; advisory only.
    Error,
}

/// Outcome of the client-side submit gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitGate {
    /// A submission is already in flight.
    AlreadySubmitting,
    /// Client-side validation failed; errors are populated.
    Blocked,
    /// All fields valid but no captcha token is present.
    AwaitingCaptcha,
    /// Cleared for submission; the payload carries canonical values.
    Ready(InquiryPayload),
}

/// Inquiry form aggregate root.
#[derive(Debug, Default)]
pub struct InquiryForm {
    snapshot: InquirySnapshot,
    errors: HashMap<FieldName, String>,
    valid: HashMap<FieldName, bool>,
    focused: Option<FieldName>,
    captcha_token: Option<String>,
    captcha_error: Option<String>,
    save_status: SaveStatus,
    has_saved_data: bool,
    phase: FormPhase,
    events: Vec<InquiryEvent>,
}

impl InquiryForm {
    /// Create an empty form in the editing phase.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn snapshot(&self) -> &InquirySnapshot { &self.snapshot }
    pub fn phase(&self) -> FormPhase { self.phase }
    pub fn save_status(&self) -> SaveStatus { self.save_status }
    pub fn has_saved_data(&self) -> bool { self.has_saved_data }
    pub fn focused(&self) -> Option<FieldName> { self.focused }
    pub fn captcha_token(&self) -> Option<&str> { self.captcha_token.as_deref() }
    pub fn captcha_error(&self) -> Option<&str> { self.captcha_error.as_deref() }
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
    pub fn errors(&self) -> &HashMap<FieldName, String> { &self.errors }
    pub fn is_valid(&self, field: FieldName) -> Option<bool> {
        self.valid.get(&field).copied()
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Apply one keystroke's worth of input to a field.
    ///
    /// Phone input is re-masked; a displayed error on the field is cleared
    /// optimistically (validity is only recomputed at blur or submit).
    /// Ignored outside the editing phase.
    pub fn set_field(&mut self, field: FieldName, raw_value: &str) {
        if self.phase != FormPhase::Editing {
            return;
        }

        let value = match field {
            FieldName::Phone => PhoneMask::mask(raw_value),
            _ => raw_value.to_string(),
        };
        self.snapshot.set(field, value);
        self.errors.remove(&field);
    }

    /// Track the focused field.
    pub fn focus(&mut self, field: FieldName) {
        self.focused = Some(field);
    }

    /// Leave a field: drops focus and validates that field only.
    pub fn blur(&mut self, field: FieldName) -> bool {
        self.focused = None;
        self.validate_field(field)
    }

    /// Run the validator for one field, updating the error and validity
    /// maps.
    pub fn validate_field(&mut self, field: FieldName) -> bool {
        let verdict = validation::validate(field, self.snapshot.get(field));
        if verdict.is_valid {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, verdict.message);
        }
        self.valid.insert(field, verdict.is_valid);
        verdict.is_valid
    }

    /// Validate every field. Returns whether the whole form is valid.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in FieldName::ALL {
            if !self.validate_field(field) {
                all_valid = false;
            }
        }
        all_valid
    }

    // =========================================================================
    // Captcha gate
    // =========================================================================

    /// The bot-check widget produced a token.
    pub fn captcha_verified(&mut self, token: impl Into<String>) {
        self.captcha_token = Some(token.into());
        self.captcha_error = None;
    }

    /// The token expired; indistinguishable from never having one.
    pub fn captcha_expired(&mut self) {
        self.captcha_token = None;
    }

    // =========================================================================
    // Submission lifecycle
    // =========================================================================

    /// Gate a submit attempt.
    ///
    /// Runs full client-side validation, then the captcha check. Only a
    /// `Ready` gate moves the form into the submitting phase; the payload
    /// carries the canonical (digits-only) phone and consumes the captcha
    /// token for this attempt.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.phase == FormPhase::Submitting {
            return SubmitGate::AlreadySubmitting;
        }

        self.captcha_error = None;

        if !self.validate_all() {
            self.raise(InquiryEvent::SubmissionBlocked {
                invalid_fields: self.errors.len(),
                blocked_at: Utc::now(),
            });
            return SubmitGate::Blocked;
        }

        let token = match &self.captcha_token {
            Some(token) => token.clone(),
            None => {
                self.captcha_error = Some(CAPTCHA_REQUIRED_MESSAGE.to_string());
                self.raise(InquiryEvent::CaptchaRequired {
                    requested_at: Utc::now(),
                });
                return SubmitGate::AwaitingCaptcha;
            }
        };

        let mut canonical = self.snapshot.clone();
        canonical.set(FieldName::Phone, PhoneMask::strip(&self.snapshot.phone));
        let payload = InquiryPayload::new(canonical, Some(token));

        self.phase = FormPhase::Submitting;
        self.raise(InquiryEvent::SubmissionStarted {
            submission_id: payload.submission_id.clone(),
            started_at: Utc::now(),
        });

        SubmitGate::Ready(payload)
    }

    /// Fold the intake service's response into form state.
    ///
    /// Success clears the snapshot and both maps; server validation errors
    /// merge into the error map (first message per field wins) and the
    /// form returns to editing with input preserved. The captcha token is
    /// consumed either way.
    pub fn complete_submission(&mut self, result: &SubmissionResult) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.captcha_token = None;

        if result.success {
            self.snapshot = InquirySnapshot::new();
            self.errors.clear();
            self.valid.clear();
            self.has_saved_data = false;
            self.save_status = SaveStatus::Idle;
            self.phase = FormPhase::Succeeded;
            self.raise(InquiryEvent::SubmissionSucceeded {
                message: result.message.clone(),
                succeeded_at: Utc::now(),
            });
            return;
        }

        if let Some(field_errors) = &result.errors {
            for (key, messages) in field_errors {
                if let (Some(field), Some(first)) = (FieldName::parse(key), messages.first()) {
                    self.errors.insert(field, first.clone());
                    self.valid.insert(field, false);
                }
            }
        }
        self.phase = FormPhase::Editing;
        self.raise(InquiryEvent::SubmissionFailed {
            message: result.message.clone(),
            failed_at: Utc::now(),
        });
    }

    /// The in-flight attempt never produced a result (transport error or
    /// timeout). Input is preserved; the form returns to editing.
    pub fn fail_submission(&mut self, message: impl Into<String>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.captcha_token = None;
        self.phase = FormPhase::Editing;
        self.raise(InquiryEvent::SubmissionFailed {
            message: message.into(),
            failed_at: Utc::now(),
        });
    }

    /// Leave the success view and start over with an empty form.
    pub fn new_inquiry(&mut self) {
        if self.phase == FormPhase::Succeeded {
            self.phase = FormPhase::Editing;
        }
    }

    // =========================================================================
    // Persistence hooks
    // =========================================================================

    /// Hydrate from a previously saved snapshot. Every non-empty field is
    /// re-validated so validity and errors match what the user would see
    /// had they typed the values.
    pub fn restore(&mut self, snapshot: InquirySnapshot) {
        self.snapshot = snapshot;
        let mut restored_fields = 0;
        for field in FieldName::ALL {
            if !self.snapshot.get(field).is_empty() {
                self.validate_field(field);
                restored_fields += 1;
            }
        }
        self.has_saved_data = true;
        self.raise(InquiryEvent::SnapshotRestored {
            restored_fields,
            restored_at: Utc::now(),
        });
    }

    /// User-initiated clear: empties the form, both maps, and the saved
    /// flag.
    pub fn clear(&mut self) {
        self.snapshot = InquirySnapshot::new();
        self.errors.clear();
        self.valid.clear();
        self.has_saved_data = false;
        self.save_status = SaveStatus::Idle;
        self.raise(InquiryEvent::SavedDataCleared {
            cleared_at: Utc::now(),
        });
    }

    /// A debounced save was scheduled.
    pub fn autosave_scheduled(&mut self) {
        self.save_status = SaveStatus::Saving;
    }

    /// The scheduled save wrote the snapshot.
    pub fn autosave_succeeded(&mut self) {
        self.save_status = SaveStatus::Saved;
        self.has_saved_data = true;
        self.raise(InquiryEvent::AutosaveCompleted { saved_at: Utc::now() });
    }

    /// The scheduled save failed. Editing and submission stay available.
    pub fn autosave_failed(&mut self, reason: impl Into<String>) {
        self.save_status = SaveStatus::Error;
        self.raise(InquiryEvent::AutosaveFailed {
            reason: reason.into(),
            failed_at: Utc::now(),
        });
    }

    // =========================================================================
    // Domain Events
    // =========================================================================

    /// Get and clear accumulated domain events.
    pub fn take_events(&mut self) -> Vec<InquiryEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise(&mut self, event: InquiryEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InquiryForm {
        let mut form = InquiryForm::new();
        form.set_field(FieldName::Name, "Asha Rao");
        form.set_field(FieldName::Phone, "5551234567");
        form.set_field(FieldName::Email, "asha@example.com");
        form.set_field(FieldName::Location, "Pune");
        form.set_field(FieldName::CustomerType, "industrial");
        form.set_field(FieldName::CompanyName, "Rao Textiles");
        form.set_field(FieldName::CompanyRating, "AA");
        form.set_field(FieldName::ContractLoad, "101-500");
        form.set_field(FieldName::RooftopArea, "1001-5000");
        form.set_field(FieldName::Message, "Interested in rooftop solar");
        form
    }

    #[test]
    fn test_new_form_is_empty_and_editing() {
        let form = InquiryForm::new();
        assert!(form.snapshot().is_empty());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.save_status(), SaveStatus::Idle);
        assert!(!form.has_saved_data());
    }

    #[test]
    fn test_phone_input_is_masked() {
        let mut form = InquiryForm::new();
        form.set_field(FieldName::Phone, "5551234567");
        assert_eq!(form.snapshot().phone, "(555) 123-4567");
    }

    #[test]
    fn test_typing_clears_displayed_error() {
        let mut form = InquiryForm::new();
        form.blur(FieldName::Name);
        assert_eq!(form.error(FieldName::Name), Some("Enter Your Name"));

        form.set_field(FieldName::Name, "A");
        assert_eq!(form.error(FieldName::Name), None);
        // Validity is only recomputed at blur or submit.
        assert_eq!(form.is_valid(FieldName::Name), Some(false));
    }

    #[test]
    fn test_blur_validates_single_field() {
        let mut form = InquiryForm::new();
        form.set_field(FieldName::Email, "bad-address");
        form.focus(FieldName::Email);
        assert_eq!(form.focused(), Some(FieldName::Email));

        assert!(!form.blur(FieldName::Email));
        assert_eq!(form.focused(), None);
        assert_eq!(
            form.error(FieldName::Email),
            Some("Please enter a valid email address")
        );
        // Other fields untouched.
        assert_eq!(form.error(FieldName::Name), None);
        assert_eq!(form.is_valid(FieldName::Name), None);
    }

    #[test]
    fn test_submit_blocked_populates_every_error() {
        let mut form = InquiryForm::new();
        assert_eq!(form.begin_submit(), SubmitGate::Blocked);
        assert_eq!(form.errors().len(), 10);
        assert_eq!(form.phase(), FormPhase::Editing);

        let events = form.take_events();
        assert!(matches!(
            events.last(),
            Some(InquiryEvent::SubmissionBlocked { invalid_fields: 10, .. })
        ));
    }

    #[test]
    fn test_submit_blocked_by_single_empty_field() {
        let mut form = filled_form();
        form.set_field(FieldName::Name, "");
        form.captcha_verified("tok");

        assert_eq!(form.begin_submit(), SubmitGate::Blocked);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(FieldName::Name), Some("Enter Your Name"));
        assert_eq!(form.is_valid(FieldName::Phone), Some(true));
    }

    #[test]
    fn test_submit_without_captcha_is_gated() {
        let mut form = filled_form();
        assert_eq!(form.begin_submit(), SubmitGate::AwaitingCaptcha);
        assert_eq!(form.captcha_error(), Some(CAPTCHA_REQUIRED_MESSAGE));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_ready_payload_has_canonical_phone_and_token() {
        let mut form = filled_form();
        form.captcha_verified("tok-123");

        let gate = form.begin_submit();
        let SubmitGate::Ready(payload) = gate else {
            panic!("expected Ready, got {:?}", gate);
        };
        assert_eq!(payload.form.phone, "5551234567");
        assert_eq!(payload.captcha.as_deref(), Some("tok-123"));
        assert!(!payload.submission_id.is_empty());
        assert_eq!(form.phase(), FormPhase::Submitting);
        // The display value stays masked.
        assert_eq!(form.snapshot().phone, "(555) 123-4567");
    }

    #[test]
    fn test_second_submit_while_in_flight_is_noop() {
        let mut form = filled_form();
        form.captcha_verified("tok");
        assert!(matches!(form.begin_submit(), SubmitGate::Ready(_)));
        assert_eq!(form.begin_submit(), SubmitGate::AlreadySubmitting);
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = filled_form();
        form.captcha_verified("tok");
        assert!(matches!(form.begin_submit(), SubmitGate::Ready(_)));

        form.set_field(FieldName::Name, "changed");
        assert_eq!(form.snapshot().name, "Asha Rao");
    }

    #[test]
    fn test_successful_submission_resets_everything() {
        let mut form = filled_form();
        form.captcha_verified("tok");
        assert!(matches!(form.begin_submit(), SubmitGate::Ready(_)));

        form.complete_submission(&SubmissionResult::accepted("Thank you"));

        assert_eq!(form.phase(), FormPhase::Succeeded);
        assert!(form.snapshot().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.is_valid(FieldName::Name), None);
        assert_eq!(form.captcha_token(), None);
        assert!(!form.has_saved_data());

        form.new_inquiry();
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_server_errors_merge_first_message_wins() {
        let mut form = filled_form();
        form.captcha_verified("tok");
        assert!(matches!(form.begin_submit(), SubmitGate::Ready(_)));

        let mut errors = std::collections::BTreeMap::new();
        errors.insert(
            "email".to_string(),
            vec!["Invalid email address".to_string(), "second".to_string()],
        );
        errors.insert("unknownField".to_string(), vec!["ignored".to_string()]);
        form.complete_submission(&SubmissionResult::rejected(
            "Please fix the errors in the form",
            errors,
        ));

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.error(FieldName::Email), Some("Invalid email address"));
        assert_eq!(form.is_valid(FieldName::Email), Some(false));
        // Input preserved.
        assert_eq!(form.snapshot().name, "Asha Rao");
    }

    #[test]
    fn test_transport_failure_preserves_input() {
        let mut form = filled_form();
        form.captcha_verified("tok");
        assert!(matches!(form.begin_submit(), SubmitGate::Ready(_)));

        form.fail_submission("An unexpected error occurred. Please try again.");

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.snapshot().email, "asha@example.com");
        assert!(matches!(
            form.take_events().last(),
            Some(InquiryEvent::SubmissionFailed { .. })
        ));
    }

    #[test]
    fn test_restore_revalidates_non_empty_fields() {
        let mut snapshot = InquirySnapshot::new();
        snapshot.set(FieldName::Name, "Asha");
        snapshot.set(FieldName::Email, "not-an-email");

        let mut form = InquiryForm::new();
        form.restore(snapshot);

        assert!(form.has_saved_data());
        assert_eq!(form.is_valid(FieldName::Name), Some(true));
        assert_eq!(
            form.error(FieldName::Email),
            Some("Please enter a valid email address")
        );
        // Empty fields are not validated on restore.
        assert_eq!(form.is_valid(FieldName::Message), None);
        assert!(matches!(
            form.take_events().last(),
            Some(InquiryEvent::SnapshotRestored { restored_fields: 2, .. })
        ));
    }

    #[test]
    fn test_clear_resets_form_and_saved_flag() {
        let mut form = filled_form();
        form.autosave_succeeded();
        assert!(form.has_saved_data());

        form.clear();
        assert!(form.snapshot().is_empty());
        assert!(form.errors().is_empty());
        assert!(!form.has_saved_data());
        assert_eq!(form.save_status(), SaveStatus::Idle);
    }

    #[test]
    fn test_captcha_expiry_clears_token() {
        let mut form = filled_form();
        form.captcha_verified("tok");
        form.captcha_expired();
        assert_eq!(form.begin_submit(), SubmitGate::AwaitingCaptcha);
    }

    #[test]
    fn test_autosave_status_lifecycle() {
        let mut form = InquiryForm::new();
        form.autosave_scheduled();
        assert_eq!(form.save_status(), SaveStatus::Saving);

        form.autosave_succeeded();
        assert_eq!(form.save_status(), SaveStatus::Saved);
        assert!(form.has_saved_data());

        form.autosave_failed("storage disabled");
        assert_eq!(form.save_status(), SaveStatus::Error);
    }
}

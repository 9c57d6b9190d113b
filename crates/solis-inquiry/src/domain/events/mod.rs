//! Domain Events
//!
//! Events raised by the form aggregate to communicate state changes. The
//! UI layer consumes these for side effects (toasts, shake feedback,
//! status indicators).

use chrono::{DateTime, Utc};

/// Events raised by [`crate::domain::aggregates::InquiryForm`].
#[derive(Clone, Debug)]
pub enum InquiryEvent {
    /// A previously saved snapshot was loaded back into the form.
    SnapshotRestored {
        restored_fields: usize,
        restored_at: DateTime<Utc>,
    },

    /// The user cleared their saved data.
    SavedDataCleared { cleared_at: DateTime<Utc> },

    /// A debounced autosave wrote the snapshot.
    AutosaveCompleted { saved_at: DateTime<Utc> },

    /// A debounced autosave failed; advisory only.
    AutosaveFailed {
        reason: String,
        failed_at: DateTime<Utc>,
    },

    /// A submit attempt was stopped by client-side validation. The UI
    /// maps this to the shake feedback.
    SubmissionBlocked {
        invalid_fields: usize,
        blocked_at: DateTime<Utc>,
    },

    /// A submit attempt was stopped because no captcha token is present.
    CaptchaRequired { requested_at: DateTime<Utc> },

    /// The payload passed the client gate and was handed to the gateway.
    SubmissionStarted {
        submission_id: String,
        started_at: DateTime<Utc>,
    },

    /// The intake service accepted the inquiry.
    SubmissionSucceeded {
        message: String,
        succeeded_at: DateTime<Utc>,
    },

    /// The attempt failed (server validation, transport, or timeout).
    SubmissionFailed {
        message: String,
        failed_at: DateTime<Utc>,
    },
}

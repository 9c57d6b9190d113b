//! Inbound ports
//!
//! The surface the UI layer drives: one trait per form session, plus the
//! submit outcome it renders from.

use async_trait::async_trait;
use solis_common::FieldName;

use crate::ports::outbound::StoreError;

/// Form session use cases.
#[async_trait]
pub trait FormUseCases: Send + Sync {
    /// Load any saved snapshot into the form. Returns whether data was
    /// restored.
    async fn restore(&self) -> bool;

    /// Apply raw input to a field (masking applied where relevant).
    async fn edit_field(&self, field: FieldName, raw_value: &str);

    /// Track focus entering a field.
    async fn focus_field(&self, field: FieldName);

    /// Focus left a field; validates it. Returns the field's validity.
    async fn blur_field(&self, field: FieldName) -> bool;

    /// The bot-check widget produced a token.
    async fn captcha_verified(&self, token: &str);

    /// The bot-check token expired.
    async fn captcha_expired(&self);

    /// Attempt submission; runs the full client gate and, when cleared,
    /// one bounded network call.
    async fn submit(&self) -> SubmitOutcome;

    /// User-initiated clear of the saved snapshot and the form.
    async fn clear_saved(&self) -> Result<(), SessionError>;

    /// Leave the success view and begin a fresh inquiry.
    async fn start_new_inquiry(&self);
}

/// Outcome of one submit attempt, for the UI to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; field errors are on the form.
    Blocked,
    /// No captcha token; the captcha banner message is on the form.
    AwaitingCaptcha,
    /// A submission was already in flight; nothing happened.
    AlreadyInFlight,
    /// The inquiry was accepted.
    Succeeded(String),
    /// The attempt failed (server validation, transport, or timeout).
    Failed(String),
}

/// Session error type.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The snapshot store rejected an operation the user asked for.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

//! Submission payload
//!
//! The envelope the client posts to the intake service: the snapshot
//! fields, the captcha token, and a client-generated submission id so a
//! retried submission can be de-duplicated downstream.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::snapshot::InquirySnapshot;

/// One submission attempt, as sent over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    /// The inquiry field values (phone canonicalized to digits).
    #[serde(flatten)]
    pub form: InquirySnapshot,
    /// Captcha completion token, if one was obtained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
    /// Client-generated id for this attempt. Retries reuse the id so the
    /// sink can accept duplicates idempotently.
    #[serde(default)]
    pub submission_id: String,
}

impl InquiryPayload {
    /// Build a payload for a new submission attempt with a fresh id.
    pub fn new(form: InquirySnapshot, captcha: Option<String>) -> Self {
        Self {
            form,
            captcha,
            submission_id: Uuid::new_v4().to_string(),
        }
    }
}

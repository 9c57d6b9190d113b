//! Submission result envelope

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of one submission attempt, produced by the intake service and
/// folded into form state by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Whether the inquiry was accepted.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Per-field validation messages, keyed by wire field name. Absent on
    /// success and on non-validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl SubmissionResult {
    /// A successful acceptance.
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    /// A validation rejection with per-field messages.
    pub fn rejected(message: impl Into<String>, errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }

    /// A failure with no field detail (transport, internal error).
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

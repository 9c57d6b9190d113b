//! API Handlers

use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use solis_common::{InquiryPayload, SubmissionResult};

use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Accept one contact-form submission.
///
/// Always answers 200 with a [`SubmissionResult`] envelope; validation
/// failures are carried in the body, not the status code, so the form
/// client has a single result shape to fold.
pub async fn submit_inquiry(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<InquiryPayload>,
) -> Json<SubmissionResult> {
    Json(state.intake.submit(payload).await)
}

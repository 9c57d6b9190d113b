//! Intake service
//!
//! Validates a submission payload against the intake schema and hands
//! accepted inquiries to the sink. The service never errors toward the
//! client: every path folds into a [`SubmissionResult`].

use std::sync::Arc;

use chrono::Utc;
use solis_common::{InquiryPayload, SubmissionResult};
use uuid::Uuid;

use crate::schema;
use crate::sink::{AcceptedInquiry, InquirySink};

/// Top-level message on a validation rejection.
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fix the errors in the form";
/// Message on acceptance.
pub const ACCEPTED_MESSAGE: &str =
    "Thank you for your interest! Our team will contact you shortly.";
/// Message when the sink fails; carries no field detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Inquiry intake application service.
pub struct IntakeService {
    sink: Arc<dyn InquirySink>,
}

impl IntakeService {
    pub fn new(sink: Arc<dyn InquirySink>) -> Self {
        Self { sink }
    }

    /// Handle one submission attempt.
    pub async fn submit(&self, payload: InquiryPayload) -> SubmissionResult {
        if let Err(violations) = schema::validate(&payload) {
            return SubmissionResult::rejected(VALIDATION_FAILED_MESSAGE, violations.errors);
        }

        // Clients that predate submission ids get one minted here.
        let submission_id = if payload.submission_id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            payload.submission_id.clone()
        };

        let inquiry = AcceptedInquiry {
            submission_id,
            form: payload.form,
            received_at: Utc::now(),
        };

        match self.sink.accept(inquiry).await {
            Ok(receipt) => {
                tracing::info!(
                    submission_id = %receipt.submission_id,
                    duplicate = receipt.duplicate,
                    "inquiry accepted"
                );
                SubmissionResult::accepted(ACCEPTED_MESSAGE)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to accept inquiry");
                SubmissionResult::failed(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use solis_common::{FieldName, InquirySnapshot};

    use crate::sink::{AcceptReceipt, InMemoryInquirySink, SinkError};

    struct FailingSink;

    #[async_trait]
    impl InquirySink for FailingSink {
        async fn accept(&self, _inquiry: AcceptedInquiry) -> Result<AcceptReceipt, SinkError> {
            Err(SinkError::Unavailable("downstream offline".into()))
        }
    }

    fn valid_payload() -> InquiryPayload {
        let mut form = InquirySnapshot::new();
        form.set(FieldName::Name, "Asha Rao");
        form.set(FieldName::Phone, "5551234567");
        form.set(FieldName::Email, "asha@example.com");
        form.set(FieldName::Location, "Pune");
        form.set(FieldName::CustomerType, "industrial");
        form.set(FieldName::CompanyName, "Rao Textiles");
        form.set(FieldName::CompanyRating, "AA");
        form.set(FieldName::ContractLoad, "101-500");
        form.set(FieldName::RooftopArea, "1001-5000");
        form.set(FieldName::Message, "Interested in rooftop solar");
        InquiryPayload::new(form, Some("tok".into()))
    }

    #[tokio::test]
    async fn test_valid_payload_is_accepted_and_recorded() {
        let sink = Arc::new(InMemoryInquirySink::new());
        let service = IntakeService::new(sink.clone());

        let payload = valid_payload();
        let submission_id = payload.submission_id.clone();
        let result = service.submit(payload).await;

        assert!(result.success);
        assert_eq!(result.message, ACCEPTED_MESSAGE);
        assert_eq!(result.errors, None);
        assert_eq!(sink.len(), 1);
        assert!(sink.get(&submission_id).is_some());
    }

    #[tokio::test]
    async fn test_invalid_payload_is_rejected_with_grouped_errors() {
        let sink = Arc::new(InMemoryInquirySink::new());
        let service = IntakeService::new(sink.clone());

        let mut payload = valid_payload();
        payload.form.set(FieldName::Name, "");
        payload.form.set(FieldName::Email, "bad");
        let result = service.submit(payload).await;

        assert!(!result.success);
        assert_eq!(result.message, VALIDATION_FAILED_MESSAGE);
        let errors = result.errors.unwrap();
        assert_eq!(errors["name"], vec!["Name is required".to_string()]);
        assert_eq!(errors["email"], vec!["Invalid email address".to_string()]);
        // Nothing reaches the sink on a rejection.
        assert_eq!(sink.len(), 0);
    }

    #[tokio::test]
    async fn test_retried_submission_id_is_accepted_once() {
        let sink = Arc::new(InMemoryInquirySink::new());
        let service = IntakeService::new(sink.clone());

        let payload = valid_payload();
        let retry = payload.clone();

        assert!(service.submit(payload).await.success);
        assert!(service.submit(retry).await.success);
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_submission_id_gets_minted() {
        let sink = Arc::new(InMemoryInquirySink::new());
        let service = IntakeService::new(sink.clone());

        let mut payload = valid_payload();
        payload.submission_id = String::new();

        assert!(service.submit(payload).await.success);
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_sink_failure_maps_to_internal_error() {
        let service = IntakeService::new(Arc::new(FailingSink));

        let result = service.submit(valid_payload()).await;
        assert!(!result.success);
        assert_eq!(result.message, INTERNAL_ERROR_MESSAGE);
        assert_eq!(result.errors, None);
    }
}

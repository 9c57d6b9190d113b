//! Inquiry sink
//!
//! The durable-acceptance seam: once the service returns success, the
//! inquiry has been handed to a sink for downstream processing (database,
//! CRM, notification mail). Delivery is at-least-once; a repeated
//! submission id is accepted idempotently.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use solis_common::InquirySnapshot;

/// An inquiry the intake service has validated and accepted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AcceptedInquiry {
    /// Submission id, client-generated or minted at the boundary.
    pub submission_id: String,
    /// The validated field values.
    pub form: InquirySnapshot,
    /// When the intake service accepted the inquiry.
    pub received_at: DateTime<Utc>,
}

/// Receipt for an accepted inquiry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptReceipt {
    /// The id the inquiry was recorded under.
    pub submission_id: String,
    /// Whether this id had already been accepted.
    pub duplicate: bool,
}

/// Downstream acceptance port.
#[async_trait]
pub trait InquirySink: Send + Sync {
    /// Durably accept one inquiry.
    async fn accept(&self, inquiry: AcceptedInquiry) -> Result<AcceptReceipt, SinkError>;
}

/// Sink error type.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    /// The downstream store cannot be reached.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// In-memory sink, keyed by submission id.
#[derive(Default)]
pub struct InMemoryInquirySink {
    inquiries: DashMap<String, AcceptedInquiry>,
}

impl InMemoryInquirySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inquiries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inquiries.is_empty()
    }

    pub fn get(&self, submission_id: &str) -> Option<AcceptedInquiry> {
        self.inquiries.get(submission_id).map(|entry| entry.clone())
    }
}

#[async_trait]
impl InquirySink for InMemoryInquirySink {
    async fn accept(&self, inquiry: AcceptedInquiry) -> Result<AcceptReceipt, SinkError> {
        let submission_id = inquiry.submission_id.clone();

        use dashmap::mapref::entry::Entry;
        let duplicate = match self.inquiries.entry(submission_id.clone()) {
            Entry::Occupied(_) => true,
            Entry::Vacant(slot) => {
                slot.insert(inquiry);
                false
            }
        };

        Ok(AcceptReceipt {
            submission_id,
            duplicate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(id: &str) -> AcceptedInquiry {
        AcceptedInquiry {
            submission_id: id.to_string(),
            form: InquirySnapshot::new(),
            received_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_accept_records_inquiry() {
        let sink = InMemoryInquirySink::new();
        let receipt = sink.accept(inquiry("sub-1")).await.unwrap();

        assert!(!receipt.duplicate);
        assert_eq!(sink.len(), 1);
        assert!(sink.get("sub-1").is_some());
    }

    #[tokio::test]
    async fn test_repeated_submission_id_is_idempotent() {
        let sink = InMemoryInquirySink::new();
        sink.accept(inquiry("sub-1")).await.unwrap();
        let receipt = sink.accept(inquiry("sub-1")).await.unwrap();

        assert!(receipt.duplicate);
        assert_eq!(sink.len(), 1);
    }
}

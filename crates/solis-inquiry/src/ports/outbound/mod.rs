//! Outbound ports
//!
//! Hexagonal architecture: these are the interfaces that infrastructure
//! must implement — the durable snapshot store behind autosave, and the
//! gateway that carries a submission to the intake service.

use async_trait::async_trait;
use solis_common::{InquiryPayload, InquirySnapshot, SubmissionResult};

/// Durable key-value home for the in-progress inquiry snapshot.
///
/// Storage is advisory: a failing store must never block editing or
/// submission, so every error here is surfaced as status only.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist the snapshot, replacing any previous one.
    async fn save(&self, snapshot: &InquirySnapshot) -> Result<(), StoreError>;

    /// Load the saved snapshot, if any.
    async fn load(&self) -> Result<Option<InquirySnapshot>, StoreError>;

    /// Remove the saved snapshot.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Transport to the intake service.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Submit one payload and return the intake service's result.
    async fn submit(&self, payload: InquiryPayload) -> Result<SubmissionResult, GatewayError>;
}

/// Snapshot store error type.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// The underlying store cannot be used (e.g. disabled by privacy
    /// mode).
    Unavailable(String),
    /// The snapshot could not be encoded or decoded.
    Serialization(String),
}

impl std::error::Error for StoreError {}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "Storage unavailable: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

/// Submission gateway error type.
#[derive(Debug, Clone)]
pub enum GatewayError {
    /// The request never produced a response.
    Transport(String),
}

impl std::error::Error for GatewayError {}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

//! Solis Inquiry - Client-side form engine for the Solis contact form
//!
//! Drives one inquiry form session: field masking, per-field validation,
//! debounced autosave to a snapshot store, and the submission lifecycle
//! against the intake gateway.
//!
//! ## Architecture
//!
//! - **Domain Layer**: phone masking, field validation, the `InquiryForm`
//!   aggregate (the form state machine), domain events
//! - **Application Layer**: `FormSession` orchestration with debounced
//!   autosave and serialized, timeout-bounded submission
//! - **Ports Layer**: hexagonal interfaces for the snapshot store and the
//!   submission gateway
//! - **Infrastructure Layer**: in-memory storage adapters
//!
//! The UI layer owns widgets and rendering; everything here is
//! presentation-free and synchronously testable at the domain level.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for convenience
pub use application::{Debouncer, FormConfig, FormSession};
pub use domain::aggregates::{FormPhase, InquiryForm, SaveStatus, SubmitGate};
pub use domain::events::InquiryEvent;
pub use domain::validation::{validate, FieldVerdict};
pub use domain::value_objects::PhoneMask;
pub use ports::inbound::{FormUseCases, SessionError, SubmitOutcome};
pub use ports::outbound::{GatewayError, SnapshotStore, StoreError, SubmissionGateway};

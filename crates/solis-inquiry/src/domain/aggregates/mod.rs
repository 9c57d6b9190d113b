//! Aggregates

pub mod form;

pub use form::{FormPhase, InquiryForm, SaveStatus, SubmitGate};

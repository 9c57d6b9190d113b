//! Solis Common - Shared contracts for the Solis lead-capture platform
//!
//! Wire-level types shared by the inquiry form engine (`solis-inquiry`)
//! and the intake service (`solis-intake`):
//! - Field catalog for the ten-field inquiry form
//! - Inquiry snapshot and submission payload
//! - Submission result envelope
//!
//! Both sides of the boundary validate independently; this crate only
//! fixes the shapes and names they agree on.

#![warn(missing_docs)]

pub mod email;
pub mod fields;
pub mod payload;
pub mod result;
pub mod snapshot;

pub use email::is_email_shape;
pub use fields::{FieldName, SelectOption};
pub use payload::InquiryPayload;
pub use result::SubmissionResult;
pub use snapshot::InquirySnapshot;

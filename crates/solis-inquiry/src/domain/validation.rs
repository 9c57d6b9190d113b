//! Per-field validation
//!
//! Rules run in precedence order: required, then email shape, then phone
//! digit count. There is no cross-field validation.

use solis_common::{is_email_shape, FieldName};

use crate::domain::value_objects::PhoneMask;

/// Shown when the email shape check fails.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
/// Shown when the canonical phone is not exactly ten digits.
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";

/// Result of validating one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldVerdict {
    /// Whether the value passes every rule for the field.
    pub is_valid: bool,
    /// Error message, empty when valid.
    pub message: String,
}

impl FieldVerdict {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Required-field message for each field. Each field has its own copy.
pub fn required_message(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "Enter Your Name",
        FieldName::Phone => "Enter Your Phone Number",
        FieldName::Email => "Enter Your Official Email ID",
        FieldName::Location => "Enter Your Location",
        FieldName::CustomerType => "Select Customer Type",
        FieldName::CompanyName => "Enter Your Company Name",
        FieldName::CompanyRating => "Select Company Rating",
        FieldName::ContractLoad => "Select Contract load/Connected Load ( kVA/kW )",
        FieldName::RooftopArea => "Select Available Rooftop Area (Sq. ft)",
        FieldName::Message => "Enter Your Message",
    }
}

/// Validate one field value. Phone values may be in display-masked form;
/// the digit-count rule runs on the canonical form.
pub fn validate(field: FieldName, value: &str) -> FieldVerdict {
    if value.trim().is_empty() {
        return FieldVerdict::invalid(required_message(field));
    }

    match field {
        FieldName::Email if !is_email_shape(value) => {
            FieldVerdict::invalid(INVALID_EMAIL_MESSAGE)
        }
        FieldName::Phone if PhoneMask::strip(value).len() != PhoneMask::MAX_DIGITS => {
            FieldVerdict::invalid(INVALID_PHONE_MESSAGE)
        }
        _ => FieldVerdict::valid(),
    }
}

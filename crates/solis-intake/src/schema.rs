//! Server-side payload validation
//!
//! Independent of the client validator: the client is never trusted.
//! Rules here are coarser — every field is required and the email must
//! have a plausible shape; per-field custom copy stays client-side.

use std::collections::BTreeMap;

use solis_common::{is_email_shape, FieldName, InquiryPayload};

/// All schema violations for one payload, grouped by wire field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolations {
    /// Messages per field, in field order.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl std::error::Error for SchemaViolations {}

impl std::fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field(s) failed validation", self.errors.len())
    }
}

/// Generic server-side message for each field.
pub fn field_message(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "Name is required",
        FieldName::Phone => "Phone number is required",
        FieldName::Email => "Invalid email address",
        FieldName::Location => "Location is required",
        FieldName::CustomerType => "Customer type is required",
        FieldName::CompanyName => "Company name is required",
        FieldName::CompanyRating => "Company rating is required",
        FieldName::ContractLoad => "Contract load is required",
        FieldName::RooftopArea => "Rooftop area is required",
        FieldName::Message => "Message is required",
    }
}

/// Validate a submission payload against the intake schema.
///
/// The email rule subsumes the required rule (an empty email is just an
/// invalid address); every other field only needs to be non-empty. The
/// captcha token is not checked here — verification belongs to the
/// bot-check collaborator.
pub fn validate(payload: &InquiryPayload) -> Result<(), SchemaViolations> {
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, value) in payload.form.fields() {
        let violated = match field {
            FieldName::Email => !is_email_shape(value),
            _ => value.is_empty(),
        };
        if violated {
            errors
                .entry(field.as_str().to_string())
                .or_default()
                .push(field_message(field).to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaViolations { errors })
    }
}

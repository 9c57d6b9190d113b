//! Inquiry snapshot
//!
//! The complete set of current field values for one in-progress inquiry.
//! Keys are fixed and exhaustive; there is no way to carry an extra field.

use serde::{Deserialize, Serialize};

use crate::fields::FieldName;

/// Field values for one inquiry, keyed by [`FieldName`].
///
/// The phone value is stored in display-masked form; canonicalization to
/// digits happens when the submission payload is built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquirySnapshot {
    /// Contact name
    #[serde(default)]
    pub name: String,
    /// Phone number (masked)
    #[serde(default)]
    pub phone: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Site location
    #[serde(default)]
    pub location: String,
    /// Customer segment
    #[serde(default)]
    pub customer_type: String,
    /// Company name
    #[serde(default)]
    pub company_name: String,
    /// Company credit rating
    #[serde(default)]
    pub company_rating: String,
    /// Contract load band
    #[serde(default)]
    pub contract_load: String,
    /// Rooftop area band
    #[serde(default)]
    pub rooftop_area: String,
    /// Free-form message
    #[serde(default)]
    pub message: String,
}

impl InquirySnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Phone => &self.phone,
            FieldName::Email => &self.email,
            FieldName::Location => &self.location,
            FieldName::CustomerType => &self.customer_type,
            FieldName::CompanyName => &self.company_name,
            FieldName::CompanyRating => &self.company_rating,
            FieldName::ContractLoad => &self.contract_load,
            FieldName::RooftopArea => &self.rooftop_area,
            FieldName::Message => &self.message,
        }
    }

    /// Overwrite the value of `field`.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::Name => self.name = value,
            FieldName::Phone => self.phone = value,
            FieldName::Email => self.email = value,
            FieldName::Location => self.location = value,
            FieldName::CustomerType => self.customer_type = value,
            FieldName::CompanyName => self.company_name = value,
            FieldName::CompanyRating => self.company_rating = value,
            FieldName::ContractLoad => self.contract_load = value,
            FieldName::RooftopArea => self.rooftop_area = value,
            FieldName::Message => self.message = value,
        }
    }

    /// Iterate over all fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_empty())
    }
}

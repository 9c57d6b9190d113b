//! Inquiry field catalog
//!
//! The inquiry form has a fixed, exhaustive set of ten fields. Everything
//! that needs to enumerate them (snapshots, validators, the intake schema)
//! goes through this catalog so no side can invent extra keys.

use std::fmt;

/// One of the ten inquiry form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    /// Contact person's name
    Name,
    /// Phone number (display-masked on the client)
    Phone,
    /// Official email address
    Email,
    /// Site location
    Location,
    /// Customer segment (select)
    CustomerType,
    /// Company name
    CompanyName,
    /// Credit rating of the company (select)
    CompanyRating,
    /// Contract/connected load band (select)
    ContractLoad,
    /// Available rooftop area band (select)
    RooftopArea,
    /// Free-form message
    Message,
}

/// An option in one of the select fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

/// Customer segment options.
pub const CUSTOMER_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "industrial", label: "Industrial/Commercial" },
    SelectOption { value: "residential", label: "Residential" },
    SelectOption { value: "government", label: "Government" },
];

/// Company credit rating options.
pub const COMPANY_RATING_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "AAA", label: "AAA" },
    SelectOption { value: "AA", label: "AA" },
    SelectOption { value: "A", label: "A" },
    SelectOption { value: "BBB", label: "BBB" },
    SelectOption { value: "BB", label: "BB" },
    SelectOption { value: "B", label: "B" },
];

/// Contract/connected load bands.
pub const CONTRACT_LOAD_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "0-50", label: "0-50 kVA/kW" },
    SelectOption { value: "51-100", label: "51-100 kVA/kW" },
    SelectOption { value: "101-500", label: "101-500 kVA/kW" },
    SelectOption { value: "501-1000", label: "501-1000 kVA/kW" },
    SelectOption { value: "1000+", label: "1000+ kVA/kW" },
];

/// Rooftop area bands.
pub const ROOFTOP_AREA_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "0-1000", label: "0-1,000 sq. ft" },
    SelectOption { value: "1001-5000", label: "1,001-5,000 sq. ft" },
    SelectOption { value: "5001-10000", label: "5,001-10,000 sq. ft" },
    SelectOption { value: "10001-50000", label: "10,001-50,000 sq. ft" },
    SelectOption { value: "50000+", label: "50,000+ sq. ft" },
];

impl FieldName {
    /// All fields, in form order.
    pub const ALL: [FieldName; 10] = [
        FieldName::Name,
        FieldName::Phone,
        FieldName::Email,
        FieldName::Location,
        FieldName::CustomerType,
        FieldName::CompanyName,
        FieldName::CompanyRating,
        FieldName::ContractLoad,
        FieldName::RooftopArea,
        FieldName::Message,
    ];

    /// Wire name of the field, as used in JSON payloads and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Phone => "phone",
            FieldName::Email => "email",
            FieldName::Location => "location",
            FieldName::CustomerType => "customerType",
            FieldName::CompanyName => "companyName",
            FieldName::CompanyRating => "companyRating",
            FieldName::ContractLoad => "contractLoad",
            FieldName::RooftopArea => "rooftopArea",
            FieldName::Message => "message",
        }
    }

    /// Parse a wire name back into a field.
    pub fn parse(value: &str) -> Option<FieldName> {
        FieldName::ALL.iter().find(|f| f.as_str() == value).copied()
    }

    /// Display label / input placeholder.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Phone => "Phone Number",
            FieldName::Email => "Email ID",
            FieldName::Location => "Location",
            FieldName::CustomerType => "Customer Type",
            FieldName::CompanyName => "Company Name",
            FieldName::CompanyRating => "Company Rating",
            FieldName::ContractLoad => "Contract Load (kVA/kW)",
            FieldName::RooftopArea => "Rooftop Area (Sq. ft)",
            FieldName::Message => "Message",
        }
    }

    /// Options for select fields, `None` for free-form inputs.
    pub fn options(&self) -> Option<&'static [SelectOption]> {
        match self {
            FieldName::CustomerType => Some(CUSTOMER_TYPE_OPTIONS),
            FieldName::CompanyRating => Some(COMPANY_RATING_OPTIONS),
            FieldName::ContractLoad => Some(CONTRACT_LOAD_OPTIONS),
            FieldName::RooftopArea => Some(ROOFTOP_AREA_OPTIONS),
            _ => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

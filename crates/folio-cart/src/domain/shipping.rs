//! Shipping details and their field validation.

use serde::{Deserialize, Serialize};

/// Where and how to ship an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingDetails {
    /// Recipient name.
    pub name: String,
    /// First address line.
    pub line1: String,
    /// Second address line.
    pub line2: Option<String>,
    /// Third address line.
    pub line3: Option<String>,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Whether the order should be gift wrapped.
    pub gift_wrap: bool,
}

impl ShippingDetails {
    /// The optional address lines that actually contain text.
    pub fn extra_address_lines(&self) -> impl Iterator<Item = &str> {
        [self.line2.as_deref(), self.line3.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in the request body.
    pub field: &'static str,
    /// Message to show next to the field.
    pub message: &'static str,
}

/// Result of validating shipping details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShippingValidation {
    /// Every required field is filled in.
    Valid,
    /// At least one required field is blank.
    Invalid {
        /// Offending fields in declaration order.
        field_errors: Vec<FieldError>,
    },
}

impl ShippingValidation {
    /// Whether validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Field errors, empty when valid.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid { field_errors } => field_errors,
        }
    }
}

const REQUIRED_FIELDS: [(&str, &str); 4] = [
    ("name", "Please enter a name"),
    ("line1", "Please enter the first address line"),
    ("city", "Please enter a city name"),
    ("country", "Please enter a country name"),
];

/// Checks that name, first address line, city and country are non-blank.
#[must_use]
pub fn validate_shipping_details(details: &ShippingDetails) -> ShippingValidation {
    let values = [
        &details.name,
        &details.line1,
        &details.city,
        &details.country,
    ];

    let field_errors: Vec<FieldError> = REQUIRED_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(&(field, message), _)| FieldError { field, message })
        .collect();

    if field_errors.is_empty() {
        ShippingValidation::Valid
    } else {
        ShippingValidation::Invalid { field_errors }
    }
}

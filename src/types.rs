//! Core types for PII classification
//!
//! Field names are mapped once onto [`FieldKind`]; everything downstream
//! dispatches on the tag rather than comparing strings.

use serde::{Deserialize, Serialize};

/// A flat record: field name to JSON scalar, in input order
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Synthetic label emitted when `first_name` and `last_name` co-occur
pub const NAME_COMBINATION: &str = "name_combination";

/// The closed set of field semantics the engine recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Phone,
    Aadhar,
    Passport,
    Upi,
    Email,
    Name,
    FirstName,
    LastName,
    Address,
    IpAddress,
    DeviceId,
    Other,
}

impl FieldKind {
    /// Map a raw field name to its kind. Unknown names are `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "phone" => Self::Phone,
            "aadhar" => Self::Aadhar,
            "passport" => Self::Passport,
            "upi_id" => Self::Upi,
            "email" => Self::Email,
            "name" => Self::Name,
            "first_name" => Self::FirstName,
            "last_name" => Self::LastName,
            "address" => Self::Address,
            "ip_address" => Self::IpAddress,
            "device_id" => Self::DeviceId,
            _ => Self::Other,
        }
    }

    /// Canonical field name for this kind (`None` for `Other`)
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            Self::Phone => Some("phone"),
            Self::Aadhar => Some("aadhar"),
            Self::Passport => Some("passport"),
            Self::Upi => Some("upi_id"),
            Self::Email => Some("email"),
            Self::Name => Some("name"),
            Self::FirstName => Some("first_name"),
            Self::LastName => Some("last_name"),
            Self::Address => Some("address"),
            Self::IpAddress => Some("ip_address"),
            Self::DeviceId => Some("device_id"),
            Self::Other => None,
        }
    }

    /// A validated value of this kind alone marks the record as PII
    pub fn is_standalone(&self) -> bool {
        matches!(self, Self::Phone | Self::Aadhar | Self::Passport | Self::Upi)
    }

    /// Weak evidence: needs a second combinatorial element to count
    pub fn is_combinatorial(&self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::Email
                | Self::Address
                | Self::IpAddress
                | Self::DeviceId
                | Self::FirstName
                | Self::LastName
        )
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name().unwrap_or("other"))
    }
}

/// Outcome of classifying one record
///
/// `fields` is a list, not a set: standalone labels come first in record
/// order, followed by combinatorial labels in record order. Nothing is
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the record contains PII
    pub is_pii: bool,

    /// Implicated field labels (field names or `name_combination`)
    pub fields: Vec<String>,
}

impl Verdict {
    /// Whether `field` must be masked under this verdict
    ///
    /// `first_name` and `last_name` are implicated through the synthetic
    /// `name_combination` label.
    pub fn implicates(&self, field: &str) -> bool {
        is_implicated(field, &self.fields)
    }
}

pub(crate) fn is_implicated(field: &str, implicated: &[String]) -> bool {
    if implicated.iter().any(|label| label == field) {
        return true;
    }
    matches!(
        FieldKind::from_name(field),
        FieldKind::FirstName | FieldKind::LastName
    ) && implicated.iter().any(|label| label == NAME_COMBINATION)
}

//! The platform contact record boundary
//!
//! These types model what the device's contact framework hands over: labeled
//! value collections, a structured name, and an image resource reference.
//! The record never carries pixel data here, only a resource identifier.

use serde::{Deserialize, Serialize};

/// Structured name components of a system record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemName {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub given: Option<String>,
    #[serde(default)]
    pub middle: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// A labeled single-value entry (phone number or email address)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    /// Platform label; may be absent for unlabeled entries
    #[serde(default)]
    pub label: Option<String>,
    /// The stored value
    pub value: String,
}

impl LabeledValue {
    /// Create a labeled entry
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }

    /// Create an unlabeled entry
    pub fn unlabeled(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }
}

/// A labeled structured postal address on a system record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAddress {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub pobox: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Reference to an image resource held by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemImage {
    /// Resource identifier for the image data
    pub resource_id: String,
    /// Content type, when the platform reports one
    #[serde(default)]
    pub content_type: Option<String>,
}

/// A platform contact record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemContact {
    /// Structured name components
    #[serde(default)]
    pub name: SystemName,
    /// Organization name
    #[serde(default)]
    pub organization: Option<String>,
    /// Labeled phone numbers
    #[serde(default)]
    pub phones: Vec<LabeledValue>,
    /// Labeled email addresses
    #[serde(default)]
    pub emails: Vec<LabeledValue>,
    /// Labeled postal addresses
    #[serde(default)]
    pub addresses: Vec<SystemAddress>,
    /// Contact photo, when the record has one
    #[serde(default)]
    pub image: Option<SystemImage>,
}

//! Typed, labeled contact field values

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneCategory {
    Home,
    Mobile,
    Work,
    /// User-defined category; the label travels with the field
    Custom(String),
}

/// Classification of an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailCategory {
    Home,
    Mobile,
    Work,
    Custom(String),
}

/// Classification of a postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressCategory {
    Home,
    Work,
    Custom(String),
}

impl Default for AddressCategory {
    fn default() -> Self {
        Self::Home
    }
}

impl PhoneCategory {
    /// Human-readable label for this category
    pub fn display_label(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::Mobile => "Mobile",
            Self::Work => "Work",
            Self::Custom(label) => label,
        }
    }

    /// A custom category must carry a non-empty label
    pub fn is_category_valid(&self) -> bool {
        match self {
            Self::Custom(label) => !label.trim().is_empty(),
            _ => true,
        }
    }

    /// Same category with a trimmed custom label
    pub fn trimmed(&self) -> Self {
        match self {
            Self::Custom(label) => Self::Custom(label.trim().to_string()),
            other => other.clone(),
        }
    }
}

impl EmailCategory {
    /// Human-readable label for this category
    pub fn display_label(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::Mobile => "Mobile",
            Self::Work => "Work",
            Self::Custom(label) => label,
        }
    }

    /// A custom category must carry a non-empty label
    pub fn is_category_valid(&self) -> bool {
        match self {
            Self::Custom(label) => !label.trim().is_empty(),
            _ => true,
        }
    }

    /// Same category with a trimmed custom label
    pub fn trimmed(&self) -> Self {
        match self {
            Self::Custom(label) => Self::Custom(label.trim().to_string()),
            other => other.clone(),
        }
    }
}

impl AddressCategory {
    /// Human-readable label for this category
    pub fn display_label(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Custom(label) => label,
        }
    }

    /// A custom category must carry a non-empty label
    pub fn is_category_valid(&self) -> bool {
        match self {
            Self::Custom(label) => !label.trim().is_empty(),
            _ => true,
        }
    }

    /// Same category with a trimmed custom label
    pub fn trimmed(&self) -> Self {
        match self {
            Self::Custom(label) => Self::Custom(label.trim().to_string()),
            other => other.clone(),
        }
    }
}

/// Shared capability set of all field value types
pub trait ContactField: fmt::Debug {
    /// Whether the field is structurally usable
    fn is_field_valid(&self) -> bool;

    /// Human-readable label for the field's category
    fn display_label(&self) -> &str;
}

/// A phone number attached to a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Classification of this number
    pub category: PhoneCategory,
    /// The number as entered; dialability is the phone library's concern
    pub number: String,
}

impl Phone {
    /// Create a phone field, rejecting empty numbers and empty custom labels
    pub fn new(category: PhoneCategory, number: impl Into<String>) -> Result<Self> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(Error::EmptyValue("phone"));
        }
        if !category.is_category_valid() {
            return Err(Error::MissingCustomLabel("phone"));
        }
        Ok(Self { category, number })
    }
}

impl ContactField for Phone {
    fn is_field_valid(&self) -> bool {
        !self.number.trim().is_empty() && self.category.is_category_valid()
    }

    fn display_label(&self) -> &str {
        self.category.display_label()
    }
}

/// An email address attached to a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Classification of this address
    pub category: EmailCategory,
    /// The address as entered
    pub address: String,
}

impl Email {
    /// Create an email field, rejecting empty addresses and empty custom labels
    pub fn new(category: EmailCategory, address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(Error::EmptyValue("email"));
        }
        if !category.is_category_valid() {
            return Err(Error::MissingCustomLabel("email"));
        }
        Ok(Self { category, address })
    }
}

impl ContactField for Email {
    fn is_field_valid(&self) -> bool {
        !self.address.trim().is_empty() && self.category.is_category_valid()
    }

    fn display_label(&self) -> &str {
        self.category.display_label()
    }
}

/// A structured postal address attached to a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    /// Classification of this address
    pub category: AddressCategory,
    #[serde(default)]
    pub street: Option<String>,
    /// Post office box
    #[serde(default)]
    pub pobox: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// State or province
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Create an empty address with the given category, rejecting empty custom labels
    pub fn new(category: AddressCategory) -> Result<Self> {
        if !category.is_category_valid() {
            return Err(Error::MissingCustomLabel("address"));
        }
        Ok(Self {
            category,
            ..Default::default()
        })
    }

    /// Set the street component
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    /// Set the city component
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the region component
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the postal code component
    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    /// Set the country component
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Whether any component carries a non-whitespace value
    pub fn has_content(&self) -> bool {
        [
            &self.street,
            &self.pobox,
            &self.neighborhood,
            &self.city,
            &self.region,
            &self.postcode,
            &self.country,
        ]
        .into_iter()
        .any(|c| c.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

impl ContactField for Address {
    fn is_field_valid(&self) -> bool {
        self.has_content() && self.category.is_category_valid()
    }

    fn display_label(&self) -> &str {
        self.category.display_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_construction() {
        let phone = Phone::new(PhoneCategory::Mobile, "+15550100").unwrap();
        assert_eq!(phone.display_label(), "Mobile");
        assert!(phone.is_field_valid());

        assert!(Phone::new(PhoneCategory::Home, "   ").is_err());
        assert!(Phone::new(PhoneCategory::Custom("".to_string()), "+15550100").is_err());

        let assistant = Phone::new(PhoneCategory::Custom("Assistant".to_string()), "+15550101");
        assert_eq!(assistant.unwrap().display_label(), "Assistant");
    }

    #[test]
    fn test_email_construction() {
        let email = Email::new(EmailCategory::Work, "jane@example.com").unwrap();
        assert_eq!(email.display_label(), "Work");
        assert!(email.is_field_valid());

        assert!(Email::new(EmailCategory::Work, "").is_err());
        assert!(Email::new(EmailCategory::Custom("  ".to_string()), "jane@example.com").is_err());
    }

    #[test]
    fn test_custom_label_validity() {
        // A decoded field may carry an empty custom label; it must report invalid
        let phone = Phone {
            category: PhoneCategory::Custom(String::new()),
            number: "+15550100".to_string(),
        };
        assert!(!phone.is_field_valid());

        let email = Email {
            category: EmailCategory::Custom("Archive".to_string()),
            address: "old@example.com".to_string(),
        };
        assert!(email.is_field_valid());
    }

    #[test]
    fn test_address_content() {
        let empty = Address::new(AddressCategory::Home).unwrap();
        assert!(!empty.has_content());
        assert!(!empty.is_field_valid());

        let addr = Address::new(AddressCategory::Work)
            .unwrap()
            .with_street("1 Main St")
            .with_city("Springfield");
        assert!(addr.has_content());
        assert!(addr.is_field_valid());

        let blank_components = Address {
            category: AddressCategory::Home,
            street: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!blank_components.has_content());
    }
}

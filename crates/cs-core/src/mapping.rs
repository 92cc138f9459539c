//! Shared category/label mapping
//!
//! Every codec infers categories from the same recognized-label table and
//! emits the same canonical labels. The table is deliberately small: `home`,
//! `mobile`/`cell`, `work` for phones and emails, `home`/`work` for
//! addresses, matched case-insensitively after trimming. Anything else is
//! preserved verbatim as a custom label so user-entered labels survive the
//! round trip.

use crate::error::{Error, Result};
use crate::fields::{AddressCategory, EmailCategory, PhoneCategory};

/// Infer a phone category from an external label
pub fn phone_category_for_label(label: &str) -> PhoneCategory {
    match label.trim().to_ascii_lowercase().as_str() {
        "home" => PhoneCategory::Home,
        "mobile" | "cell" => PhoneCategory::Mobile,
        "work" => PhoneCategory::Work,
        _ => PhoneCategory::Custom(label.to_string()),
    }
}

/// Infer an email category from an external label
pub fn email_category_for_label(label: &str) -> EmailCategory {
    match label.trim().to_ascii_lowercase().as_str() {
        "home" => EmailCategory::Home,
        "mobile" | "cell" => EmailCategory::Mobile,
        "work" => EmailCategory::Work,
        _ => EmailCategory::Custom(label.to_string()),
    }
}

/// Infer an address category from an external label
pub fn address_category_for_label(label: &str) -> AddressCategory {
    match label.trim().to_ascii_lowercase().as_str() {
        "home" => AddressCategory::Home,
        "work" => AddressCategory::Work,
        _ => AddressCategory::Custom(label.to_string()),
    }
}

/// Infer a phone category from an optional label; a missing label has no
/// standard reading and decodes to an unlabeled custom field
pub fn phone_category_for_opt_label(label: Option<&str>) -> PhoneCategory {
    match label {
        Some(l) => phone_category_for_label(l),
        None => PhoneCategory::Custom(String::new()),
    }
}

/// Infer an email category from an optional label
pub fn email_category_for_opt_label(label: Option<&str>) -> EmailCategory {
    match label {
        Some(l) => email_category_for_label(l),
        None => EmailCategory::Custom(String::new()),
    }
}

/// Infer an address category from an optional label
pub fn address_category_for_opt_label(label: Option<&str>) -> AddressCategory {
    match label {
        Some(l) => address_category_for_label(l),
        None => AddressCategory::Custom(String::new()),
    }
}

/// Canonical label string for a phone category. Custom categories must
/// supply a non-empty label; string-label formats cannot express an
/// unlabeled custom field.
pub fn label_for_phone_category(category: &PhoneCategory) -> Result<&str> {
    match category {
        PhoneCategory::Home => Ok("home"),
        PhoneCategory::Mobile => Ok("mobile"),
        PhoneCategory::Work => Ok("work"),
        PhoneCategory::Custom(label) if !label.trim().is_empty() => Ok(label),
        PhoneCategory::Custom(_) => Err(Error::MissingCustomLabel("phone")),
    }
}

/// Canonical label string for an email category
pub fn label_for_email_category(category: &EmailCategory) -> Result<&str> {
    match category {
        EmailCategory::Home => Ok("home"),
        EmailCategory::Mobile => Ok("mobile"),
        EmailCategory::Work => Ok("work"),
        EmailCategory::Custom(label) if !label.trim().is_empty() => Ok(label),
        EmailCategory::Custom(_) => Err(Error::MissingCustomLabel("email")),
    }
}

/// Canonical label string for an address category
pub fn label_for_address_category(category: &AddressCategory) -> Result<&str> {
    match category {
        AddressCategory::Home => Ok("home"),
        AddressCategory::Work => Ok("work"),
        AddressCategory::Custom(label) if !label.trim().is_empty() => Ok(label),
        AddressCategory::Custom(_) => Err(Error::MissingCustomLabel("address")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_labels_case_insensitive() {
        assert_eq!(phone_category_for_label("Mobile"), PhoneCategory::Mobile);
        assert_eq!(phone_category_for_label("CELL"), PhoneCategory::Mobile);
        assert_eq!(phone_category_for_label(" home "), PhoneCategory::Home);
        assert_eq!(email_category_for_label("Work"), EmailCategory::Work);
        assert_eq!(address_category_for_label("HOME"), AddressCategory::Home);
    }

    #[test]
    fn test_unrecognized_label_preserved_verbatim() {
        assert_eq!(
            phone_category_for_label("Assistant"),
            PhoneCategory::Custom("Assistant".to_string())
        );
        // addresses do not recognize "mobile"
        assert_eq!(
            address_category_for_label("mobile"),
            AddressCategory::Custom("mobile".to_string())
        );
    }

    #[test]
    fn test_missing_label_is_unlabeled_custom() {
        assert_eq!(
            phone_category_for_opt_label(None),
            PhoneCategory::Custom(String::new())
        );
    }

    #[test]
    fn test_canonical_labels_round_trip() {
        for category in [PhoneCategory::Home, PhoneCategory::Mobile, PhoneCategory::Work] {
            let label = label_for_phone_category(&category).unwrap();
            assert_eq!(phone_category_for_label(label), category);
        }
    }

    #[test]
    fn test_empty_custom_label_fails_encode() {
        assert!(label_for_phone_category(&PhoneCategory::Custom("  ".to_string())).is_err());
        assert!(label_for_email_category(&EmailCategory::Custom(String::new())).is_err());
        assert!(label_for_address_category(&AddressCategory::Custom(String::new())).is_err());
    }
}

//! The contact aggregate shared by every codec

use crate::avatar::AvatarRef;
use crate::fields::{Address, Email, Phone};
use serde::{Deserialize, Serialize};

/// Display name used when a contact has no name and no organization
pub const UNKNOWN_CONTACT: &str = "Unknown Contact";

/// A shareable contact card
///
/// Field order is preserved through every codec; a changed contact is a new
/// instance. The display name is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Contact {
    /// Name prefix (e.g. "Dr.")
    #[serde(default)]
    pub name_prefix: Option<String>,
    /// Given name
    #[serde(default)]
    pub given_name: Option<String>,
    /// Middle name
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub family_name: Option<String>,
    /// Name suffix (e.g. "Jr.")
    #[serde(default)]
    pub name_suffix: Option<String>,
    /// Organization name
    #[serde(default)]
    pub organization: Option<String>,
    /// Phone numbers, in source order
    #[serde(default)]
    pub phones: Vec<Phone>,
    /// Email addresses, in source order
    #[serde(default)]
    pub emails: Vec<Email>,
    /// Postal addresses, in source order
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Handle to the avatar image; the attachment subsystem owns the bytes
    #[serde(default)]
    pub avatar: Option<AvatarRef>,
    /// True when the avatar came from a messaging profile picture.
    /// Profile avatars are never written into a device contact store.
    #[serde(default)]
    pub is_profile_avatar: bool,
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn normalize_component(value: &Option<String>) -> Option<String> {
    trimmed(value).map(str::to_string)
}

impl Contact {
    /// Create an empty contact
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name prefix
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = Some(prefix.into());
        self
    }

    /// Set the given name
    pub fn with_given_name(mut self, given: impl Into<String>) -> Self {
        self.given_name = Some(given.into());
        self
    }

    /// Set the middle name
    pub fn with_middle_name(mut self, middle: impl Into<String>) -> Self {
        self.middle_name = Some(middle.into());
        self
    }

    /// Set the family name
    pub fn with_family_name(mut self, family: impl Into<String>) -> Self {
        self.family_name = Some(family.into());
        self
    }

    /// Set the name suffix
    pub fn with_name_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.name_suffix = Some(suffix.into());
        self
    }

    /// Set the organization name
    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Append a phone number
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    /// Append an email address
    pub fn with_email(mut self, email: Email) -> Self {
        self.emails.push(email);
        self
    }

    /// Append a postal address
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    /// Set the avatar handle
    pub fn with_avatar(mut self, avatar: AvatarRef, is_profile: bool) -> Self {
        self.avatar = Some(avatar);
        self.is_profile_avatar = is_profile;
        self
    }

    /// Derived display name: name components joined in order, falling back to
    /// the organization, then to a fixed placeholder
    pub fn display_name(&self) -> String {
        let joined = [
            &self.name_prefix,
            &self.given_name,
            &self.middle_name,
            &self.family_name,
            &self.name_suffix,
        ]
        .into_iter()
        .filter_map(trimmed)
        .collect::<Vec<_>>()
        .join(" ");
        if !joined.is_empty() {
            return joined;
        }
        if let Some(org) = trimmed(&self.organization) {
            return org.to_string();
        }
        UNKNOWN_CONTACT.to_string()
    }

    /// Whether the contact has a non-empty name or organization
    pub fn has_identity(&self) -> bool {
        [
            &self.name_prefix,
            &self.given_name,
            &self.middle_name,
            &self.family_name,
            &self.name_suffix,
            &self.organization,
        ]
        .into_iter()
        .any(|c| trimmed(c).is_some())
    }

    /// Whether the contact carries any information at all.
    /// Decoders return nothing for contacts without content.
    pub fn has_content(&self) -> bool {
        self.has_identity()
            || !self.phones.is_empty()
            || !self.emails.is_empty()
            || !self.addresses.is_empty()
    }

    /// Whether the contact is a usable shareable unit: it names someone and
    /// every field satisfies its category/label contract
    pub fn is_valid(&self) -> bool {
        self.has_identity()
            && self.phones.iter().all(|p| p.category.is_category_valid())
            && self.emails.iter().all(|e| e.category.is_category_valid())
            && self
                .addresses
                .iter()
                .all(|a| a.category.is_category_valid())
    }

    /// Canonical form: every string trimmed, unusable entries dropped.
    ///
    /// Idempotent: normalizing a normalized contact yields an equal contact.
    pub fn normalized(&self) -> Contact {
        let phones = self
            .phones
            .iter()
            .filter(|p| !p.number.trim().is_empty())
            .map(|p| Phone {
                category: p.category.trimmed(),
                number: p.number.trim().to_string(),
            })
            .collect();
        let emails = self
            .emails
            .iter()
            .filter(|e| !e.address.trim().is_empty())
            .map(|e| Email {
                category: e.category.trimmed(),
                address: e.address.trim().to_string(),
            })
            .collect();
        let addresses = self
            .addresses
            .iter()
            .filter(|a| a.has_content())
            .map(|a| Address {
                category: a.category.trimmed(),
                street: normalize_component(&a.street),
                pobox: normalize_component(&a.pobox),
                neighborhood: normalize_component(&a.neighborhood),
                city: normalize_component(&a.city),
                region: normalize_component(&a.region),
                postcode: normalize_component(&a.postcode),
                country: normalize_component(&a.country),
            })
            .collect();

        Contact {
            name_prefix: normalize_component(&self.name_prefix),
            given_name: normalize_component(&self.given_name),
            middle_name: normalize_component(&self.middle_name),
            family_name: normalize_component(&self.family_name),
            name_suffix: normalize_component(&self.name_suffix),
            organization: normalize_component(&self.organization),
            phones,
            emails,
            addresses,
            avatar: self.avatar.clone(),
            is_profile_avatar: self.is_profile_avatar,
        }
    }

    /// New contact with the five name components replaced. Field lists carry
    /// over; organization and avatar are discarded, so a shared card can be
    /// split into a fresh entity.
    pub fn new_with_name(
        &self,
        prefix: Option<String>,
        given: Option<String>,
        middle: Option<String>,
        family: Option<String>,
        suffix: Option<String>,
    ) -> Contact {
        Contact {
            name_prefix: prefix,
            given_name: given,
            middle_name: middle,
            family_name: family,
            name_suffix: suffix,
            organization: None,
            phones: self.phones.clone(),
            emails: self.emails.clone(),
            addresses: self.addresses.clone(),
            avatar: None,
            is_profile_avatar: false,
        }
    }

    /// Copy of this contact with the five name components replaced;
    /// organization, field lists, and avatar carry over unchanged.
    pub fn copy_with_name(
        &self,
        prefix: Option<String>,
        given: Option<String>,
        middle: Option<String>,
        family: Option<String>,
        suffix: Option<String>,
    ) -> Contact {
        Contact {
            name_prefix: prefix,
            given_name: given,
            middle_name: middle,
            family_name: family,
            name_suffix: suffix,
            ..self.clone()
        }
    }

    /// One-line description for log output
    pub fn summary(&self) -> String {
        format!(
            "{} ({} phones, {} emails, {} addresses{})",
            self.display_name(),
            self.phones.len(),
            self.emails.len(),
            self.addresses.len(),
            if self.avatar.is_some() {
                ", avatar"
            } else {
                ""
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{AddressCategory, EmailCategory, PhoneCategory};
    use proptest::prelude::*;

    fn jane() -> Contact {
        Contact::new()
            .with_given_name("Jane")
            .with_family_name("Doe")
    }

    #[test]
    fn test_display_name_from_name_components() {
        assert_eq!(jane().display_name(), "Jane Doe");

        let full = Contact::new()
            .with_name_prefix("Dr.")
            .with_given_name("Jane")
            .with_middle_name("Q")
            .with_family_name("Doe")
            .with_name_suffix("Jr.");
        assert_eq!(full.display_name(), "Dr. Jane Q Doe Jr.");
    }

    #[test]
    fn test_display_name_falls_back_to_organization() {
        let org_only = Contact::new().with_organization("Acme Corp");
        assert_eq!(org_only.display_name(), "Acme Corp");
    }

    #[test]
    fn test_display_name_placeholder() {
        assert_eq!(Contact::new().display_name(), UNKNOWN_CONTACT);

        let whitespace = Contact::new().with_given_name("   ");
        assert_eq!(whitespace.display_name(), UNKNOWN_CONTACT);
    }

    #[test]
    fn test_validity() {
        assert!(jane().is_valid());
        assert!(!Contact::new().is_valid());

        let bad_field = jane().with_phone(Phone {
            category: PhoneCategory::Custom(String::new()),
            number: "+15550100".to_string(),
        });
        assert!(!bad_field.is_valid());

        let custom_ok = jane().with_phone(Phone {
            category: PhoneCategory::Custom("Assistant".to_string()),
            number: "+15550100".to_string(),
        });
        assert!(custom_ok.is_valid());
    }

    #[test]
    fn test_normalize_trims_and_drops() {
        let contact = Contact::new()
            .with_given_name("  Jane ")
            .with_family_name("Doe")
            .with_phone(Phone {
                category: PhoneCategory::Home,
                number: " +15550100 ".to_string(),
            })
            .with_phone(Phone {
                category: PhoneCategory::Work,
                number: "   ".to_string(),
            })
            .with_email(Email {
                category: EmailCategory::Home,
                address: "jane@example.com ".to_string(),
            })
            .with_address(Address {
                category: AddressCategory::Home,
                street: Some("  ".to_string()),
                ..Default::default()
            });

        let normalized = contact.normalized();
        assert_eq!(normalized.given_name.as_deref(), Some("Jane"));
        assert_eq!(normalized.phones.len(), 1);
        assert_eq!(normalized.phones[0].number, "+15550100");
        assert_eq!(normalized.emails[0].address, "jane@example.com");
        assert!(normalized.addresses.is_empty());
    }

    #[test]
    fn test_normalize_idempotent() {
        let contact = Contact::new()
            .with_given_name(" Jane ")
            .with_organization("  Acme  ")
            .with_phone(Phone {
                category: PhoneCategory::Custom(" Assistant ".to_string()),
                number: " 555 ".to_string(),
            });
        let once = contact.normalized();
        assert_eq!(once, once.normalized());
    }

    #[test]
    fn test_new_with_name_discards_context() {
        let shared = jane()
            .with_organization("Acme Corp")
            .with_phone(Phone {
                category: PhoneCategory::Mobile,
                number: "+15550100".to_string(),
            })
            .with_avatar(AvatarRef::new("avatar-1"), true);

        let fresh = shared.new_with_name(None, Some("Janet".to_string()), None, None, None);
        assert_eq!(fresh.display_name(), "Janet");
        assert!(fresh.organization.is_none());
        assert!(fresh.avatar.is_none());
        assert!(!fresh.is_profile_avatar);
        assert_eq!(fresh.phones, shared.phones);
    }

    #[test]
    fn test_copy_with_name_preserves_context() {
        let shared = jane()
            .with_organization("Acme Corp")
            .with_avatar(AvatarRef::new("avatar-1"), true);

        let renamed = shared.copy_with_name(
            None,
            Some("Janet".to_string()),
            None,
            Some("Doe".to_string()),
            None,
        );
        assert_eq!(renamed.display_name(), "Janet Doe");
        assert_eq!(renamed.organization.as_deref(), Some("Acme Corp"));
        assert!(renamed.avatar.is_some());
        assert!(renamed.is_profile_avatar);
    }

    prop_compose! {
        fn arb_opt_string()(s in proptest::option::of("[ a-zA-Z]{0,12}")) -> Option<String> {
            s
        }
    }

    fn arb_phone() -> impl Strategy<Value = Phone> {
        (
            prop_oneof![
                Just(PhoneCategory::Home),
                Just(PhoneCategory::Mobile),
                Just(PhoneCategory::Work),
                "[ a-zA-Z]{0,8}".prop_map(PhoneCategory::Custom),
            ],
            "[ 0-9+]{0,12}",
        )
            .prop_map(|(category, number)| Phone { category, number })
    }

    fn arb_contact() -> impl Strategy<Value = Contact> {
        (
            arb_opt_string(),
            arb_opt_string(),
            arb_opt_string(),
            proptest::collection::vec(arb_phone(), 0..4),
        )
            .prop_map(|(given, family, org, phones)| Contact {
                given_name: given,
                family_name: family,
                organization: org,
                phones,
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(contact in arb_contact()) {
            let once = contact.normalized();
            prop_assert_eq!(once.clone(), once.normalized());
        }

        #[test]
        fn prop_display_name_never_empty(contact in arb_contact()) {
            prop_assert!(!contact.display_name().is_empty());
        }
    }
}

//! System record conversion

use crate::record::{LabeledValue, SystemAddress, SystemContact, SystemImage, SystemName};
use cs_core::mapping::{
    address_category_for_opt_label, email_category_for_opt_label, label_for_address_category,
    label_for_email_category, label_for_phone_category, phone_category_for_opt_label,
};
use cs_core::{Address, AvatarRef, Contact, Email, Phone, SharePolicy};
use tracing::{debug, warn};

/// Decode a platform contact record.
///
/// Labels map to standard categories via the shared table; unrecognized
/// labels are kept verbatim as custom labels. The record's photo is imported
/// only when the policy allows it, and never counts as a profile avatar.
/// Returns `None` for a record with no usable name, no organization, and no
/// fields.
pub fn decode_system_contact(record: &SystemContact, policy: &SharePolicy) -> Option<Contact> {
    let phones = record
        .phones
        .iter()
        .map(|entry| Phone {
            category: phone_category_for_opt_label(entry.label.as_deref()),
            number: entry.value.clone(),
        })
        .collect();
    let emails = record
        .emails
        .iter()
        .map(|entry| Email {
            category: email_category_for_opt_label(entry.label.as_deref()),
            address: entry.value.clone(),
        })
        .collect();
    let addresses = record
        .addresses
        .iter()
        .map(|entry| Address {
            category: address_category_for_opt_label(entry.label.as_deref()),
            street: entry.street.clone(),
            pobox: entry.pobox.clone(),
            neighborhood: entry.neighborhood.clone(),
            city: entry.city.clone(),
            region: entry.region.clone(),
            postcode: entry.postcode.clone(),
            country: entry.country.clone(),
        })
        .collect();

    let avatar = match &record.image {
        Some(image) if policy.import_system_avatars => {
            let handle = AvatarRef {
                id: image.resource_id.clone(),
                content_type: image.content_type.clone(),
            };
            if handle.is_image() {
                Some(handle)
            } else {
                warn!(
                    "System record image has non-image content type {:?}, skipping",
                    image.content_type
                );
                None
            }
        }
        _ => None,
    };

    let contact = Contact {
        name_prefix: record.name.prefix.clone(),
        given_name: record.name.given.clone(),
        middle_name: record.name.middle.clone(),
        family_name: record.name.family.clone(),
        name_suffix: record.name.suffix.clone(),
        organization: record.organization.clone(),
        phones,
        emails,
        addresses,
        avatar,
        // system record photos are device photos, never profile pictures
        is_profile_avatar: false,
    };

    if !contact.has_content() {
        debug!("System record carries no contact information");
        return None;
    }

    debug!("Decoded system record: {}", contact.summary());
    Some(contact)
}

/// Encode a contact into a platform record for the device contact store.
///
/// Returns `None` when the contact lacks a name and organization. Profile
/// avatars are silently omitted; they must never reach the device store.
/// Custom fields without a label cannot be expressed as a labeled value and
/// are dropped.
pub fn encode_system_contact(contact: &Contact) -> Option<SystemContact> {
    if !contact.has_identity() {
        debug!("Refusing to encode contact with no name or organization");
        return None;
    }
    let contact = contact.normalized();

    let phones = contact
        .phones
        .iter()
        .filter_map(|phone| match label_for_phone_category(&phone.category) {
            Ok(label) => Some(LabeledValue::new(label, &phone.number)),
            Err(e) => {
                warn!("Dropping phone from system record: {}", e);
                None
            }
        })
        .collect();
    let emails = contact
        .emails
        .iter()
        .filter_map(|email| match label_for_email_category(&email.category) {
            Ok(label) => Some(LabeledValue::new(label, &email.address)),
            Err(e) => {
                warn!("Dropping email from system record: {}", e);
                None
            }
        })
        .collect();
    let addresses = contact
        .addresses
        .iter()
        .filter_map(
            |address| match label_for_address_category(&address.category) {
                Ok(label) => Some(SystemAddress {
                    label: Some(label.to_string()),
                    street: address.street.clone(),
                    pobox: address.pobox.clone(),
                    neighborhood: address.neighborhood.clone(),
                    city: address.city.clone(),
                    region: address.region.clone(),
                    postcode: address.postcode.clone(),
                    country: address.country.clone(),
                }),
                Err(e) => {
                    warn!("Dropping address from system record: {}", e);
                    None
                }
            },
        )
        .collect();

    let image = match &contact.avatar {
        Some(_) if contact.is_profile_avatar => {
            debug!("Omitting profile avatar from system record");
            None
        }
        Some(avatar) => Some(SystemImage {
            resource_id: avatar.id.clone(),
            content_type: avatar.content_type.clone(),
        }),
        None => None,
    };

    Some(SystemContact {
        name: SystemName {
            prefix: contact.name_prefix.clone(),
            given: contact.given_name.clone(),
            middle: contact.middle_name.clone(),
            family: contact.family_name.clone(),
            suffix: contact.name_suffix.clone(),
        },
        organization: contact.organization.clone(),
        phones,
        emails,
        addresses,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::{AddressCategory, EmailCategory, PhoneCategory};

    fn policy() -> SharePolicy {
        SharePolicy::default()
    }

    #[test]
    fn test_decode_label_inference() {
        let record = SystemContact {
            name: SystemName {
                given: Some("Jane".to_string()),
                ..Default::default()
            },
            phones: vec![
                LabeledValue::new("Mobile", "+15550100"),
                LabeledValue::new("Assistant", "+15550101"),
            ],
            ..Default::default()
        };

        let contact = decode_system_contact(&record, &policy()).unwrap();
        assert_eq!(contact.phones[0].category, PhoneCategory::Mobile);
        assert_eq!(
            contact.phones[1].category,
            PhoneCategory::Custom("Assistant".to_string())
        );
    }

    #[test]
    fn test_decode_empty_record_is_absent() {
        assert!(decode_system_contact(&SystemContact::default(), &policy()).is_none());

        let whitespace_only = SystemContact {
            name: SystemName {
                given: Some("   ".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(decode_system_contact(&whitespace_only, &policy()).is_none());
    }

    #[test]
    fn test_decode_avatar_policy() {
        let record = SystemContact {
            name: SystemName {
                given: Some("Jane".to_string()),
                ..Default::default()
            },
            image: Some(SystemImage {
                resource_id: "photo-7".to_string(),
                content_type: Some("image/jpeg".to_string()),
            }),
            ..Default::default()
        };

        let imported = decode_system_contact(&record, &policy()).unwrap();
        assert_eq!(imported.avatar.as_ref().unwrap().id, "photo-7");
        assert!(!imported.is_profile_avatar);

        let no_import = SharePolicy {
            import_system_avatars: false,
            ..Default::default()
        };
        let skipped = decode_system_contact(&record, &no_import).unwrap();
        assert!(skipped.avatar.is_none());
    }

    #[test]
    fn test_encode_requires_identity() {
        let nameless = Contact::new().with_phone(Phone {
            category: PhoneCategory::Home,
            number: "+15550100".to_string(),
        });
        assert!(encode_system_contact(&nameless).is_none());
    }

    #[test]
    fn test_encode_profile_avatar_redacted() {
        let contact = Contact::new()
            .with_given_name("Jane")
            .with_avatar(AvatarRef::new("profile-1"), true);

        let record = encode_system_contact(&contact).unwrap();
        assert!(record.image.is_none());

        let device_photo = Contact::new()
            .with_given_name("Jane")
            .with_avatar(AvatarRef::new("photo-1"), false);
        assert!(encode_system_contact(&device_photo).unwrap().image.is_some());
    }

    #[test]
    fn test_encode_drops_unlabeled_custom_fields() {
        let contact = Contact::new()
            .with_given_name("Jane")
            .with_phone(Phone {
                category: PhoneCategory::Custom(String::new()),
                number: "+15550100".to_string(),
            })
            .with_email(Email {
                category: EmailCategory::Home,
                address: "jane@example.com".to_string(),
            });

        let record = encode_system_contact(&contact).unwrap();
        assert!(record.phones.is_empty());
        assert_eq!(record.emails.len(), 1);
        assert_eq!(record.emails[0].label.as_deref(), Some("home"));
    }

    #[test]
    fn test_round_trip() {
        let record = SystemContact {
            name: SystemName {
                given: Some("Jane".to_string()),
                family: Some("Doe".to_string()),
                ..Default::default()
            },
            organization: Some("Acme Corp".to_string()),
            phones: vec![LabeledValue::new("work", "+15550100")],
            emails: vec![LabeledValue::new("Archive", "old@example.com")],
            addresses: vec![SystemAddress {
                label: Some("home".to_string()),
                street: Some("1 Main St".to_string()),
                city: Some("Springfield".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let contact = decode_system_contact(&record, &policy()).unwrap();
        assert_eq!(
            contact.emails[0].category,
            EmailCategory::Custom("Archive".to_string())
        );
        assert_eq!(contact.addresses[0].category, AddressCategory::Home);

        let encoded = encode_system_contact(&contact).unwrap();
        assert_eq!(encoded, record);
    }
}

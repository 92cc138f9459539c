//! Card parsing and serialization

use crate::error::{Error, Result};
use crate::text::{
    escape_text, fold, parse_property, split_components, unescape_text, unfold, Property,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cs_core::mapping::{
    address_category_for_label, email_category_for_label, label_for_address_category,
    label_for_email_category, label_for_phone_category, phone_category_for_label,
};
use cs_core::{
    Address, AddressCategory, AvatarRef, Contact, Email, EmailCategory, Phone, PhoneCategory,
    SharePolicy,
};
use cs_native::SystemContact;
use tracing::{debug, warn};

/// TYPE values that describe the medium, not the category
const NOISE_TYPES: [&str; 3] = ["voice", "internet", "pref"];

fn is_noise_type(value: &str) -> bool {
    NOISE_TYPES
        .iter()
        .any(|t| value.eq_ignore_ascii_case(t))
}

fn phone_category_from_types(types: &[String]) -> PhoneCategory {
    for t in types {
        let category = phone_category_for_label(t);
        if !matches!(category, PhoneCategory::Custom(_)) {
            return category;
        }
    }
    types
        .iter()
        .find(|t| !is_noise_type(t))
        .map(|t| PhoneCategory::Custom(t.clone()))
        .unwrap_or(PhoneCategory::Custom(String::new()))
}

fn email_category_from_types(types: &[String]) -> EmailCategory {
    for t in types {
        let category = email_category_for_label(t);
        if !matches!(category, EmailCategory::Custom(_)) {
            return category;
        }
    }
    types
        .iter()
        .find(|t| !is_noise_type(t))
        .map(|t| EmailCategory::Custom(t.clone()))
        .unwrap_or(EmailCategory::Custom(String::new()))
}

fn address_category_from_types(types: &[String]) -> AddressCategory {
    for t in types {
        let category = address_category_for_label(t);
        if !matches!(category, AddressCategory::Custom(_)) {
            return category;
        }
    }
    types
        .iter()
        .find(|t| !is_noise_type(t))
        .map(|t| AddressCategory::Custom(t.clone()))
        .unwrap_or(AddressCategory::Custom(String::new()))
}

fn component(parts: &[String], index: usize) -> Option<String> {
    parts
        .get(index)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn decode_photo(prop: &Property) -> Option<AvatarRef> {
    let encoding = prop.param("ENCODING").unwrap_or_default();
    if encoding.eq_ignore_ascii_case("b") || encoding.eq_ignore_ascii_case("base64") {
        if BASE64.decode(prop.value.trim()).is_err() {
            warn!("Skipping photo with undecodable base64 payload");
            return None;
        }
        // the bytes belong to the attachment subsystem; keep only a handle
        let content_type = prop
            .types
            .first()
            .map(|t| format!("image/{}", t.to_ascii_lowercase()));
        return Some(AvatarRef::generated(content_type));
    }
    let value = unescape_text(prop.value.trim());
    if value.is_empty() {
        return None;
    }
    Some(AvatarRef::new(value))
}

/// Parse card text into a contact
pub fn parse_vcard(text: &str) -> Result<Contact> {
    let mut begun = false;
    let mut ended = false;
    let mut contact = Contact::new();

    for line in unfold(text) {
        let Some(prop) = parse_property(&line) else {
            continue;
        };
        match prop.name.as_str() {
            "BEGIN" if prop.value.trim().eq_ignore_ascii_case("VCARD") => begun = true,
            "END" if prop.value.trim().eq_ignore_ascii_case("VCARD") => {
                ended = true;
                break;
            }
            _ if !begun => continue,
            // family; given; middle; prefix; suffix
            "N" => {
                let parts = split_components(&prop.value);
                contact.family_name = component(&parts, 0);
                contact.given_name = component(&parts, 1);
                contact.middle_name = component(&parts, 2);
                contact.name_prefix = component(&parts, 3);
                contact.name_suffix = component(&parts, 4);
            }
            // FN is derived locally; the stored form is the structured name
            "ORG" => {
                contact.organization = component(&split_components(&prop.value), 0);
            }
            "TEL" => {
                let number = unescape_text(prop.value.trim());
                if !number.is_empty() {
                    contact.phones.push(Phone {
                        category: phone_category_from_types(&prop.types),
                        number,
                    });
                }
            }
            "EMAIL" => {
                let address = unescape_text(prop.value.trim());
                if !address.is_empty() {
                    contact.emails.push(Email {
                        category: email_category_from_types(&prop.types),
                        address,
                    });
                }
            }
            // pobox; extended; street; city; region; postcode; country
            "ADR" => {
                let parts = split_components(&prop.value);
                contact.addresses.push(Address {
                    category: address_category_from_types(&prop.types),
                    pobox: component(&parts, 0),
                    neighborhood: component(&parts, 1),
                    street: component(&parts, 2),
                    city: component(&parts, 3),
                    region: component(&parts, 4),
                    postcode: component(&parts, 5),
                    country: component(&parts, 6),
                });
            }
            "PHOTO" => {
                if contact.avatar.is_none() {
                    contact.avatar = decode_photo(&prop);
                }
            }
            _ => {}
        }
    }

    if !begun || !ended {
        return Err(Error::MissingEnvelope);
    }
    if !contact.has_content() {
        return Err(Error::EmptyCard);
    }
    Ok(contact)
}

/// Decode card text; malformed or empty input yields no contact
pub fn decode_vcard(text: &str) -> Option<Contact> {
    match parse_vcard(text) {
        Ok(contact) => {
            debug!("Decoded card: {}", contact.summary());
            Some(contact)
        }
        Err(e) => {
            debug!("Card not decodable: {}", e);
            None
        }
    }
}

fn type_param(label: &str, is_custom: bool) -> String {
    let value = if is_custom {
        label.to_string()
    } else {
        label.to_ascii_uppercase()
    };
    if value.contains([';', ':', ','].as_ref()) {
        format!("TYPE=\"{}\"", value)
    } else {
        format!("TYPE={}", value)
    }
}

/// Serialize a contact into card text.
///
/// Best-effort: anything the card schema cannot hold is dropped without
/// failing. Returns `None` only when the contact lacks a name and
/// organization.
pub fn encode_vcard(contact: &Contact) -> Option<String> {
    if !contact.has_identity() {
        debug!("Refusing to encode contact with no name or organization");
        return None;
    }
    let contact = contact.normalized();

    let mut lines: Vec<String> = Vec::new();
    lines.push("BEGIN:VCARD".to_string());
    lines.push("VERSION:3.0".to_string());
    lines.push(format!(
        "N:{};{};{};{};{}",
        escape_text(contact.family_name.as_deref().unwrap_or_default()),
        escape_text(contact.given_name.as_deref().unwrap_or_default()),
        escape_text(contact.middle_name.as_deref().unwrap_or_default()),
        escape_text(contact.name_prefix.as_deref().unwrap_or_default()),
        escape_text(contact.name_suffix.as_deref().unwrap_or_default()),
    ));
    lines.push(format!("FN:{}", escape_text(&contact.display_name())));
    if let Some(org) = &contact.organization {
        lines.push(format!("ORG:{}", escape_text(org)));
    }

    for phone in &contact.phones {
        match label_for_phone_category(&phone.category) {
            Ok(label) => lines.push(format!(
                "TEL;{}:{}",
                type_param(label, matches!(phone.category, PhoneCategory::Custom(_))),
                escape_text(&phone.number)
            )),
            Err(e) => warn!("Dropping phone from card: {}", e),
        }
    }
    for email in &contact.emails {
        match label_for_email_category(&email.category) {
            Ok(label) => lines.push(format!(
                "EMAIL;{}:{}",
                type_param(label, matches!(email.category, EmailCategory::Custom(_))),
                escape_text(&email.address)
            )),
            Err(e) => warn!("Dropping email from card: {}", e),
        }
    }
    for address in &contact.addresses {
        match label_for_address_category(&address.category) {
            Ok(label) => lines.push(format!(
                "ADR;{}:{};{};{};{};{};{};{}",
                type_param(label, matches!(address.category, AddressCategory::Custom(_))),
                escape_text(address.pobox.as_deref().unwrap_or_default()),
                escape_text(address.neighborhood.as_deref().unwrap_or_default()),
                escape_text(address.street.as_deref().unwrap_or_default()),
                escape_text(address.city.as_deref().unwrap_or_default()),
                escape_text(address.region.as_deref().unwrap_or_default()),
                escape_text(address.postcode.as_deref().unwrap_or_default()),
                escape_text(address.country.as_deref().unwrap_or_default()),
            )),
            Err(e) => warn!("Dropping address from card: {}", e),
        }
    }

    // no attachment bytes here, so the handle travels as a URI value
    if let Some(avatar) = &contact.avatar {
        if contact.is_profile_avatar {
            debug!("Omitting profile avatar from card");
        } else {
            lines.push(format!("PHOTO;VALUE=uri:{}", escape_text(&avatar.id)));
        }
    }

    lines.push("END:VCARD".to_string());

    let mut card = String::new();
    for line in lines {
        card.push_str(&fold(&line));
        card.push_str("\r\n");
    }
    Some(card)
}

/// Decode a system record straight to card text
pub fn system_contact_to_vcard(record: &SystemContact, policy: &SharePolicy) -> Option<String> {
    let contact = cs_native::decode_system_contact(record, policy)?;
    encode_vcard(&contact)
}

/// Parse card text straight into a system record
pub fn vcard_to_system_contact(text: &str) -> Option<SystemContact> {
    let contact = decode_vcard(text)?;
    cs_native::encode_system_contact(&contact)
}

//! Wire message conversion

use crate::proto::{
    ContactMessage, WireAddress, WireAddressType, WireAttachmentPointer, WireAvatar, WireEmail,
    WireEmailType, WireName, WirePhone, WirePhoneType,
};
use cs_core::{
    Address, AddressCategory, AvatarRef, Contact, Email, EmailCategory, Phone, PhoneCategory,
};
use prost::Message;
use tracing::{debug, warn};

fn phone_from_wire(wire: &WirePhone) -> Phone {
    let label = wire.label.clone().unwrap_or_default();
    let category = match wire.r#type.map(WirePhoneType::try_from) {
        // absent type reads as the wire default
        None | Some(Ok(WirePhoneType::Home)) => PhoneCategory::Home,
        Some(Ok(WirePhoneType::Mobile)) => PhoneCategory::Mobile,
        Some(Ok(WirePhoneType::Work)) => PhoneCategory::Work,
        Some(Ok(WirePhoneType::Custom)) => PhoneCategory::Custom(label.clone()),
        // unknown numeric type: keep the label rather than guess a category
        Some(Err(_)) => PhoneCategory::Custom(label.clone()),
    };
    if !matches!(category, PhoneCategory::Custom(_)) && !label.is_empty() {
        warn!("Ignoring label {:?} on standard-category wire phone", label);
    }
    Phone {
        category,
        number: wire.value.clone().unwrap_or_default(),
    }
}

fn email_from_wire(wire: &WireEmail) -> Email {
    let label = wire.label.clone().unwrap_or_default();
    let category = match wire.r#type.map(WireEmailType::try_from) {
        None | Some(Ok(WireEmailType::Home)) => EmailCategory::Home,
        Some(Ok(WireEmailType::Mobile)) => EmailCategory::Mobile,
        Some(Ok(WireEmailType::Work)) => EmailCategory::Work,
        Some(Ok(WireEmailType::Custom)) => EmailCategory::Custom(label.clone()),
        Some(Err(_)) => EmailCategory::Custom(label.clone()),
    };
    if !matches!(category, EmailCategory::Custom(_)) && !label.is_empty() {
        warn!("Ignoring label {:?} on standard-category wire email", label);
    }
    Email {
        category,
        address: wire.value.clone().unwrap_or_default(),
    }
}

fn address_from_wire(wire: &WireAddress) -> Address {
    let label = wire.label.clone().unwrap_or_default();
    let category = match wire.r#type.map(WireAddressType::try_from) {
        None | Some(Ok(WireAddressType::Home)) => AddressCategory::Home,
        Some(Ok(WireAddressType::Work)) => AddressCategory::Work,
        Some(Ok(WireAddressType::Custom)) => AddressCategory::Custom(label.clone()),
        Some(Err(_)) => AddressCategory::Custom(label.clone()),
    };
    if !matches!(category, AddressCategory::Custom(_)) && !label.is_empty() {
        warn!("Ignoring label {:?} on standard-category wire address", label);
    }
    Address {
        category,
        street: wire.street.clone(),
        pobox: wire.pobox.clone(),
        neighborhood: wire.neighborhood.clone(),
        city: wire.city.clone(),
        region: wire.region.clone(),
        postcode: wire.postcode.clone(),
        country: wire.country.clone(),
    }
}

/// Decode a wire contact sub-message.
///
/// Returns `None` when the message has no identity information and no
/// fields. The sender's display name is ignored; receivers derive their own
/// from the name components.
pub fn decode_contact_message(message: &ContactMessage) -> Option<Contact> {
    let name = message.name.clone().unwrap_or_default();
    let contact = Contact {
        name_prefix: name.prefix,
        given_name: name.given_name,
        middle_name: name.middle_name,
        family_name: name.family_name,
        name_suffix: name.suffix,
        organization: message.organization.clone(),
        phones: message.number.iter().map(phone_from_wire).collect(),
        emails: message.email.iter().map(email_from_wire).collect(),
        addresses: message.address.iter().map(address_from_wire).collect(),
        avatar: message
            .avatar
            .as_ref()
            .and_then(|a| a.attachment.as_ref())
            .map(|pointer| AvatarRef {
                id: pointer.id.clone().unwrap_or_default(),
                content_type: pointer.content_type.clone(),
            }),
        is_profile_avatar: message
            .avatar
            .as_ref()
            .and_then(|a| a.is_profile)
            .unwrap_or(false),
    };

    if !contact.has_content() {
        debug!("Wire contact carries no contact information");
        return None;
    }

    debug!("Decoded wire contact: {}", contact.summary());
    Some(contact)
}

fn phone_to_wire(phone: &Phone) -> WirePhone {
    let (wire_type, label) = match &phone.category {
        PhoneCategory::Home => (WirePhoneType::Home, None),
        PhoneCategory::Mobile => (WirePhoneType::Mobile, None),
        PhoneCategory::Work => (WirePhoneType::Work, None),
        // an empty custom label still travels as custom; the receiver's
        // validity check reports it
        PhoneCategory::Custom(l) => (
            WirePhoneType::Custom,
            (!l.is_empty()).then(|| l.clone()),
        ),
    };
    WirePhone {
        value: Some(phone.number.clone()),
        r#type: Some(wire_type as i32),
        label,
    }
}

fn email_to_wire(email: &Email) -> WireEmail {
    let (wire_type, label) = match &email.category {
        EmailCategory::Home => (WireEmailType::Home, None),
        EmailCategory::Mobile => (WireEmailType::Mobile, None),
        EmailCategory::Work => (WireEmailType::Work, None),
        EmailCategory::Custom(l) => (
            WireEmailType::Custom,
            (!l.is_empty()).then(|| l.clone()),
        ),
    };
    WireEmail {
        value: Some(email.address.clone()),
        r#type: Some(wire_type as i32),
        label,
    }
}

fn address_to_wire(address: &Address) -> WireAddress {
    let (wire_type, label) = match &address.category {
        AddressCategory::Home => (WireAddressType::Home, None),
        AddressCategory::Work => (WireAddressType::Work, None),
        AddressCategory::Custom(l) => (
            WireAddressType::Custom,
            (!l.is_empty()).then(|| l.clone()),
        ),
    };
    WireAddress {
        r#type: Some(wire_type as i32),
        label,
        street: address.street.clone(),
        pobox: address.pobox.clone(),
        neighborhood: address.neighborhood.clone(),
        city: address.city.clone(),
        region: address.region.clone(),
        postcode: address.postcode.clone(),
        country: address.country.clone(),
    }
}

/// Encode a contact into a wire sub-message.
///
/// Returns `None` only when the contact lacks a name and organization.
/// Malformed custom fields are still transmitted so the recipient can see
/// what was shared.
pub fn encode_contact_message(contact: &Contact) -> Option<ContactMessage> {
    if !contact.has_identity() {
        debug!("Refusing to encode contact with no name or organization");
        return None;
    }
    let contact = contact.normalized();

    Some(ContactMessage {
        name: Some(WireName {
            given_name: contact.given_name.clone(),
            family_name: contact.family_name.clone(),
            prefix: contact.name_prefix.clone(),
            suffix: contact.name_suffix.clone(),
            middle_name: contact.middle_name.clone(),
            display_name: Some(contact.display_name()),
        }),
        number: contact.phones.iter().map(phone_to_wire).collect(),
        email: contact.emails.iter().map(email_to_wire).collect(),
        address: contact.addresses.iter().map(address_to_wire).collect(),
        avatar: contact.avatar.as_ref().map(|avatar| WireAvatar {
            attachment: Some(WireAttachmentPointer {
                id: Some(avatar.id.clone()),
                content_type: avatar.content_type.clone(),
            }),
            is_profile: Some(contact.is_profile_avatar),
        }),
        organization: contact.organization.clone(),
    })
}

/// Decode a contact from wire bytes
pub fn read_contact(bytes: &[u8]) -> Option<Contact> {
    match ContactMessage::decode(bytes) {
        Ok(message) => decode_contact_message(&message),
        Err(e) => {
            debug!("Wire contact not decodable: {}", e);
            None
        }
    }
}

/// Encode a contact to wire bytes
pub fn write_contact(contact: &Contact) -> Option<Vec<u8>> {
    encode_contact_message(contact).map(|message| message.encode_to_vec())
}

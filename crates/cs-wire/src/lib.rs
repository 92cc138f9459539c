//! cs-wire: Wire protocol contact codec for card-share
//!
//! The contact sub-message travels inside a larger message envelope; the
//! envelope (framing, encryption, delivery) is not this crate's concern.
//!
//! ## Features
//!
//! - Hand-declared protobuf messages for the contact sub-message
//! - Category translation between the wire enums and the model categories
//! - Byte-level read/write helpers
//!
//! The avatar crosses this boundary as an attachment pointer, never as
//! image bytes.

pub mod codec;
pub mod proto;

pub use codec::{decode_contact_message, encode_contact_message, read_contact, write_contact};
pub use proto::{
    ContactMessage, WireAddress, WireAddressType, WireAttachmentPointer, WireAvatar, WireEmail,
    WireEmailType, WireName, WirePhone, WirePhoneType,
};

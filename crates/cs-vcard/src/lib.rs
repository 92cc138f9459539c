//! cs-vcard: Portable card codec for card-share
//!
//! Parses and serializes vCard 3.0 text cards.
//!
//! ## Features
//!
//! - Line unfolding/folding and text escaping per the card format
//! - Typed TEL/EMAIL/ADR properties via the shared category mapping
//! - Base64 photo payloads handed off as attachment handles
//! - Bridge helpers between system records and card bytes
//!
//! Decode is the fidelity-preserving direction; encode is best-effort and
//! drops what the card schema cannot express.

pub mod codec;
pub mod error;
pub mod text;

pub use codec::{
    decode_vcard, encode_vcard, parse_vcard, system_contact_to_vcard, vcard_to_system_contact,
};
pub use error::{Error, Result};

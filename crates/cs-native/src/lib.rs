//! cs-native: System contact record codec for card-share
//!
//! Converts between the device platform's contact record and the card-share
//! contact aggregate.
//!
//! ## Features
//!
//! - Label-to-category inference from the platform's labeled collections
//! - Policy-gated import of the record's photo
//! - Profile-avatar redaction when writing back to the contact store
//!
//! Malformed or essentially-empty records decode to `None`; both directions
//! are pure and never touch image bytes.

pub mod codec;
pub mod record;

pub use codec::{decode_system_contact, encode_system_contact};
pub use record::{LabeledValue, SystemAddress, SystemContact, SystemImage, SystemName};

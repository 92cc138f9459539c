//! cs-core: Contact card data model for card-share
//!
//! This crate provides the contact aggregate shared by all card-share codecs.
//!
//! ## Features
//!
//! - Typed, labeled contact fields (phone, email, postal address)
//! - Contact aggregate with derived display name
//! - Validation and whitespace normalization
//! - Shared category/label mapping used by every codec
//!
//! ## Usage
//!
//! ```rust
//! use cs_core::{Contact, Phone, PhoneCategory};
//!
//! let phone = Phone::new(PhoneCategory::Mobile, "+15550100").unwrap();
//! let contact = Contact::new()
//!     .with_given_name("Jane")
//!     .with_family_name("Doe")
//!     .with_phone(phone);
//!
//! assert_eq!(contact.display_name(), "Jane Doe");
//! assert!(contact.is_valid());
//! ```

pub mod avatar;
pub mod contact;
pub mod error;
pub mod fields;
pub mod mapping;
pub mod policy;

pub use avatar::AvatarRef;
pub use contact::Contact;
pub use error::{Error, Result};
pub use fields::{
    Address, AddressCategory, ContactField, Email, EmailCategory, Phone, PhoneCategory,
};
pub use policy::SharePolicy;

/// Re-export the model types for easy use
pub mod prelude {
    pub use super::{
        Address, AddressCategory, AvatarRef, Contact, ContactField, Email, EmailCategory, Phone,
        PhoneCategory, SharePolicy,
    };
}

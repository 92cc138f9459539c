//! Wire message declarations
//!
//! Declared by hand rather than generated; the schema is small and stable.
//! Field tags are part of the protocol and must not be renumbered.

/// Contact sub-message of the chat message envelope
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContactMessage {
    #[prost(message, optional, tag = "1")]
    pub name: Option<WireName>,
    #[prost(message, repeated, tag = "3")]
    pub number: Vec<WirePhone>,
    #[prost(message, repeated, tag = "4")]
    pub email: Vec<WireEmail>,
    #[prost(message, repeated, tag = "5")]
    pub address: Vec<WireAddress>,
    #[prost(message, optional, tag = "6")]
    pub avatar: Option<WireAvatar>,
    #[prost(string, optional, tag = "7")]
    pub organization: Option<String>,
}

/// Structured name components
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WireName {
    #[prost(string, optional, tag = "1")]
    pub given_name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub family_name: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub prefix: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub suffix: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub middle_name: Option<String>,
    /// Sender-supplied display name; receivers derive their own
    #[prost(string, optional, tag = "6")]
    pub display_name: Option<String>,
}

/// Phone number categories on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WirePhoneType {
    Home = 1,
    Mobile = 2,
    Work = 3,
    Custom = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WirePhone {
    #[prost(string, optional, tag = "1")]
    pub value: Option<String>,
    #[prost(enumeration = "WirePhoneType", optional, tag = "2")]
    pub r#type: Option<i32>,
    /// Only meaningful for the custom type
    #[prost(string, optional, tag = "3")]
    pub label: Option<String>,
}

/// Email address categories on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WireEmailType {
    Home = 1,
    Mobile = 2,
    Work = 3,
    Custom = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WireEmail {
    #[prost(string, optional, tag = "1")]
    pub value: Option<String>,
    #[prost(enumeration = "WireEmailType", optional, tag = "2")]
    pub r#type: Option<i32>,
    /// Only meaningful for the custom type
    #[prost(string, optional, tag = "3")]
    pub label: Option<String>,
}

/// Postal address categories on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WireAddressType {
    Home = 1,
    Work = 2,
    Custom = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WireAddress {
    #[prost(enumeration = "WireAddressType", optional, tag = "1")]
    pub r#type: Option<i32>,
    /// Only meaningful for the custom type
    #[prost(string, optional, tag = "2")]
    pub label: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub street: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub pobox: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub neighborhood: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub city: Option<String>,
    #[prost(string, optional, tag = "7")]
    pub region: Option<String>,
    #[prost(string, optional, tag = "8")]
    pub postcode: Option<String>,
    #[prost(string, optional, tag = "9")]
    pub country: Option<String>,
}

/// Avatar reference; bytes travel separately as an attachment
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WireAvatar {
    #[prost(message, optional, tag = "1")]
    pub attachment: Option<WireAttachmentPointer>,
    /// True when the image is a messaging profile picture
    #[prost(bool, optional, tag = "2")]
    pub is_profile: Option<bool>,
}

/// Pointer to an attachment held by the attachment subsystem
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WireAttachmentPointer {
    #[prost(string, optional, tag = "1")]
    pub id: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub content_type: Option<String>,
}

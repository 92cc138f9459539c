//! Opaque avatar handles
//!
//! A contact never owns image bytes. It carries a handle that the attachment
//! subsystem resolves; every codec passes the handle through without I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle to an avatar image owned by the attachment subsystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarRef {
    /// Attachment identifier understood by the attachment subsystem
    pub id: String,
    /// MIME content type of the underlying image, when known
    #[serde(default)]
    pub content_type: Option<String>,
}

impl AvatarRef {
    /// Create a handle for an existing attachment
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type: None,
        }
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Create a handle with a generated id, for image data that arrived
    /// inline and was handed off to the attachment subsystem
    pub fn generated(content_type: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content_type,
        }
    }

    /// Whether the declared content type is an image type.
    /// A missing content type is not held against the handle.
    pub fn is_image(&self) -> bool {
        match self.content_type.as_deref() {
            Some(ct) => ct
                .parse::<mime::Mime>()
                .map(|m| m.type_() == mime::IMAGE)
                .unwrap_or(false),
            None => true,
        }
    }
}

//! Sharing policy configuration

use crate::contact::Contact;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

/// App-level policy for contact sharing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharePolicy {
    /// Global switch for sending contact shares
    #[serde(default = "default_true")]
    pub contact_shares_enabled: bool,

    /// Whether decoding a system contact record may take its photo
    #[serde(default = "default_true")]
    pub import_system_avatars: bool,
}

impl Default for SharePolicy {
    fn default() -> Self {
        Self {
            contact_shares_enabled: true,
            import_system_avatars: true,
        }
    }
}

impl SharePolicy {
    /// Load policy from a TOML file
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Whether this contact may be sent as a share right now.
    /// Senders must hold a valid contact and the global switch must be on.
    pub fn allows_sharing(&self, contact: &Contact) -> bool {
        self.contact_shares_enabled && contact.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let policy = SharePolicy::default();
        assert!(policy.contact_shares_enabled);
        assert!(policy.import_system_avatars);
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "contact_shares_enabled = false").unwrap();

        let policy = SharePolicy::from_toml_path(file.path()).unwrap();
        assert!(!policy.contact_shares_enabled);
        // unspecified keys fall back to defaults
        assert!(policy.import_system_avatars);
    }

    #[test]
    fn test_allows_sharing_gates_on_validity() {
        let policy = SharePolicy::default();
        let contact = Contact::new().with_given_name("Jane");
        assert!(policy.allows_sharing(&contact));
        assert!(!policy.allows_sharing(&Contact::new()));

        let disabled = SharePolicy {
            contact_shares_enabled: false,
            ..Default::default()
        };
        assert!(!disabled.allows_sharing(&contact));
    }
}

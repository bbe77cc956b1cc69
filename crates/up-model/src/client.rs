//! Client application configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Attribute permissions of a client application, as cached by the
/// orchestrator for the lifetime of the pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientConfiguration {
    /// Attribute names the client may read.
    pub read_attributes: BTreeSet<String>,
    /// Attribute names the client may write.
    pub write_attributes: BTreeSet<String>,
}

impl ClientConfiguration {
    /// Creates a configuration from readable and writable attribute names.
    #[must_use]
    pub fn new<R, W>(read_attributes: R, write_attributes: W) -> Self
    where
        R: IntoIterator<Item = String>,
        W: IntoIterator<Item = String>,
    {
        Self {
            read_attributes: read_attributes.into_iter().collect(),
            write_attributes: write_attributes.into_iter().collect(),
        }
    }

    /// Checks whether the client may read the named attribute.
    #[must_use]
    pub fn can_read(&self, name: &str) -> bool {
        self.read_attributes.contains(name)
    }

    /// Checks whether the client may write the named attribute.
    #[must_use]
    pub fn can_write(&self, name: &str) -> bool {
        self.write_attributes.contains(name)
    }
}

/// Wire-level description of a client application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientDescription {
    /// Client application identifier.
    pub client_id: String,

    /// Attribute names the client may read.
    #[serde(default)]
    pub read_attributes: Vec<String>,

    /// Attribute names the client may write.
    #[serde(default)]
    pub write_attributes: Vec<String>,
}

impl From<ClientDescription> for ClientConfiguration {
    fn from(description: ClientDescription) -> Self {
        Self::new(description.read_attributes, description.write_attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_from_description() {
        let description = ClientDescription {
            client_id: "client1".to_string(),
            read_attributes: vec!["email".to_string(), "sub".to_string()],
            write_attributes: vec!["email".to_string()],
        };

        let configuration = ClientConfiguration::from(description);
        assert!(configuration.can_read("email"));
        assert!(configuration.can_read("sub"));
        assert!(configuration.can_write("email"));
        assert!(!configuration.can_write("sub"));
    }

    #[test]
    fn configurations_compare_by_value() {
        let a = ClientConfiguration::new(
            vec!["email".to_string()],
            vec!["email".to_string()],
        );
        let b = ClientConfiguration::new(
            vec!["email".to_string()],
            vec!["email".to_string()],
        );
        assert_eq!(a, b);
    }
}

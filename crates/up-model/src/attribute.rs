//! User attributes and attribute-list marshalling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Caller-facing attribute mapping (attribute name to value).
pub type AttributeMap = HashMap<String, String>;

/// A wire-level attribute (name-value pair).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: String,
}

impl Attribute {
    /// Creates a new attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Marshals an attribute mapping into the wire-level list shape.
///
/// Total over valid mappings: every entry is preserved and nothing is
/// rejected. The list is sorted by attribute name so request building
/// is reproducible.
#[must_use]
pub fn to_attribute_list(map: &AttributeMap) -> Vec<Attribute> {
    let mut attributes: Vec<Attribute> = map
        .iter()
        .map(|(name, value)| Attribute::new(name.clone(), value.clone()))
        .collect();
    attributes.sort_by(|a, b| a.name.cmp(&b.name));
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_every_entry() {
        let mut map = AttributeMap::new();
        map.insert("email".to_string(), "a@x.com".to_string());
        map.insert("given_name".to_string(), "Alice".to_string());
        map.insert("locale".to_string(), "en-US".to_string());

        let list = to_attribute_list(&map);
        assert_eq!(list.len(), 3);
        for (name, value) in &map {
            assert!(list.contains(&Attribute::new(name.clone(), value.clone())));
        }
    }

    #[test]
    fn order_is_deterministic() {
        let mut map = AttributeMap::new();
        map.insert("zoneinfo".to_string(), "UTC".to_string());
        map.insert("email".to_string(), "a@x.com".to_string());
        map.insert("name".to_string(), "Alice".to_string());

        let list = to_attribute_list(&map);
        let names: Vec<&str> = list.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["email", "name", "zoneinfo"]);
    }

    #[test]
    fn empty_mapping_marshals_to_empty_list() {
        assert!(to_attribute_list(&AttributeMap::new()).is_empty());
    }

    #[test]
    fn serializes_pascal_case() {
        let json = serde_json::to_string(&Attribute::new("email", "a@x.com")).unwrap();
        assert_eq!(json, r#"{"Name":"email","Value":"a@x.com"}"#);
    }
}

//! Password policy and pool description.

use serde::{Deserialize, Serialize};

/// Password policy configured on a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordPolicy {
    /// Minimum password length.
    pub minimum_length: u32,
    /// Whether at least one uppercase letter is required.
    pub require_uppercase: bool,
    /// Whether at least one lowercase letter is required.
    pub require_lowercase: bool,
    /// Whether at least one digit is required.
    pub require_numbers: bool,
    /// Whether at least one symbol is required.
    pub require_symbols: bool,
    /// How long an administrator-issued temporary password stays valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary_password_validity_days: Option<u32>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            minimum_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_symbols: true,
            temporary_password_validity_days: None,
        }
    }
}

/// Policy block of a pool description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PoolPolicies {
    /// Password policy.
    #[serde(default)]
    pub password_policy: PasswordPolicy,
}

/// Wire-level description of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolDescription {
    /// Pool identifier.
    pub id: String,

    /// Display name, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Pool policies.
    #[serde(default)]
    pub policies: PoolPolicies,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_requires_all_character_classes() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.minimum_length, 8);
        assert!(policy.require_uppercase);
        assert!(policy.require_lowercase);
        assert!(policy.require_numbers);
        assert!(policy.require_symbols);
    }

    #[test]
    fn description_deserializes_without_policies() {
        let description: UserPoolDescription =
            serde_json::from_str(r#"{"Id":"us-east-1_abc123"}"#).unwrap();
        assert_eq!(description.id, "us-east-1_abc123");
        assert_eq!(description.policies.password_policy, PasswordPolicy::default());
    }
}

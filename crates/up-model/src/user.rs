//! User status and the wire-level user record.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// Lifecycle status of a user within a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// User has confirmed their registration.
    Confirmed,
    /// User registered but has not confirmed yet.
    Unconfirmed,
    /// User was archived.
    Archived,
    /// User credentials were flagged as compromised.
    Compromised,
    /// User must reset their password before signing in.
    ResetRequired,
    /// User must change a temporary password on first sign-in.
    ForceChangePassword,
    /// User is managed by an external identity provider.
    ExternalProvider,
    /// Status reported by the provider is not recognized.
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    /// Returns the provider's wire name for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Unconfirmed => "UNCONFIRMED",
            Self::Archived => "ARCHIVED",
            Self::Compromised => "COMPROMISED",
            Self::ResetRequired => "RESET_REQUIRED",
            Self::ForceChangePassword => "FORCE_CHANGE_PASSWORD",
            Self::ExternalProvider => "EXTERNAL_PROVIDER",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Checks whether the user can sign in without further action.
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// Wire-level user record as returned by administrative operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    /// Username within the pool.
    pub username: String,

    /// Current status, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,

    /// Attributes attached to the user.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names() {
        assert_eq!(UserStatus::Confirmed.as_str(), "CONFIRMED");
        assert_eq!(
            UserStatus::ForceChangePassword.as_str(),
            "FORCE_CHANGE_PASSWORD"
        );
    }

    #[test]
    fn status_deserializes_from_wire_name() {
        let status: UserStatus = serde_json::from_str(r#""RESET_REQUIRED""#).unwrap();
        assert_eq!(status, UserStatus::ResetRequired);
    }

    #[test]
    fn unrecognized_status_falls_back_to_unknown() {
        let status: UserStatus = serde_json::from_str(r#""SOMETHING_NEW""#).unwrap();
        assert_eq!(status, UserStatus::Unknown);
    }

    #[test]
    fn only_confirmed_users_can_sign_in() {
        assert!(UserStatus::Confirmed.is_confirmed());
        assert!(!UserStatus::Unconfirmed.is_confirmed());
        assert!(!UserStatus::ResetRequired.is_confirmed());
    }
}

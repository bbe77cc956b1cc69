//! Provider fault types.
//!
//! ## Security Note
//!
//! Fault messages must not carry passwords, client secrets, or
//! secret hashes. Service faults carry the provider's error code
//! and message verbatim; the provider never echoes credentials.

use thiserror::Error;

/// A fault reported by the identity provider through a completion.
///
/// These are the failures a provider transport can hand back when a
/// callback-style call finishes. The orchestrator forwards them
/// unchanged, with a single exception: `UserNotFound` raised during a
/// lookup is translated into an empty result.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The named user does not exist in the pool.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// A typed service fault with the provider's error code.
    #[error("service fault {code}: {message}")]
    Service {
        /// Provider error code (e.g. `InternalErrorException`).
        code: String,
        /// Human-readable message from the provider.
        message: String,
    },

    /// The request never reached the provider or the response was lost.
    #[error("transport error: {0}")]
    Transport(String),

    /// The transport gave up waiting for the provider.
    #[error("provider call timed out")]
    Timeout,

    /// The provider dropped its completion without resolving it.
    ///
    /// This is a provider contract violation, not an orchestrator
    /// error category: every call must resolve its completion
    /// exactly once.
    #[error("provider call was interrupted before completion")]
    Interrupted,
}

impl ProviderError {
    /// Creates a user-not-found fault.
    #[must_use]
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound(username.into())
    }

    /// Creates a typed service fault.
    #[must_use]
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a transport fault.
    #[must_use]
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Checks whether this fault means the requested user is absent.
    #[must_use]
    pub const fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Checks whether this fault is transport-level rather than a
    /// provider-reported service fault.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout | Self::Interrupted)
    }
}

/// Result type for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_categories() {
        assert!(ProviderError::user_not_found("ghost").is_user_not_found());
        assert!(!ProviderError::user_not_found("ghost").is_transport_error());

        assert!(ProviderError::transport("connection reset").is_transport_error());
        assert!(ProviderError::Timeout.is_transport_error());
        assert!(ProviderError::Interrupted.is_transport_error());

        let service = ProviderError::service("InternalErrorException", "boom");
        assert!(!service.is_user_not_found());
        assert!(!service.is_transport_error());
    }

    #[test]
    fn service_fault_carries_code_and_message() {
        let fault = ProviderError::service("NotAuthorizedException", "bad credentials");
        assert_eq!(
            fault.to_string(),
            "service fault NotAuthorizedException: bad credentials"
        );
    }
}

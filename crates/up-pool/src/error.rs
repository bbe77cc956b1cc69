//! Pool-level error types.

use thiserror::Error;

use up_core::error::ProviderError;

/// Errors surfaced by pool operations.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The pool was constructed with invalid identity data.
    #[error("pool configuration error: {0}")]
    Configuration(String),

    /// A per-call input failed validation before any provider call.
    #[error("validation error: {0}")]
    Validation(String),

    /// The cancellation signal was already triggered at call entry.
    #[error("operation cancelled before dispatch")]
    Cancelled,

    /// A fault reported by the provider, forwarded unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl PoolError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Checks whether this error was raised before any provider call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Validation(_) | Self::Cancelled
        )
    }
}

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_errors_never_reach_the_provider() {
        assert!(PoolError::configuration("bad pool id").is_local());
        assert!(PoolError::validation("missing attributes").is_local());
        assert!(PoolError::Cancelled.is_local());
        assert!(!PoolError::from(ProviderError::Timeout).is_local());
    }

    #[test]
    fn provider_fault_message_is_forwarded_unchanged() {
        let fault = ProviderError::service("TooManyRequestsException", "slow down");
        let message = fault.to_string();
        assert_eq!(PoolError::from(fault).to_string(), message);
    }
}

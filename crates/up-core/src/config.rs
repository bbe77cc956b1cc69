//! Pool client configuration.
//!
//! Configuration is plain data: it can be deserialized from a file or
//! environment layer and handed to the pool constructor. Transport
//! settings (endpoint override, timeouts) are consumed by the
//! concrete provider transport, not by the orchestrator itself.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for one user pool client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Pool identifier, of the form `<region>_<pool-name>`.
    pub pool_id: String,

    /// Client application identifier registered in the pool.
    pub client_id: String,

    /// Shared client secret, if the client application has one.
    ///
    /// When present and non-empty, signed requests carry a secret
    /// hash derived from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Endpoint override for the provider transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Connection timeout.
    #[serde(with = "duration_secs", default = "default_connection_timeout")]
    pub connection_timeout: Duration,

    /// Read timeout.
    #[serde(with = "duration_secs", default = "default_read_timeout")]
    pub read_timeout: Duration,
}

impl PoolConfig {
    /// Creates a configuration with default timeouts and no secret.
    #[must_use]
    pub fn new(pool_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            pool_id: pool_id.into(),
            client_id: client_id.into(),
            client_secret: None,
            endpoint: None,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Sets the client secret.
    #[must_use]
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Sets the endpoint override.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

const fn default_connection_timeout() -> Duration {
    DEFAULT_CONNECTION_TIMEOUT
}

const fn default_read_timeout() -> Duration {
    DEFAULT_READ_TIMEOUT
}

/// Serde support for Duration as whole seconds.
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PoolConfig::new("us-east-1_abc123", "client1");
        assert_eq!(config.pool_id, "us-east-1_abc123");
        assert_eq!(config.client_id, "client1");
        assert!(config.client_secret.is_none());
        assert!(config.endpoint.is_none());
        assert_eq!(config.connection_timeout, Duration::from_secs(5));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let config: PoolConfig = serde_json::from_str(
            r#"{"pool_id":"eu-west-1_pool","client_id":"app"}"#,
        )
        .unwrap();

        assert_eq!(config, PoolConfig::new("eu-west-1_pool", "app"));
    }

    #[test]
    fn secret_is_not_serialized_when_absent() {
        let config = PoolConfig::new("us-east-1_abc123", "client1");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("client_secret"));

        let config = config.with_client_secret("s3cret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("client_secret"));
    }

    #[test]
    fn duration_round_trip() {
        let config = PoolConfig {
            connection_timeout: Duration::from_secs(2),
            read_timeout: Duration::from_secs(60),
            ..PoolConfig::new("us-east-1_abc123", "client1")
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: PoolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

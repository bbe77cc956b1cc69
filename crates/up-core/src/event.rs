//! Request lifecycle events.
//!
//! Provider handles expose an event-subscription capability so the
//! orchestrator (or any other interested party) can observe request
//! completion without knowing the concrete transport type. Events
//! carry the operation name and outcome only; request payloads,
//! passwords, and secret hashes never appear in an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventOutcome {
    /// The request completed with a response.
    Success,
    /// The request completed with a fault.
    Failure,
}

/// A request lifecycle event emitted by a provider handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEvent {
    /// Unique event identifier.
    pub id: Uuid,

    /// Provider operation name (e.g. `sign_up`, `admin_get_user`).
    pub operation: String,

    /// Outcome of the request.
    pub outcome: EventOutcome,

    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
}

impl RequestEvent {
    /// Creates an event with the given outcome, stamped now.
    #[must_use]
    pub fn new(operation: impl Into<String>, outcome: EventOutcome) -> Self {
        Self {
            id: Uuid::now_v7(),
            operation: operation.into(),
            outcome,
            timestamp: Utc::now(),
        }
    }

    /// Creates a success event.
    #[must_use]
    pub fn success(operation: impl Into<String>) -> Self {
        Self::new(operation, EventOutcome::Success)
    }

    /// Creates a failure event.
    #[must_use]
    pub fn failure(operation: impl Into<String>) -> Self {
        Self::new(operation, EventOutcome::Failure)
    }
}

/// Observer for request lifecycle events.
///
/// Implementations must be thread-safe: a provider transport may
/// deliver events from whatever execution context completed the call.
pub trait RequestObserver: Send + Sync {
    /// Called once per completed provider request.
    fn on_request(&self, event: &RequestEvent);
}

/// A [`RequestObserver`] that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, event: &RequestEvent) {
        match event.outcome {
            EventOutcome::Success => tracing::debug!(
                id = %event.id,
                operation = %event.operation,
                "provider request completed"
            ),
            EventOutcome::Failure => tracing::warn!(
                id = %event.id,
                operation = %event.operation,
                "provider request failed"
            ),
        }
    }
}

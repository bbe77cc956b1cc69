//! # up-core
//!
//! Core types shared across the user pool client crates:
//! the provider fault type, pool configuration, and request
//! lifecycle events.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod event;

pub use config::PoolConfig;
pub use error::{ProviderError, ProviderResult};
pub use event::{EventOutcome, RequestEvent, RequestObserver, TracingObserver};

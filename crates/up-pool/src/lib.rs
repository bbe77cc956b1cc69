//! # up-pool
//!
//! User pool orchestration over a callback-style identity provider.
//!
//! The crate has two halves. The completion adapter ([`invoke`],
//! [`Completion`]) bridges the provider's callback-reporting calls
//! into one-shot awaitable futures. The orchestrator ([`UserPool`])
//! builds provider requests, applies the secret-hash rule, caches the
//! client configuration, and translates the provider's not-found
//! fault into an ordinary empty lookup result.
//!
//! ## Security Note
//!
//! Passwords, client secrets, and secret hashes are never logged.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod adapter;
pub mod error;
pub mod pool;
pub mod provider;
pub mod user;

pub use adapter::{invoke, Completion};
pub use error::{PoolError, PoolResult};
pub use pool::UserPool;
pub use provider::IdentityProvider;
pub use user::PoolUser;

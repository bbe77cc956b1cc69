//! # up-crypto
//!
//! Secret hash computation for the user pool client, backed by
//! aws-lc-rs.
//!
//! ## Security Note
//!
//! The client secret is a shared credential. It is accepted by value,
//! used as an HMAC key, and never logged or echoed in errors.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod secret_hash;

pub use secret_hash::secret_hash;

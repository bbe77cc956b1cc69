//! # up-model
//!
//! Wire-level value objects for the user pool client: attributes and
//! attribute-list marshalling, password policy, user status, client
//! configuration, and per-operation request/response shapes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod attribute;
pub mod client;
pub mod ops;
pub mod policy;
pub mod user;

pub use attribute::{to_attribute_list, Attribute, AttributeMap};
pub use client::{ClientConfiguration, ClientDescription};
pub use policy::{PasswordPolicy, PoolPolicies, UserPoolDescription};
pub use user::{UserRecord, UserStatus};

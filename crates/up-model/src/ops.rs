//! Request and response shapes for the six pool operations.
//!
//! These are transient value objects: built per call, sent, and
//! discarded. Optional fields are skipped on the wire when absent, so
//! a request built without a client secret carries no hash field at
//! all.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::client::ClientDescription;
use crate::policy::UserPoolDescription;
use crate::user::{UserRecord, UserStatus};

/// How a confirmation code was delivered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryDetails {
    /// Masked destination (e.g. `b***@x.com`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Delivery medium (e.g. `EMAIL`, `SMS`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_medium: Option<String>,
    /// Attribute the code was sent to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
}

/// Self-service registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignUpRequest {
    /// Client application identifier.
    pub client_id: String,
    /// Username to register.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Marshalled user attributes.
    pub user_attributes: Vec<Attribute>,
    /// Marshalled validation data, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_data: Option<Vec<Attribute>>,
    /// Signing hash, present iff the client has a secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_hash: Option<String>,
}

/// Self-service registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignUpResponse {
    /// Whether the user is already confirmed.
    pub user_confirmed: bool,
    /// Where the confirmation code was delivered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_delivery_details: Option<DeliveryDetails>,
    /// Canonical identifier assigned to the new user.
    pub user_sub: String,
}

/// Administrative user creation request, scoped to the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserRequest {
    /// Pool identifier.
    pub user_pool_id: String,
    /// Username to create.
    pub username: String,
    /// Marshalled user attributes.
    pub user_attributes: Vec<Attribute>,
    /// Marshalled validation data, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_data: Option<Vec<Attribute>>,
    /// Signing hash, present iff the client has a secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_hash: Option<String>,
}

/// Administrative user creation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserResponse {
    /// The created user, as echoed by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
}

/// Administrative user lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminGetUserRequest {
    /// Pool identifier.
    pub user_pool_id: String,
    /// Username to look up.
    pub username: String,
}

/// Administrative user lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminGetUserResponse {
    /// Username as stored in the pool.
    pub username: String,
    /// Current user status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,
    /// Attributes attached to the user.
    #[serde(default)]
    pub user_attributes: Vec<Attribute>,
}

/// Pool description request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolRequest {
    /// Pool identifier.
    pub user_pool_id: String,
}

/// Pool description response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolResponse {
    /// The described pool.
    pub user_pool: UserPoolDescription,
}

/// Client description request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolClientRequest {
    /// Pool identifier.
    pub user_pool_id: String,
    /// Client application identifier.
    pub client_id: String,
}

/// Client description response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolClientResponse {
    /// The described client application.
    pub user_pool_client: ClientDescription,
}

/// Password-reset confirmation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmForgotPasswordRequest {
    /// Client application identifier.
    pub client_id: String,
    /// Username whose password is being reset.
    pub username: String,
    /// Confirmation token the user received.
    pub confirmation_code: String,
    /// New password.
    pub password: String,
    /// Signing hash, present iff the client has a secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_hash: Option<String>,
}

/// Password-reset confirmation response (empty on success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfirmForgotPasswordResponse {}

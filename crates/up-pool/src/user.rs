//! The per-user representation returned by lookups.

use std::fmt;
use std::sync::Arc;

use up_model::attribute::AttributeMap;
use up_model::ops::AdminGetUserResponse;
use up_model::user::UserStatus;

use crate::pool::UserPool;
use crate::provider::IdentityProvider;

/// Canonical-identifier attribute name.
const SUB_ATTRIBUTE: &str = "sub";

/// A user resolved from a pool lookup.
///
/// Carries the owning pool, the provider handle, and the client
/// secret so that follow-up per-user operations can be issued without
/// going back through the pool. The orchestrator supplies these
/// fields; it never inspects them again.
pub struct PoolUser {
    username: String,
    client_id: String,
    pool: UserPool,
    provider: Arc<dyn IdentityProvider>,
    client_secret: Option<String>,
    status: Option<UserStatus>,
    sub: Option<String>,
    attributes: AttributeMap,
}

impl PoolUser {
    /// Builds a user value from a lookup response.
    ///
    /// The canonical identifier is projected out of the `sub`
    /// attribute when present.
    pub(crate) fn from_lookup(pool: &UserPool, response: AdminGetUserResponse) -> Self {
        let attributes: AttributeMap = response
            .user_attributes
            .into_iter()
            .map(|attribute| (attribute.name, attribute.value))
            .collect();
        let sub = attributes.get(SUB_ATTRIBUTE).cloned();

        Self {
            username: response.username,
            client_id: pool.client_id().to_owned(),
            provider: pool.provider(),
            client_secret: pool.client_secret().map(str::to_owned),
            pool: pool.clone(),
            status: response.user_status,
            sub,
            attributes,
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the client application identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the owning pool.
    #[must_use]
    pub fn pool(&self) -> &UserPool {
        &self.pool
    }

    /// Returns the user's status, if the provider reported one.
    #[must_use]
    pub fn status(&self) -> Option<UserStatus> {
        self.status
    }

    /// Returns the canonical identifier, if the provider reported one.
    #[must_use]
    pub fn sub(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Returns all attributes.
    #[must_use]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Returns one attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Computes the signing hash for this user, iff the client has a
    /// secret configured.
    #[must_use]
    pub fn secret_hash(&self) -> Option<String> {
        self.client_secret
            .as_deref()
            .map(|secret| up_crypto::secret_hash(&self.username, &self.client_id, secret))
    }

    /// Returns the provider handle this user was resolved through.
    #[must_use]
    pub fn provider(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.provider)
    }
}

impl fmt::Debug for PoolUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolUser")
            .field("username", &self.username)
            .field("client_id", &self.client_id)
            .field("status", &self.status)
            .field("sub", &self.sub)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

//! The user pool orchestrator.
//!
//! Every operation is a linear sequence: validate, build the provider
//! request, invoke it through the completion adapter, await, translate
//! the response. The orchestrator holds no internal concurrency; the
//! only shared mutable state is the memoized client configuration.
//!
//! ## Security Note
//!
//! Passwords and secret hashes are built into requests and handed to
//! the provider; they are never logged here.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tokio_util::sync::CancellationToken;

use up_core::config::PoolConfig;
use up_core::event::TracingObserver;
use up_model::attribute::{to_attribute_list, AttributeMap};
use up_model::client::ClientConfiguration;
use up_model::ops::{
    AdminCreateUserRequest, AdminCreateUserResponse, AdminGetUserRequest,
    ConfirmForgotPasswordRequest, DescribeUserPoolClientRequest, DescribeUserPoolRequest,
    SignUpRequest, SignUpResponse,
};
use up_model::policy::PasswordPolicy;

use crate::adapter::invoke;
use crate::error::{PoolError, PoolResult};
use crate::provider::IdentityProvider;
use crate::user::PoolUser;

struct PoolInner {
    pool_id: String,
    client_id: String,
    client_secret: Option<String>,
    provider: Arc<dyn IdentityProvider>,
    client_configuration: OnceLock<ClientConfiguration>,
}

/// A configured user pool plus one registered client application.
///
/// The identity triple (pool id, client id, client secret) is fixed at
/// construction and never mutated. The pool is cheap to clone; clones
/// share the provider handle and the memoized client configuration.
#[derive(Clone)]
pub struct UserPool {
    inner: Arc<PoolInner>,
}

impl UserPool {
    /// Creates a pool client.
    ///
    /// The pool id must be of the form `<region>_<pool-name>` with
    /// both halves non-empty. An empty client secret is treated as no
    /// secret. A tracing-backed request observer is subscribed to the
    /// provider handle.
    ///
    /// ## Errors
    ///
    /// Returns `PoolError::Configuration` for a malformed pool id.
    pub fn new(
        pool_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: Option<String>,
        provider: Arc<dyn IdentityProvider>,
    ) -> PoolResult<Self> {
        let pool_id = pool_id.into();
        match pool_id.split_once('_') {
            Some((region, name)) if !region.is_empty() && !name.is_empty() => {}
            _ => {
                return Err(PoolError::configuration(format!(
                    "pool id `{pool_id}` must be of the form <region>_<pool-name>"
                )));
            }
        }

        let client_secret = client_secret.filter(|secret| !secret.is_empty());
        provider.subscribe(Arc::new(TracingObserver));

        Ok(Self {
            inner: Arc::new(PoolInner {
                pool_id,
                client_id: client_id.into(),
                client_secret,
                provider,
                client_configuration: OnceLock::new(),
            }),
        })
    }

    /// Creates a pool client from configuration.
    ///
    /// ## Errors
    ///
    /// Returns `PoolError::Configuration` for a malformed pool id.
    pub fn from_config(
        config: &PoolConfig,
        provider: Arc<dyn IdentityProvider>,
    ) -> PoolResult<Self> {
        Self::new(
            config.pool_id.clone(),
            config.client_id.clone(),
            config.client_secret.clone(),
            provider,
        )
    }

    /// Returns the pool identifier.
    #[must_use]
    pub fn pool_id(&self) -> &str {
        &self.inner.pool_id
    }

    /// Returns the region half of the pool identifier.
    #[must_use]
    pub fn region(&self) -> &str {
        self.inner
            .pool_id
            .split_once('_')
            .map_or("", |(region, _)| region)
    }

    /// Returns the pool-name half of the pool identifier.
    #[must_use]
    pub fn pool_name(&self) -> &str {
        self.inner
            .pool_id
            .split_once('_')
            .map_or("", |(_, name)| name)
    }

    /// Returns the client application identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.inner.client_id
    }

    /// Checks whether the client application has a secret configured.
    #[must_use]
    pub fn has_client_secret(&self) -> bool {
        self.inner.client_secret.is_some()
    }

    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.inner.client_secret.as_deref()
    }

    pub(crate) fn provider(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.inner.provider)
    }

    /// Computes the signing hash for a username, iff a secret is
    /// configured. Absent secret means no hash field on the request.
    fn secret_hash(&self, username: &str) -> Option<String> {
        self.inner
            .client_secret
            .as_deref()
            .map(|secret| up_crypto::secret_hash(username, &self.inner.client_id, secret))
    }

    fn require_username(username: &str) -> PoolResult<()> {
        if username.is_empty() {
            return Err(PoolError::validation("username must not be empty"));
        }
        Ok(())
    }

    fn require_attributes(attributes: Option<&AttributeMap>) -> PoolResult<&AttributeMap> {
        attributes.ok_or_else(|| PoolError::validation("attribute mapping is required"))
    }

    /// Registers a user through self-service sign-up.
    ///
    /// The attribute mapping is required; validation data is optional.
    /// Both failures here are raised before any provider call.
    ///
    /// ## Errors
    ///
    /// Returns `PoolError::Validation` for an empty username or a
    /// missing attribute mapping, or the provider's fault unchanged.
    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        attributes: Option<&AttributeMap>,
        validation_data: Option<&AttributeMap>,
    ) -> PoolResult<SignUpResponse> {
        Self::require_username(username)?;
        let attributes = Self::require_attributes(attributes)?;

        let request = SignUpRequest {
            client_id: self.inner.client_id.clone(),
            username: username.to_owned(),
            password: password.to_owned(),
            user_attributes: to_attribute_list(attributes),
            validation_data: validation_data.map(to_attribute_list),
            secret_hash: self.secret_hash(username),
        };

        tracing::debug!(username, pool_id = %self.inner.pool_id, "signing up user");
        let response = invoke(
            |req, done| self.inner.provider.sign_up(req, done),
            request,
        )
        .await?;
        Ok(response)
    }

    /// Creates a user through the administrative endpoint.
    ///
    /// Same attribute and secret-hash rules as [`sign_up`](Self::sign_up),
    /// without a password; the request is scoped to the pool id.
    ///
    /// ## Errors
    ///
    /// Returns `PoolError::Validation` for an empty username or a
    /// missing attribute mapping, or the provider's fault unchanged.
    pub async fn admin_create_user(
        &self,
        username: &str,
        attributes: Option<&AttributeMap>,
        validation_data: Option<&AttributeMap>,
    ) -> PoolResult<AdminCreateUserResponse> {
        Self::require_username(username)?;
        let attributes = Self::require_attributes(attributes)?;

        let request = AdminCreateUserRequest {
            user_pool_id: self.inner.pool_id.clone(),
            username: username.to_owned(),
            user_attributes: to_attribute_list(attributes),
            validation_data: validation_data.map(to_attribute_list),
            secret_hash: self.secret_hash(username),
        };

        tracing::debug!(username, pool_id = %self.inner.pool_id, "creating user (admin)");
        let response = invoke(
            |req, done| self.inner.provider.admin_create_user(req, done),
            request,
        )
        .await?;
        Ok(response)
    }

    /// Looks up a user by username.
    ///
    /// Absence of a user is an expected outcome for a lookup: a
    /// provider-reported not-found fault yields `Ok(None)` instead of
    /// an error. This is the only fault translation in the crate; the
    /// same underlying fault propagates unchanged from every other
    /// operation.
    ///
    /// ## Errors
    ///
    /// Returns `PoolError::Validation` for an empty username, or any
    /// provider fault other than not-found, unchanged.
    pub async fn find_by_username(&self, username: &str) -> PoolResult<Option<PoolUser>> {
        Self::require_username(username)?;

        let request = AdminGetUserRequest {
            user_pool_id: self.inner.pool_id.clone(),
            username: username.to_owned(),
        };

        match invoke(
            |req, done| self.inner.provider.admin_get_user(req, done),
            request,
        )
        .await
        {
            Ok(response) => Ok(Some(PoolUser::from_lookup(self, response))),
            Err(fault) if fault.is_user_not_found() => {
                tracing::debug!(username, "user not found; returning empty result");
                Ok(None)
            }
            Err(fault) => Err(fault.into()),
        }
    }

    /// Fetches the pool's password policy.
    ///
    /// Always round-trips; the policy is never cached.
    ///
    /// ## Errors
    ///
    /// Returns the provider's fault unchanged.
    pub async fn password_policy(&self) -> PoolResult<PasswordPolicy> {
        let request = DescribeUserPoolRequest {
            user_pool_id: self.inner.pool_id.clone(),
        };

        let response = invoke(
            |req, done| self.inner.provider.describe_user_pool(req, done),
            request,
        )
        .await?;
        Ok(response.user_pool.policies.password_policy)
    }

    /// Fetches the client application's attribute configuration,
    /// memoized for the lifetime of the pool.
    ///
    /// The cache is check-then-fetch-then-set without a lock around
    /// the fetch: two concurrent first calls may each issue a round
    /// trip, and whichever write lands second is discarded. The
    /// configuration is effectively static, so the discarded write is
    /// value-equal to the kept one. There is no refresh or eviction.
    ///
    /// ## Errors
    ///
    /// Returns the provider's fault unchanged.
    pub async fn client_configuration(&self) -> PoolResult<ClientConfiguration> {
        if let Some(configuration) = self.inner.client_configuration.get() {
            return Ok(configuration.clone());
        }

        let request = DescribeUserPoolClientRequest {
            user_pool_id: self.inner.pool_id.clone(),
            client_id: self.inner.client_id.clone(),
        };

        let response = invoke(
            |req, done| self.inner.provider.describe_user_pool_client(req, done),
            request,
        )
        .await?;

        let configuration = ClientConfiguration::from(response.user_pool_client);
        let _ = self.inner.client_configuration.set(configuration.clone());
        Ok(configuration)
    }

    /// Confirms a password reset with the token delivered to the user.
    ///
    /// The cancellation signal is checked only at entry. Once the
    /// provider call has started it runs to completion; the adapter
    /// does not propagate cancellation mid-flight.
    ///
    /// ## Errors
    ///
    /// Returns `PoolError::Cancelled` if the signal was already
    /// triggered at entry, or the provider's fault unchanged.
    pub async fn confirm_forgot_password(
        &self,
        username: &str,
        confirmation_code: &str,
        new_password: &str,
        cancel: &CancellationToken,
    ) -> PoolResult<()> {
        if cancel.is_cancelled() {
            return Err(PoolError::Cancelled);
        }

        let request = ConfirmForgotPasswordRequest {
            client_id: self.inner.client_id.clone(),
            username: username.to_owned(),
            confirmation_code: confirmation_code.to_owned(),
            password: new_password.to_owned(),
            secret_hash: self.secret_hash(username),
        };

        tracing::debug!(username, pool_id = %self.inner.pool_id, "confirming password reset");
        invoke(
            |req, done| self.inner.provider.confirm_forgot_password(req, done),
            request,
        )
        .await?;
        Ok(())
    }
}

impl fmt::Debug for UserPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPool")
            .field("pool_id", &self.inner.pool_id)
            .field("client_id", &self.inner.client_id)
            .field(
                "client_secret",
                if self.inner.client_secret.is_some() {
                    &"<redacted>"
                } else {
                    &"<none>"
                },
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use up_model::ops::{
        AdminGetUserResponse, ConfirmForgotPasswordResponse, DescribeUserPoolClientResponse,
        DescribeUserPoolResponse,
    };

    use crate::adapter::Completion;

    struct UnusedProvider;

    impl IdentityProvider for UnusedProvider {
        fn sign_up(&self, _request: SignUpRequest, _completion: Completion<SignUpResponse>) {
            unreachable!("provider must not be called");
        }

        fn admin_create_user(
            &self,
            _request: AdminCreateUserRequest,
            _completion: Completion<AdminCreateUserResponse>,
        ) {
            unreachable!("provider must not be called");
        }

        fn admin_get_user(
            &self,
            _request: AdminGetUserRequest,
            _completion: Completion<AdminGetUserResponse>,
        ) {
            unreachable!("provider must not be called");
        }

        fn describe_user_pool(
            &self,
            _request: DescribeUserPoolRequest,
            _completion: Completion<DescribeUserPoolResponse>,
        ) {
            unreachable!("provider must not be called");
        }

        fn describe_user_pool_client(
            &self,
            _request: DescribeUserPoolClientRequest,
            _completion: Completion<DescribeUserPoolClientResponse>,
        ) {
            unreachable!("provider must not be called");
        }

        fn confirm_forgot_password(
            &self,
            _request: ConfirmForgotPasswordRequest,
            _completion: Completion<ConfirmForgotPasswordResponse>,
        ) {
            unreachable!("provider must not be called");
        }
    }

    fn pool(pool_id: &str, secret: Option<&str>) -> PoolResult<UserPool> {
        UserPool::new(
            pool_id,
            "client1",
            secret.map(str::to_owned),
            Arc::new(UnusedProvider),
        )
    }

    #[test]
    fn pool_id_requires_region_separator() {
        assert!(matches!(
            pool("nounderscore", None),
            Err(PoolError::Configuration(_))
        ));
        assert!(matches!(pool("_abc123", None), Err(PoolError::Configuration(_))));
        assert!(matches!(pool("us-east-1_", None), Err(PoolError::Configuration(_))));
    }

    #[test]
    fn pool_id_is_stored_unchanged() {
        let pool = pool("us-east-1_abc123", None).unwrap();
        assert_eq!(pool.pool_id(), "us-east-1_abc123");
        assert_eq!(pool.region(), "us-east-1");
        assert_eq!(pool.pool_name(), "abc123");
        assert_eq!(pool.client_id(), "client1");
    }

    #[test]
    fn empty_secret_normalizes_to_none() {
        let pool = pool("us-east-1_abc123", Some("")).unwrap();
        assert!(!pool.has_client_secret());

        let pool_with_secret = self::pool("us-east-1_abc123", Some("topsecret")).unwrap();
        assert!(pool_with_secret.has_client_secret());
    }

    #[test]
    fn from_config_carries_the_identity_triple() {
        let config = PoolConfig::new("eu-west-1_pool", "app").with_client_secret("s3cret");
        let pool = UserPool::from_config(&config, Arc::new(UnusedProvider)).unwrap();
        assert_eq!(pool.pool_id(), "eu-west-1_pool");
        assert_eq!(pool.client_id(), "app");
        assert!(pool.has_client_secret());
    }

    #[test]
    fn debug_redacts_the_secret() {
        let pool = pool("us-east-1_abc123", Some("topsecret")).unwrap();
        let printed = format!("{pool:?}");
        assert!(!printed.contains("topsecret"));
        assert!(printed.contains("<redacted>"));
    }
}

//! Identity provider capability trait.

use std::sync::Arc;

use up_core::event::RequestObserver;
use up_model::ops::{
    AdminCreateUserRequest, AdminCreateUserResponse, AdminGetUserRequest, AdminGetUserResponse,
    ConfirmForgotPasswordRequest, ConfirmForgotPasswordResponse, DescribeUserPoolClientRequest,
    DescribeUserPoolClientResponse, DescribeUserPoolRequest, DescribeUserPoolResponse,
    SignUpRequest, SignUpResponse,
};

use crate::adapter::Completion;

/// Callback-style capability set of an identity provider transport.
///
/// Each method performs its remote call asynchronously and reports the
/// outcome through the supplied [`Completion`], exactly once, from
/// whatever execution context the transport chooses. The orchestrator
/// never inspects the concrete type behind this trait, so test doubles
/// can substitute any subset of behavior.
///
/// ## Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`).
/// - Resolving a completion more than once is absorbed by the
///   adapter; resolving it zero times surfaces to the caller as an
///   interrupted-call fault.
pub trait IdentityProvider: Send + Sync {
    /// Registers a user through the self-service sign-up endpoint.
    fn sign_up(&self, request: SignUpRequest, completion: Completion<SignUpResponse>);

    /// Creates a user through the administrative endpoint.
    fn admin_create_user(
        &self,
        request: AdminCreateUserRequest,
        completion: Completion<AdminCreateUserResponse>,
    );

    /// Looks up a user through the administrative endpoint.
    fn admin_get_user(
        &self,
        request: AdminGetUserRequest,
        completion: Completion<AdminGetUserResponse>,
    );

    /// Describes the pool.
    fn describe_user_pool(
        &self,
        request: DescribeUserPoolRequest,
        completion: Completion<DescribeUserPoolResponse>,
    );

    /// Describes the client application.
    fn describe_user_pool_client(
        &self,
        request: DescribeUserPoolClientRequest,
        completion: Completion<DescribeUserPoolClientResponse>,
    );

    /// Confirms a password reset with the token delivered to the user.
    fn confirm_forgot_password(
        &self,
        request: ConfirmForgotPasswordRequest,
        completion: Completion<ConfirmForgotPasswordResponse>,
    );

    /// Subscribes an observer to request lifecycle events.
    ///
    /// Transports that track request lifecycles deliver one event per
    /// completed call. The default implementation discards the
    /// observer, so transports and test doubles without lifecycle
    /// tracking need no extra code.
    fn subscribe(&self, observer: Arc<dyn RequestObserver>) {
        let _ = observer;
    }
}

//! Completion adapter: callback-style calls as one-shot futures.
//!
//! A provider operation takes a request and a [`Completion`] and
//! reports its outcome through the completion instead of returning a
//! future. [`invoke`] wires one up: it builds a single-resolution
//! completion, hands it to the operation, and awaits the outcome.
//!
//! Cancellation is not propagated. Dropping the returned future stops
//! waiting but the underlying call runs to completion (or to the
//! transport's own timeout) on its own.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use up_core::error::{ProviderError, ProviderResult};

/// Single-resolution completion for one provider call.
///
/// The first call to [`succeed`](Self::succeed) or
/// [`fail`](Self::fail) resolves the paired future; later calls are
/// no-ops. A provider resolving twice is a protocol violation, and the
/// violation is absorbed rather than raised. Resolution may happen
/// from any thread or execution context the transport chooses.
pub struct Completion<T> {
    tx: Arc<Mutex<Option<oneshot::Sender<ProviderResult<T>>>>>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Completion<T> {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<ProviderResult<T>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Arc::new(Mutex::new(Some(tx))),
            },
            rx,
        )
    }

    /// Resolves the call with a response.
    ///
    /// Returns `true` if this call performed the resolution, `false`
    /// if the completion was already resolved.
    pub fn succeed(&self, response: T) -> bool {
        self.resolve(Ok(response))
    }

    /// Resolves the call with a fault.
    ///
    /// Returns `true` if this call performed the resolution, `false`
    /// if the completion was already resolved.
    pub fn fail(&self, fault: ProviderError) -> bool {
        self.resolve(Err(fault))
    }

    /// Checks whether the completion has already been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.tx.lock().is_none()
    }

    fn resolve(&self, outcome: ProviderResult<T>) -> bool {
        match self.tx.lock().take() {
            Some(tx) => {
                // A dropped receiver means the caller stopped waiting;
                // the outcome is discarded.
                let _ = tx.send(outcome);
                true
            }
            None => false,
        }
    }
}

/// Invokes a callback-style operation and awaits its single outcome.
///
/// The operation is called exactly once, synchronously, with the
/// request and a fresh [`Completion`]. The returned future resolves
/// when the completion does. The adapter adds no error kinds of its
/// own; the one exception is a provider that drops its completion
/// without resolving it, which surfaces as
/// [`ProviderError::Interrupted`].
pub async fn invoke<Q, R, F>(operation: F, request: Q) -> ProviderResult<R>
where
    F: FnOnce(Q, Completion<R>),
{
    let (completion, receiver) = Completion::channel();
    operation(request, completion);
    receiver.await.unwrap_or(Err(ProviderError::Interrupted))
}

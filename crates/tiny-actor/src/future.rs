//! # Ask Futures
//!
//! [`AskFuture`] is the caller's half of a request/response exchange. The other half, a
//! crate-private `Promise`, travels inside the request envelope and is resolved when the
//! target replies.
//!
//! A future is resolved at most once. The first of these wins and every later attempt
//! is ignored:
//!
//! - the target calls [`Context::reply`](crate::Context::reply) (fulfilled),
//! - delivery fails, or the request is dropped unanswered (failed),
//! - the caller calls [`AskFuture::cancel`] (cancelled).
//!
//! `wait` with a timeout never resolves anything; an expired wait leaves the future
//! pending.

use crate::envelope::Message;
use crate::error::AskError;
use crate::pid::Pid;
use std::any::Any;
use std::fmt;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;

enum Outcome {
    Pending,
    Fulfilled(Message),
    Failed(AskError),
    Cancelled,
    /// The result was moved out by `AskFuture::result`.
    Taken,
}

impl Outcome {
    fn is_resolved(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }
}

/// Single-assignment cell shared by both halves.
struct Slot {
    outcome: Mutex<Outcome>,
    resolved: Notify,
}

impl Slot {
    fn lock(&self) -> MutexGuard<'_, Outcome> {
        self.outcome.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_resolved(&self) -> bool {
        self.lock().is_resolved()
    }

    /// Returns false if the slot was already resolved.
    fn settle(&self, outcome: Outcome) -> bool {
        {
            let mut current = self.lock();
            if current.is_resolved() {
                return false;
            }
            *current = outcome;
        }
        self.resolved.notify_waiters();
        true
    }

    async fn wait_resolved(&self) {
        loop {
            let notified = self.resolved.notified();
            tokio::pin!(notified);
            // Register before checking so a settle in between is not missed.
            notified.as_mut().enable();
            if self.is_resolved() {
                return;
            }
            notified.await;
        }
    }

    fn take(&self) -> Outcome {
        mem::replace(&mut *self.lock(), Outcome::Taken)
    }
}

/// Handle to the eventual reply of an [`ask`](crate::ActorSystem::ask).
///
/// ```rust
/// use std::time::Duration;
/// use tiny_actor::{ActorSystem, AskError, Pid};
///
/// # #[tokio::main]
/// # async fn main() {
/// let system = ActorSystem::new();
/// let future = system.ask(&Pid::new("missing"), "hello");
/// assert!(future.wait(Duration::from_secs(1)).await);
/// assert!(matches!(future.result().await, Err(AskError::NotFound(_))));
/// # }
/// ```
pub struct AskFuture {
    slot: Arc<Slot>,
    target: Pid,
}

impl AskFuture {
    /// Creates an unresolved future together with the promise that resolves it.
    pub(crate) fn pending(target: Pid) -> (Self, Promise) {
        let slot = Arc::new(Slot {
            outcome: Mutex::new(Outcome::Pending),
            resolved: Notify::new(),
        });
        let promise = Promise {
            slot: slot.clone(),
            target: target.clone(),
        };
        (Self { slot, target }, promise)
    }

    /// The PID this request was addressed to.
    pub fn target(&self) -> &Pid {
        &self.target
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.is_resolved()
    }

    /// Suspends until the future is resolved and returns the reply or the error.
    ///
    /// Without a timeout this may never return: a target that holds on to the request
    /// forever keeps the future pending. Pair with [`wait`](Self::wait) when in doubt.
    pub async fn result(self) -> Result<Message, AskError> {
        self.slot.wait_resolved().await;
        match self.slot.take() {
            Outcome::Fulfilled(reply) => Ok(reply),
            Outcome::Failed(error) => Err(error),
            Outcome::Cancelled => Err(AskError::Cancelled),
            // `result` consumes the only handle, so nothing else takes the outcome.
            Outcome::Pending | Outcome::Taken => Err(AskError::Cancelled),
        }
    }

    /// Like [`result`](Self::result), then downcasts the reply to `T`.
    pub async fn result_as<T: Any>(self) -> Result<T, AskError> {
        let reply = self.result().await?;
        reply
            .downcast::<T>()
            .map(|reply| *reply)
            .map_err(|_| AskError::UnexpectedReply(std::any::type_name::<T>()))
    }

    /// Waits up to `timeout` for resolution. Returns whether the future resolved in
    /// time; a cancelled future counts as resolved.
    pub async fn wait(&self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.slot.wait_resolved())
            .await
            .is_ok()
    }

    /// Cancels the request. No effect once the future is resolved; calling it twice is
    /// harmless.
    pub fn cancel(&self) {
        if self.slot.settle(Outcome::Cancelled) {
            tracing::debug!(target_pid = %self.target, "Ask cancelled");
        }
    }
}

impl fmt::Debug for AskFuture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AskFuture")
            .field("target", &self.target)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// The resolving half of an [`AskFuture`].
///
/// Dropping a promise that was never resolved fails the future with
/// [`AskError::Unanswered`].
pub(crate) struct Promise {
    slot: Arc<Slot>,
    target: Pid,
}

impl Promise {
    pub(crate) fn fulfill(self, reply: Message) {
        self.slot.settle(Outcome::Fulfilled(reply));
    }

    pub(crate) fn fail(self, error: AskError) {
        self.slot.settle(Outcome::Failed(error));
    }

    /// Resolves once the future is resolved by anyone, typically by `cancel`.
    pub(crate) fn resolution(&self) -> Resolution {
        Resolution {
            slot: self.slot.clone(),
        }
    }
}

impl Drop for Promise {
    fn drop(&mut self) {
        self.slot
            .settle(Outcome::Failed(AskError::Unanswered(self.target.clone())));
    }
}

/// Observer of a future's resolution that does not keep the request alive.
pub(crate) struct Resolution {
    slot: Arc<Slot>,
}

impl Resolution {
    pub(crate) async fn wait(&self) {
        self.slot.wait_resolved().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> (AskFuture, Promise) {
        AskFuture::pending(Pid::new("target"))
    }

    #[tokio::test]
    async fn fulfilled_future_yields_reply() {
        let (future, promise) = pending();
        assert!(!future.is_resolved());

        promise.fulfill(Box::new(42u32));

        assert!(future.wait(Duration::from_millis(10)).await);
        assert_eq!(future.result_as::<u32>().await, Ok(42));
    }

    #[tokio::test]
    async fn first_resolution_wins() {
        let (future, promise) = pending();
        future.cancel();
        promise.fulfill(Box::new("late"));

        assert_eq!(future.result().await.err(), Some(AskError::Cancelled));
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let (future, _promise) = pending();
        future.cancel();
        future.cancel();

        assert!(future.wait(Duration::from_millis(10)).await);
        assert_eq!(future.result().await.err(), Some(AskError::Cancelled));
    }

    #[tokio::test]
    async fn dropped_promise_fails_as_unanswered() {
        let (future, promise) = pending();
        drop(promise);

        assert_eq!(
            future.result().await.err(),
            Some(AskError::Unanswered(Pid::new("target")))
        );
    }

    #[tokio::test]
    async fn wait_timeout_leaves_future_pending() {
        let (future, promise) = pending();

        assert!(!future.wait(Duration::from_millis(20)).await);
        assert!(!future.is_resolved());

        promise.fulfill(Box::new(String::from("done")));
        assert_eq!(future.result_as::<String>().await.as_deref(), Ok("done"));
    }

    #[tokio::test]
    async fn result_as_rejects_other_types() {
        let (future, promise) = pending();
        promise.fulfill(Box::new(1u8));

        assert!(matches!(
            future.result_as::<String>().await,
            Err(AskError::UnexpectedReply(_))
        ));
    }

    #[tokio::test]
    async fn resolution_observes_cancel() {
        let (future, promise) = pending();
        let resolution = promise.resolution();

        let waiter = tokio::spawn(async move { resolution.wait().await });
        future.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("resolution should observe cancel")
            .unwrap();
    }
}

//! # Per-Message Context
//!
//! A fresh [`Context`] is built for every envelope an actor dequeues. It owns the
//! current message and knows who sent it, and it routes outgoing messages back through
//! the [`ActorSystem`] the actor lives in.

use crate::envelope::{Envelope, Message};
use crate::future::{AskFuture, Promise};
use crate::pid::Pid;
use crate::system::ActorSystem;
use std::any::Any;
use tracing::debug;

/// Interaction handle for the message being processed.
///
/// The context is handed out as `&mut Context` and dropped when
/// [`receive`](crate::Actor::receive) returns, so it cannot outlive the message.
pub struct Context {
    system: ActorSystem,
    self_pid: Pid,
    sender: Pid,
    message: Option<Message>,
    reply_to: Option<Promise>,
}

impl Context {
    pub(crate) fn new(system: ActorSystem, self_pid: Pid, envelope: Envelope) -> Self {
        let (message, sender, reply_to) = envelope.into_parts();
        Self {
            system,
            self_pid,
            sender,
            message: Some(message),
            reply_to,
        }
    }

    /// This actor's PID.
    pub fn self_pid(&self) -> &Pid {
        &self.self_pid
    }

    /// PID of whoever sent the current message; [`Pid::nobody`] for messages injected
    /// from outside any actor.
    pub fn sender(&self) -> &Pid {
        &self.sender
    }

    /// The system this actor is registered with. Use it to spawn or stop actors.
    pub fn system(&self) -> &ActorSystem {
        &self.system
    }

    /// Borrows the current message as `T`, or `None` if it is something else (or has
    /// already been taken).
    pub fn message<T: Any>(&self) -> Option<&T> {
        self.message.as_deref()?.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.message::<T>().is_some()
    }

    /// Moves the current message out as `T`. On a type mismatch the message stays in
    /// place and `None` is returned.
    pub fn take_message<T: Any>(&mut self) -> Option<T> {
        let message = self.message.take()?;
        match message.downcast::<T>() {
            Ok(message) => Some(*message),
            Err(message) => {
                self.message = Some(message);
                None
            }
        }
    }

    /// Moves the current message out without looking at its type.
    pub fn take_any(&mut self) -> Option<Message> {
        self.message.take()
    }

    /// Whether the current message came from `ask` and has not been replied to yet.
    pub fn is_ask(&self) -> bool {
        self.reply_to.is_some()
    }

    /// Fire-and-forget send. Suspends while the target's mailbox is full; unknown
    /// targets are ignored.
    pub async fn send<M>(&self, to: &Pid, message: M)
    where
        M: Any + Send + Sync,
    {
        self.system
            .route(self.self_pid.clone(), to, Box::new(message))
            .await;
    }

    /// Answers the current message.
    ///
    /// If the message was sent with `ask`, the first reply resolves the asker's
    /// [`AskFuture`]. Otherwise (and for any further reply) it is sent to
    /// [`sender`](Self::sender) like a normal message.
    pub async fn reply<M>(&mut self, message: M)
    where
        M: Any + Send + Sync,
    {
        self.reply_any(Box::new(message)).await;
    }

    /// [`reply`](Self::reply) for a payload that is already type-erased. Passing a
    /// [`Message`] to `reply` would box it a second time.
    pub async fn reply_any(&mut self, message: Message) {
        if let Some(promise) = self.reply_to.take() {
            debug!(pid = %self.self_pid, to = %self.sender, "Reply to ask");
            promise.fulfill(message);
            return;
        }
        self.system
            .route(self.self_pid.clone(), &self.sender, message)
            .await;
    }

    /// Sends `message` to `to` and returns a future for its reply.
    ///
    /// Awaiting the result inside `receive` blocks this actor until the reply arrives,
    /// so asking yourself from inside `receive` never completes.
    pub fn ask<M>(&self, to: &Pid, message: M) -> AskFuture
    where
        M: Any + Send + Sync,
    {
        self.system
            .ask_from(self.self_pid.clone(), to.clone(), Box::new(message))
    }
}

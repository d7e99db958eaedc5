//! # Envelopes
//!
//! Every message travels through a mailbox wrapped in an [`Envelope`] that records who
//! sent it. Payloads are type-erased; the runtime never looks inside them.

use crate::error::AskError;
use crate::future::Promise;
use crate::pid::Pid;
use std::any::Any;
use std::fmt;

/// A type-erased message payload.
///
/// Receivers recover the concrete type with a downcast, see
/// [`Context::message`](crate::Context::message).
pub type Message = Box<dyn Any + Send + Sync>;

/// A message paired with the PID of its sender.
pub struct Envelope {
    message: Message,
    sender: Pid,
    reply_to: Option<Promise>,
}

impl Envelope {
    pub fn new(message: Message, sender: Pid) -> Self {
        Self {
            message,
            sender,
            reply_to: None,
        }
    }

    /// An envelope produced by `ask`: replying to it resolves the asker's future.
    pub(crate) fn asked(message: Message, sender: Pid, reply_to: Promise) -> Self {
        Self {
            message,
            sender,
            reply_to: Some(reply_to),
        }
    }

    pub fn sender(&self) -> &Pid {
        &self.sender
    }

    pub fn message(&self) -> &(dyn Any + Send + Sync) {
        self.message.as_ref()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.message.downcast_ref::<T>()
    }

    pub fn into_message(self) -> Message {
        self.message
    }

    pub(crate) fn into_parts(self) -> (Message, Pid, Option<Promise>) {
        (self.message, self.sender, self.reply_to)
    }

    /// Fails the pending ask this envelope belongs to, if any.
    pub(crate) fn fail(self, error: AskError) {
        if let Some(promise) = self.reply_to {
            promise.fail(error);
        }
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("sender", &self.sender)
            .field("asked", &self.reply_to.is_some())
            .finish_non_exhaustive()
    }
}

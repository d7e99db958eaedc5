//! # Runtime Errors
//!
//! Error types surfaced by the actor system. `send` and `stop` never fail, so the
//! only fallible paths are spawning under a name and asking.

use crate::pid::Pid;

/// Errors returned when registering an actor.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SpawnError {
    #[error("Actor with name {0} already exists")]
    DuplicateName(String),
    /// The empty name is the nobody PID and cannot be registered.
    #[error("Actor name must not be empty")]
    EmptyName,
}

/// Errors delivered through an [`AskFuture`](crate::AskFuture).
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum AskError {
    #[error("Actor {0} does not exist")]
    NotFound(Pid),
    #[error("Future cancelled")]
    Cancelled,
    /// The request reached the target (or its queue) but was dropped without a reply.
    #[error("Actor {0} dropped the request without replying")]
    Unanswered(Pid),
    #[error("Reply is not a {0}")]
    UnexpectedReply(&'static str),
}

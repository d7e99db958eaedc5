//! Error types for the Counter actor.

use thiserror::Error;
use tiny_actor::AskError;

/// Errors that can occur when querying the counter.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CounterError {
    /// The counter did not answer within the client's timeout.
    #[error("Counter did not answer in time")]
    Timeout,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] AskError),
}

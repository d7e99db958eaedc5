//! Error types for the rally actors.

use thiserror::Error;
use tiny_actor::AskError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RallyError {
    #[error("Rally did not finish {rounds} rounds in time ({completed} completed)")]
    Unfinished { rounds: u32, completed: u32 },

    #[error("Pinger did not answer in time")]
    Timeout,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] AskError),
}

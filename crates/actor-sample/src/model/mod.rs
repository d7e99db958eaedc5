//! Message types exchanged by the sample actors.
//!
//! The runtime is schema-less, so each actor documents the messages it understands
//! here and downcasts to them in `receive`.

/// Sent by the pinger; the ponger answers with a [`Pong`] carrying the same round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ping {
    pub round: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pong {
    pub round: u32,
}

/// Commands understood by the pinger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RallyCommand {
    /// Starts a rally of `rounds` ping/pong exchanges.
    Serve { rounds: u32 },
    /// Asks for the number of completed rounds; answered with a `u32`.
    Status,
}

/// Commands understood by the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterCommand {
    Add(u64),
    Reset,
    /// Answered with the current total as a `u64`.
    Get,
}

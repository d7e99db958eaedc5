//! # Rally Actors
//!
//! Two actors playing ping/pong through the runtime.
//!
//! - [`Ponger`] answers every [`Ping`] with a [`Pong`] of the same round via `reply`.
//! - [`Pinger`] serves a rally: it keeps pinging until the requested number of rounds
//!   has been returned, and reports each returned ball to the counter.
//!
//! ```text
//! caller --Serve{3}--> pinger --Ping{1}--> ponger
//!                      pinger <--Pong{1}-- ponger      pinger --Add(1)--> counter
//!                      pinger --Ping{2}--> ponger
//!                      ...
//! ```

pub mod error;

pub use error::*;

use crate::model::{CounterCommand, Ping, Pong, RallyCommand};
use async_trait::async_trait;
use tiny_actor::{Actor, Context, Pid};
use tracing::{debug, info, warn};

/// Answers pings.
#[derive(Debug, Default)]
pub struct Ponger;

#[async_trait]
impl Actor for Ponger {
    async fn receive(&mut self, ctx: &mut Context) {
        match ctx.message::<Ping>().copied() {
            Some(Ping { round }) => {
                debug!(round, from = %ctx.sender(), "Ping");
                ctx.reply(Pong { round }).await;
            }
            None => warn!(sender = %ctx.sender(), "Ponger ignored unknown message"),
        }
    }
}

/// Serves rallies against a ponger and tallies returned balls on a counter.
#[derive(Debug)]
pub struct Pinger {
    ponger: Pid,
    counter: Pid,
    rounds: u32,
    completed: u32,
}

impl Pinger {
    pub fn new(ponger: Pid, counter: Pid) -> Self {
        Self {
            ponger,
            counter,
            rounds: 0,
            completed: 0,
        }
    }

    async fn on_command(&mut self, ctx: &mut Context, command: RallyCommand) {
        match command {
            RallyCommand::Serve { rounds } => {
                info!(rounds, "Serve");
                self.rounds = rounds;
                self.completed = 0;
                if rounds > 0 {
                    ctx.send(&self.ponger, Ping { round: 1 }).await;
                }
            }
            RallyCommand::Status => ctx.reply(self.completed).await,
        }
    }

    async fn on_pong(&mut self, ctx: &mut Context, pong: Pong) {
        // A pong from an earlier rally that was interrupted by a new serve.
        if pong.round != self.completed + 1 {
            debug!(round = pong.round, expected = self.completed + 1, "Stale pong");
            return;
        }
        self.completed = pong.round;
        ctx.send(&self.counter, CounterCommand::Add(1)).await;

        if self.completed < self.rounds {
            ctx.send(
                &self.ponger,
                Ping {
                    round: self.completed + 1,
                },
            )
            .await;
        } else {
            info!(rounds = self.completed, "Rally finished");
        }
    }
}

#[async_trait]
impl Actor for Pinger {
    async fn receive(&mut self, ctx: &mut Context) {
        if let Some(command) = ctx.message::<RallyCommand>().copied() {
            self.on_command(ctx, command).await;
        } else if let Some(pong) = ctx.message::<Pong>().copied() {
            self.on_pong(ctx, pong).await;
        } else {
            warn!(sender = %ctx.sender(), "Pinger ignored unknown message");
        }
    }
}

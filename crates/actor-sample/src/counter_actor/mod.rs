//! # Counter Actor
//!
//! Keeps a running total. State is a plain `u64`: the runtime never runs two
//! `receive` calls of one actor at once.

pub mod error;

pub use error::*;

use crate::model::CounterCommand;
use async_trait::async_trait;
use tiny_actor::{Actor, Context, Pid};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct Counter {
    total: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Actor for Counter {
    async fn receive(&mut self, ctx: &mut Context) {
        match ctx.take_message::<CounterCommand>() {
            Some(CounterCommand::Add(n)) => match self.total.checked_add(n) {
                Some(total) => {
                    self.total = total;
                    debug!(total, added = n, "Add");
                }
                None => warn!(total = self.total, added = n, "Add ignored: total would overflow"),
            },
            Some(CounterCommand::Reset) => {
                info!(previous = self.total, "Reset");
                self.total = 0;
            }
            Some(CounterCommand::Get) => ctx.reply(self.total).await,
            None => warn!(sender = %ctx.sender(), "Counter ignored unknown message"),
        }
    }

    async fn on_stop(&mut self, pid: &Pid) {
        info!(%pid, total = self.total, "Counter final state");
    }
}

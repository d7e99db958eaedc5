//! # Counter Client
//!
//! High-level API for the [`Counter`](crate::counter_actor::Counter) actor.

use super::{ask_within, DEFAULT_ASK_TIMEOUT};
use crate::counter_actor::CounterError;
use crate::model::CounterCommand;
use std::time::Duration;
use tiny_actor::{ActorSystem, Pid};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CounterClient {
    system: ActorSystem,
    pid: Pid,
    timeout: Duration,
}

impl CounterClient {
    pub fn new(system: ActorSystem, pid: Pid) -> Self {
        Self {
            system,
            pid,
            timeout: DEFAULT_ASK_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    #[instrument(skip(self))]
    pub async fn add(&self, n: u64) {
        debug!("Sending request");
        self.system.send(&self.pid, CounterCommand::Add(n)).await;
    }

    #[instrument(skip(self))]
    pub async fn reset(&self) {
        debug!("Sending request");
        self.system.send(&self.pid, CounterCommand::Reset).await;
    }

    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<u64, CounterError> {
        debug!("Sending request");
        ask_within(&self.system, &self.pid, CounterCommand::Get, self.timeout)
            .await
            .ok_or(CounterError::Timeout)?
            .map_err(CounterError::from)
    }
}

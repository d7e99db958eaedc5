//! # Rally Client
//!
//! Drives the [`Pinger`](crate::rally_actor::Pinger): serve a rally, check progress,
//! wait for it to finish.

use super::{ask_within, DEFAULT_ASK_TIMEOUT};
use crate::model::RallyCommand;
use crate::rally_actor::RallyError;
use std::time::Duration;
use tiny_actor::{ActorSystem, Pid};
use tokio::time::Instant;
use tracing::{debug, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Clone)]
pub struct RallyClient {
    system: ActorSystem,
    pinger: Pid,
    timeout: Duration,
}

impl RallyClient {
    pub fn new(system: ActorSystem, pinger: Pid) -> Self {
        Self {
            system,
            pinger,
            timeout: DEFAULT_ASK_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self))]
    pub async fn serve(&self, rounds: u32) {
        debug!("Sending request");
        self.system
            .send(&self.pinger, RallyCommand::Serve { rounds })
            .await;
    }

    /// Number of rounds completed in the current rally.
    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<u32, RallyError> {
        ask_within(&self.system, &self.pinger, RallyCommand::Status, self.timeout)
            .await
            .ok_or(RallyError::Timeout)?
            .map_err(RallyError::from)
    }

    /// Polls until `rounds` rounds are complete or `within` has passed.
    pub async fn wait_finished(&self, rounds: u32, within: Duration) -> Result<(), RallyError> {
        let deadline = Instant::now() + within;
        loop {
            let completed = self.status().await?;
            if completed >= rounds {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(RallyError::Unfinished { rounds, completed });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

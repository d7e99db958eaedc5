//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the work is. The
//! [`RallySystem`] spawns the sample actors under well-known names, hands out typed
//! clients, and shuts everything down again.
//!
//! ## Wiring
//!
//! Actors know each other only by [`Pid`](tiny_actor::Pid). The pinger needs the PIDs of
//! the ponger and the counter, so those are spawned first:
//!
//! ```rust,ignore
//! let counter = system.spawn_named(COUNTER, Counter::new()).await?;
//! let ponger = system.spawn_named(PONGER, Ponger).await?;
//! let pinger = system.spawn_named(PINGER, Pinger::new(ponger, counter.clone())).await?;
//! ```
//!
//! Anything else can find them later through
//! [`get_actor_by_name`](tiny_actor::ActorSystem::get_actor_by_name).
//!
//! ## Graceful Shutdown
//!
//! [`RallySystem::shutdown`] stops every actor. Each one drains the messages already in
//! its mailbox, runs its `on_stop` hook, and only then does `shutdown` return.

use crate::clients::{CounterClient, RallyClient};
use crate::counter_actor::Counter;
use crate::rally_actor::{Pinger, Ponger};
use tiny_actor::{ActorSystem, Pid, SpawnError, SystemConfig};
use tracing::{info, warn};

pub const COUNTER: &str = "counter";
pub const PONGER: &str = "ponger";
pub const PINGER: &str = "pinger";

/// The sample actors, running.
pub struct RallySystem {
    pub system: ActorSystem,
    pub counter_client: CounterClient,
    pub rally_client: RallyClient,
}

impl RallySystem {
    pub async fn start() -> Result<Self, SpawnError> {
        Self::start_with(ActorSystem::new()).await
    }

    pub async fn start_with_config(config: SystemConfig) -> Result<Self, SpawnError> {
        Self::start_with(ActorSystem::with_config(config)).await
    }

    /// Spawns the sample actors into an existing system. Fails if one of the
    /// well-known names is already taken there; actors spawned before the failure
    /// are stopped again.
    pub async fn start_with(system: ActorSystem) -> Result<Self, SpawnError> {
        let mut spawned = Vec::new();
        match Self::spawn_actors(&system, &mut spawned).await {
            Ok((counter, pinger)) => {
                info!(actors = system.len().await, "Rally system started");
                Ok(Self {
                    counter_client: CounterClient::new(system.clone(), counter),
                    rally_client: RallyClient::new(system.clone(), pinger),
                    system,
                })
            }
            Err(e) => {
                warn!(error = %e, rolled_back = spawned.len(), "Rally system failed to start");
                for pid in &spawned {
                    system.stop(pid).await;
                }
                Err(e)
            }
        }
    }

    /// Returns the counter and pinger PIDs. Every successful spawn is pushed onto
    /// `spawned`.
    async fn spawn_actors(
        system: &ActorSystem,
        spawned: &mut Vec<Pid>,
    ) -> Result<(Pid, Pid), SpawnError> {
        let counter = system.spawn_named(COUNTER, Counter::new()).await?;
        spawned.push(counter.clone());
        let ponger = system.spawn_named(PONGER, Ponger).await?;
        spawned.push(ponger.clone());
        let pinger = system
            .spawn_named(PINGER, Pinger::new(ponger, counter.clone()))
            .await?;
        spawned.push(pinger.clone());
        Ok((counter, pinger))
    }

    pub async fn shutdown(self) {
        info!("Shutting down rally system");
        self.system.shutdown().await;
    }
}

//! # Actor System
//!
//! The [`ActorSystem`] is registry and router in one. It owns every mailbox, the name
//! index, and the processing task of each actor.
//!
//! ## Registry
//!
//! One `RwLock` guards both indexes (PID -> actor cell, name -> PID). Lookups for
//! `send`, `ask` and `get_actor_by_name` take the read side; `spawn`, `spawn_named`,
//! `stop` and `shutdown` take the write side, so an actor's entries always appear and
//! disappear together.
//!
//! The mailbox sender is cloned out of the registry and the lock released *before*
//! enqueueing. A sender stuck on a full mailbox therefore never holds up spawns or
//! stops elsewhere in the system.
//!
//! ## Processing Loop
//!
//! Each actor runs in its own Tokio task and moves through three states:
//!
//! 1. **Running**: dequeue one envelope, run `receive` to completion, repeat.
//! 2. **Draining**: after `stop`, the mailbox is closed and the envelopes already
//!    queued are still delivered.
//! 3. **Terminated**: `on_stop` has run and the task has exited.
//!
//! `stop` never interrupts a `receive` that is in progress.

use crate::actor::Actor;
use crate::config::SystemConfig;
use crate::context::Context;
use crate::envelope::{Envelope, Message};
use crate::error::{AskError, SpawnError};
use crate::future::AskFuture;
use crate::pid::Pid;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::mpsc::error::SendError;
use tokio::sync::{mpsc, oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Registry entry of one live actor. The actor value itself is owned by its task.
struct ActorCell {
    mailbox: mpsc::Sender<Envelope>,
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ActorCell {
    /// Moves the actor from Running to Draining.
    fn halt(self) -> JoinHandle<()> {
        // The task may already be gone (e.g. it panicked); nothing to signal then.
        let _ = self.stop.send(());
        self.task
    }
}

#[derive(Default)]
struct Registry {
    cells: HashMap<Pid, ActorCell>,
    names: HashMap<String, Pid>,
    next_id: u64,
}

impl Registry {
    fn generate_pid(&mut self, prefix: &str) -> Pid {
        loop {
            let id = format!("{}-{}", prefix, self.next_id);
            self.next_id += 1;
            if !self.names.contains_key(&id) {
                return Pid::new(id);
            }
        }
    }
}

struct SystemInner {
    config: SystemConfig,
    registry: RwLock<Registry>,
}

/// Owns all actors and routes messages between them.
///
/// `ActorSystem` is a cheap handle; clones share the same registry. Dropping the last
/// handle stops every actor still registered.
///
/// ```rust
/// use async_trait::async_trait;
/// use tiny_actor::{Actor, ActorSystem, Context};
///
/// struct Echo;
///
/// #[async_trait]
/// impl Actor for Echo {
///     async fn receive(&mut self, ctx: &mut Context) {
///         if let Some(text) = ctx.take_message::<String>() {
///             ctx.reply(text).await;
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let system = ActorSystem::new();
///     let echo = system.spawn_named("echo", Echo).await.unwrap();
///
///     let reply = system.ask(&echo, String::from("hi")).result_as::<String>().await;
///     assert_eq!(reply.unwrap(), "hi");
///
///     system.shutdown().await;
/// }
/// ```
#[derive(Clone)]
pub struct ActorSystem {
    inner: Arc<SystemInner>,
}

impl Default for ActorSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorSystem {
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        Self {
            inner: Arc::new(SystemInner {
                config,
                registry: RwLock::new(Registry::default()),
            }),
        }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.inner.config
    }

    /// Registers `actor` under a generated PID and starts its processing task.
    pub async fn spawn<A: Actor>(&self, actor: A) -> Pid {
        let mut registry = self.inner.registry.write().await;
        let pid = registry.generate_pid(&self.inner.config.id_prefix);
        self.register(&mut registry, pid.clone(), actor);
        pid
    }

    /// Registers `actor` with a PID equal to `name`.
    ///
    /// Fails with [`SpawnError::DuplicateName`] if the name is taken, or with
    /// [`SpawnError::EmptyName`] for `""` (the [`Pid::nobody`] id). The registry is
    /// left untouched either way.
    pub async fn spawn_named<A: Actor>(
        &self,
        name: impl Into<String>,
        actor: A,
    ) -> Result<Pid, SpawnError> {
        let name = name.into();
        if name.is_empty() {
            warn!("Spawn rejected: empty name");
            return Err(SpawnError::EmptyName);
        }
        let mut registry = self.inner.registry.write().await;
        if registry.names.contains_key(&name) {
            warn!(%name, "Spawn rejected: name already registered");
            return Err(SpawnError::DuplicateName(name));
        }
        let pid = Pid::new(name);
        self.register(&mut registry, pid.clone(), actor);
        Ok(pid)
    }

    fn register<A: Actor>(&self, registry: &mut Registry, pid: Pid, actor: A) {
        let capacity = self.inner.config.mailbox_capacity.max(1);
        let (mailbox, receiver) = mpsc::channel(capacity);
        let (stop, stop_signal) = oneshot::channel();

        let task = tokio::spawn(run(
            actor,
            pid.clone(),
            Arc::downgrade(&self.inner),
            receiver,
            stop_signal,
        ));

        registry.names.insert(pid.id().to_string(), pid.clone());
        registry.cells.insert(
            pid.clone(),
            ActorCell {
                mailbox,
                stop,
                task,
            },
        );
        info!(%pid, actors = registry.cells.len(), "Spawned");
    }

    /// Looks up an actor by name. Generated PIDs are registered under their own id.
    pub async fn get_actor_by_name(&self, name: &str) -> Option<Pid> {
        self.inner.registry.read().await.names.get(name).cloned()
    }

    /// Unregisters `pid` and closes its mailbox. Envelopes already queued are still
    /// delivered before the task exits. Unknown PIDs are ignored.
    #[instrument(skip_all, fields(pid = %pid))]
    pub async fn stop(&self, pid: &Pid) {
        let cell = {
            let mut registry = self.inner.registry.write().await;
            let cell = registry.cells.remove(pid);
            if cell.is_some() {
                registry.names.remove(pid.id());
            }
            cell
        };

        match cell {
            Some(cell) => {
                drop(cell.halt());
                info!("Stopped");
            }
            None => debug!("Stop ignored: unknown actor"),
        }
    }

    /// Stops every registered actor and waits for all processing tasks to finish.
    pub async fn shutdown(&self) {
        let cells: Vec<ActorCell> = {
            let mut registry = self.inner.registry.write().await;
            registry.names.clear();
            registry.cells.drain().map(|(_, cell)| cell).collect()
        };

        let count = cells.len();
        let tasks: Vec<JoinHandle<()>> = cells.into_iter().map(ActorCell::halt).collect();
        for task in tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "Actor task ended abnormally");
            }
        }
        info!(actors = count, "Shutdown complete");
    }

    /// Number of registered actors.
    pub async fn len(&self) -> usize {
        self.inner.registry.read().await.cells.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Sends `message` to `to` from outside any actor; the receiver sees
    /// [`Pid::nobody`] as sender.
    pub async fn send<M>(&self, to: &Pid, message: M)
    where
        M: Any + Send + Sync,
    {
        self.route(Pid::nobody(), to, Box::new(message)).await;
    }

    /// Asks `to` from outside any actor.
    pub fn ask<M>(&self, to: &Pid, message: M) -> AskFuture
    where
        M: Any + Send + Sync,
    {
        self.ask_from(Pid::nobody(), to.clone(), Box::new(message))
    }

    async fn mailbox(&self, pid: &Pid) -> Option<mpsc::Sender<Envelope>> {
        let registry = self.inner.registry.read().await;
        registry.cells.get(pid).map(|cell| cell.mailbox.clone())
    }

    /// Best-effort delivery: unknown or stopped targets drop the message silently.
    pub(crate) async fn route(&self, from: Pid, to: &Pid, message: Message) {
        let Some(mailbox) = self.mailbox(to).await else {
            debug!(%from, %to, "Dropped message: unknown actor");
            return;
        };
        if mailbox.send(Envelope::new(message, from)).await.is_err() {
            debug!(%to, "Dropped message: actor stopped");
        }
    }

    /// Enqueues on a separate task and returns immediately. The enqueue races the
    /// future's cancellation.
    pub(crate) fn ask_from(&self, from: Pid, to: Pid, message: Message) -> AskFuture {
        let (future, promise) = AskFuture::pending(to.clone());
        let system = self.clone();

        tokio::spawn(async move {
            let resolution = promise.resolution();
            let Some(mailbox) = system.mailbox(&to).await else {
                warn!(%from, %to, "Ask failed: unknown actor");
                promise.fail(AskError::NotFound(to));
                return;
            };

            let envelope = Envelope::asked(message, from, promise);
            tokio::select! {
                biased;
                _ = resolution.wait() => {
                    debug!(%to, "Ask resolved before enqueue");
                }
                sent = mailbox.send(envelope) => {
                    if let Err(SendError(envelope)) = sent {
                        warn!(%to, "Ask failed: actor stopped");
                        envelope.fail(AskError::NotFound(to));
                    }
                }
            }
        });

        future
    }
}

async fn run<A: Actor>(
    mut actor: A,
    pid: Pid,
    system: Weak<SystemInner>,
    mut mailbox: mpsc::Receiver<Envelope>,
    mut stop: oneshot::Receiver<()>,
) {
    info!(%pid, "Actor started");
    actor.on_start(&pid).await;

    let mut processed: u64 = 0;
    loop {
        tokio::select! {
            biased;
            // Fires on `stop`, and also when the registry entry is dropped with the system.
            _ = &mut stop => {
                mailbox.close();
                debug!(%pid, "Draining");
                break;
            }
            envelope = mailbox.recv() => match envelope {
                Some(envelope) => {
                    deliver(&mut actor, &pid, &system, envelope).await;
                    processed += 1;
                }
                None => break,
            },
        }
    }

    while let Some(envelope) = mailbox.recv().await {
        deliver(&mut actor, &pid, &system, envelope).await;
        processed += 1;
    }

    actor.on_stop(&pid).await;
    info!(%pid, processed, "Actor stopped");
}

async fn deliver<A: Actor>(
    actor: &mut A,
    pid: &Pid,
    system: &Weak<SystemInner>,
    envelope: Envelope,
) {
    let Some(inner) = system.upgrade() else {
        debug!(%pid, "Discarding message: system dropped");
        return;
    };
    let mut ctx = Context::new(ActorSystem { inner }, pid.clone(), envelope);
    debug!(%pid, sender = %ctx.sender(), asked = ctx.is_ask(), "Receive");
    actor.receive(&mut ctx).await;
}

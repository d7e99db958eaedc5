//! # The Actor Contract
//!
//! An actor is anything that can handle one message at a time. The runtime gives each
//! actor its own Tokio task and calls [`Actor::receive`] for every envelope in its
//! mailbox, strictly in order and never concurrently.
//!
//! Because of that, actor state lives in plain fields. No `Mutex`, no `RwLock`: the
//! processing task owns the actor exclusively.
//!
//! Messages are type-erased. An actor decides what to do by downcasting:
//!
//! ```rust
//! use async_trait::async_trait;
//! use tiny_actor::{Actor, Context};
//!
//! #[derive(Debug)]
//! enum CounterMsg {
//!     Add(u64),
//!     Get,
//! }
//!
//! #[derive(Default)]
//! struct Counter {
//!     total: u64,
//! }
//!
//! #[async_trait]
//! impl Actor for Counter {
//!     async fn receive(&mut self, ctx: &mut Context) {
//!         match ctx.take_message::<CounterMsg>() {
//!             Some(CounterMsg::Add(n)) => self.total += n,
//!             Some(CounterMsg::Get) => ctx.reply(self.total).await,
//!             None => {}
//!         }
//!     }
//! }
//! ```

use crate::context::Context;
use crate::pid::Pid;
use async_trait::async_trait;

/// Behavior of an actor.
///
/// # Provided Methods (Hooks)
///
/// [`Actor::on_start`] and [`Actor::on_stop`] default to doing nothing. `on_stop` runs
/// after the mailbox has been drained, so every message accepted before the stop has
/// been handled by then.
#[async_trait]
pub trait Actor: Send + 'static {
    /// Handles the message currently held by `ctx`.
    async fn receive(&mut self, ctx: &mut Context);

    /// Called once by the processing task before the first message.
    async fn on_start(&mut self, _pid: &Pid) {}

    /// Called once by the processing task after the last message.
    async fn on_stop(&mut self, _pid: &Pid) {}
}

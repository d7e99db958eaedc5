//! # Tiny Actor
//!
//! A minimal in-process actor runtime on top of Tokio. Actors are addressed by
//! [`Pid`], talk only through private bounded mailboxes, and handle one message at a
//! time.
//!
//! ## Architecture Overview
//!
//! 1. **Identity** ([`Pid`]): a plain value, the only way to address an actor.
//! 2. **Behavior** ([`Actor`], [`Context`]): `receive` is called once per message with a
//!    context exposing the sender, the payload and routing operations.
//! 3. **Runtime** ([`ActorSystem`]): registry + router. Spawns one task per actor,
//!    delivers envelopes, implements `send` and `ask`.
//! 4. **Request/Response** ([`AskFuture`]): the result of `ask`, resolved by the
//!    target's `reply`, by a delivery failure, or by `cancel`.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use tiny_actor::{Actor, ActorSystem, Context};
//!
//! struct Ponger;
//!
//! #[async_trait]
//! impl Actor for Ponger {
//!     async fn receive(&mut self, ctx: &mut Context) {
//!         if ctx.message::<&str>() == Some(&"ping") {
//!             ctx.reply("pong").await;
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ActorSystem::new();
//!     let ponger = system.spawn(Ponger).await;
//!
//!     let answer = system.ask(&ponger, "ping").result_as::<&str>().await;
//!     assert_eq!(answer, Ok("pong"));
//! }
//! ```
//!
//! ## Delivery Semantics
//!
//! - `send` is fire-and-forget: sending to an unknown or stopped PID is silently
//!   dropped. It suspends only while the target's mailbox is full.
//! - Messages from one sequential caller to one target arrive in order. Nothing is
//!   promised across different senders.
//! - `receive` calls of one actor never overlap, so actor state needs no locks.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`Probe`](mock::Probe), an actor that records what it
//! receives so tests can assert on the traffic between actors.

pub mod actor;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod future;
pub mod mock;
pub mod pid;
pub mod system;
pub mod tracing;

// Re-export core types for convenience
pub use actor::Actor;
pub use config::SystemConfig;
pub use context::Context;
pub use envelope::{Envelope, Message};
pub use error::{AskError, SpawnError};
pub use future::AskFuture;
pub use pid::Pid;
pub use system::ActorSystem;

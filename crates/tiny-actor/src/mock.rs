//! # Test Probes
//!
//! A [`Probe`] is a ready-made actor that records every message it receives. Spawn it
//! in place of a real actor and read what arrived through its [`ProbeHandle`], without
//! writing a bespoke recording actor for every test.
//!
//! ## When to use a Probe vs a Real Actor
//!
//! | | Probe | Real Actor |
//! |---|---|---|
//! | **Behavior** | Records, optionally answers asks | Your logic |
//! | **Assertions** | Inspect each envelope (sender + payload) | Only via its replies |
//! | **Use Case** | Checking what *others* send | Testing the actor itself |
//!
//! ```rust
//! use std::time::Duration;
//! use tiny_actor::mock::Probe;
//! use tiny_actor::ActorSystem;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let system = ActorSystem::new();
//! let (probe, mut handle) = Probe::new();
//! let pid = system.spawn(probe).await;
//!
//! system.send(&pid, 7u32).await;
//!
//! let envelope = handle.recv_timeout(Duration::from_secs(1)).await.unwrap();
//! assert_eq!(envelope.downcast_ref::<u32>(), Some(&7));
//! assert!(envelope.sender().is_nobody());
//! # }
//! ```

use crate::actor::Actor;
use crate::context::Context;
use crate::envelope::{Envelope, Message};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;

type Responder = Box<dyn FnMut(&Envelope) -> Option<Message> + Send>;

/// Actor that forwards every received message to its [`ProbeHandle`].
pub struct Probe {
    log: mpsc::UnboundedSender<Envelope>,
    responder: Option<Responder>,
}

/// Test-side end of a [`Probe`].
///
/// Once the probe's actor is stopped and its queue drained, `recv` returns `None`.
pub struct ProbeHandle {
    log: mpsc::UnboundedReceiver<Envelope>,
}

impl Probe {
    pub fn new() -> (Self, ProbeHandle) {
        let (log, receiver) = mpsc::unbounded_channel();
        let probe = Self {
            log,
            responder: None,
        };
        (probe, ProbeHandle { log: receiver })
    }

    /// A probe that also answers: for each message, `respond` may produce a reply which
    /// is sent back with [`Context::reply_any`].
    pub fn answering<F>(respond: F) -> (Self, ProbeHandle)
    where
        F: FnMut(&Envelope) -> Option<Message> + Send + 'static,
    {
        let (mut probe, handle) = Self::new();
        probe.responder = Some(Box::new(respond));
        (probe, handle)
    }
}

#[async_trait]
impl Actor for Probe {
    async fn receive(&mut self, ctx: &mut Context) {
        let Some(message) = ctx.take_any() else {
            return;
        };
        let envelope = Envelope::new(message, ctx.sender().clone());
        let reply = self
            .responder
            .as_mut()
            .and_then(|respond| respond(&envelope));
        // The handle may have been dropped by a test that no longer cares.
        let _ = self.log.send(envelope);
        if let Some(reply) = reply {
            ctx.reply_any(reply).await;
        }
    }
}

impl ProbeHandle {
    pub async fn recv(&mut self) -> Option<Envelope> {
        self.log.recv().await
    }

    /// Like [`recv`](Self::recv), but gives up after `timeout`.
    pub async fn recv_timeout(&mut self, timeout: Duration) -> Option<Envelope> {
        tokio::time::timeout(timeout, self.log.recv())
            .await
            .ok()
            .flatten()
    }

    /// Returns an envelope that has already arrived, without waiting.
    pub fn try_recv(&mut self) -> Option<Envelope> {
        self.log.try_recv().ok()
    }
}

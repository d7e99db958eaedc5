//! # Observability & Tracing
//!
//! The runtime emits structured `tracing` events; it never installs a subscriber on its
//! own. Binaries call [`setup_tracing`] once at startup.
//!
//! ## What Gets Traced
//!
//! - **Lifecycle** (`info`): `Spawned`, `Actor started`, `Stopped`, `Actor stopped`
//!   with the number of processed messages, `Shutdown complete`
//! - **Delivery** (`debug`): every `Receive` with sender and whether it was an ask,
//!   dropped messages for unknown or stopped actors, `Draining`
//! - **Failures** (`warn`): duplicate names, failed asks, abnormal task exits
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run -p actor-sample
//! RUST_LOG=tiny_actor=debug cargo run -p actor-sample
//! ```
//!
//! With `RUST_LOG=debug` a ping/pong exchange looks like:
//!
//! ```text
//! INFO Spawned pid=ponger actors=1
//! INFO Actor started pid=ponger
//! DEBUG Receive pid=ponger sender=pinger asked=false
//! DEBUG Receive pid=pinger sender=ponger asked=false
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Panics if a global subscriber is already set; call it once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

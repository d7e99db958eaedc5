//! # Tiny Actor Demo
//!
//! Runs a ping/pong rally on the `tiny-actor` runtime:
//!
//! 1. Start the [`RallySystem`] (counter, ponger, pinger).
//! 2. Serve a rally and wait for it to finish.
//! 3. Read the number of returned balls from the counter with an `ask`.
//! 4. Shut down.
//!
//! ```bash
//! RUST_LOG=info cargo run -p actor-sample
//! RUST_LOG=debug cargo run -p actor-sample
//! ```

use actor_sample::lifecycle::RallySystem;
use std::time::Duration;
use tiny_actor::tracing::setup_tracing;
use tracing::{error, info, Instrument};

const ROUNDS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting rally demo");
    let system = RallySystem::start().await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("rally");
    let finished = async {
        system.rally_client.serve(ROUNDS).await;
        system
            .rally_client
            .wait_finished(ROUNDS, Duration::from_secs(5))
            .await
    }
    .instrument(span)
    .await;

    match finished {
        Ok(()) => info!(rounds = ROUNDS, "Rally completed"),
        Err(e) => error!(error = %e, "Rally failed"),
    }

    let hits = system
        .counter_client
        .get()
        .await
        .map_err(|e| e.to_string())?;
    info!(hits, "Counter total");

    system.shutdown().await;

    info!("Demo completed successfully");
    Ok(())
}

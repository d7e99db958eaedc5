//! Typed clients that hide message passing behind plain async methods.

pub mod counter_client;
pub mod rally_client;

pub use counter_client::CounterClient;
pub use rally_client::RallyClient;

use std::any::Any;
use std::time::Duration;
use tiny_actor::{ActorSystem, AskError, Pid};

/// How long clients wait for an answer unless configured otherwise.
pub const DEFAULT_ASK_TIMEOUT: Duration = Duration::from_secs(5);

/// Asks `to` and waits at most `timeout`. Returns `None` (and cancels the request) if
/// no answer arrived in time.
pub(crate) async fn ask_within<M, R>(
    system: &ActorSystem,
    to: &Pid,
    message: M,
    timeout: Duration,
) -> Option<Result<R, AskError>>
where
    M: Any + Send + Sync,
    R: Any,
{
    let future = system.ask(to, message);
    if !future.wait(timeout).await {
        future.cancel();
        return None;
    }
    Some(future.result_as::<R>().await)
}

use actor_sample::counter_actor::{Counter, CounterError};
use actor_sample::lifecycle::{RallySystem, COUNTER, PINGER, PONGER};
use std::time::Duration;
use tiny_actor::{ActorSystem, AskError, Pid, SpawnError};

/// Full end-to-end integration test with all real actors.
#[tokio::test]
async fn test_full_rally_system_integration() {
    let system = RallySystem::start().await.expect("Failed to start system");

    // Every sample actor is discoverable by name.
    for name in [COUNTER, PONGER, PINGER] {
        let pid = system
            .system
            .get_actor_by_name(name)
            .await
            .expect("actor not registered");
        assert_eq!(pid, Pid::new(name));
    }

    // Play a rally; every returned ball is counted.
    system.rally_client.serve(10).await;
    system
        .rally_client
        .wait_finished(10, Duration::from_secs(5))
        .await
        .expect("rally should finish");
    assert_eq!(system.rally_client.status().await, Ok(10));

    // Counter messages from the pinger were sent before the rally finished.
    let hits = system.counter_client.get().await.expect("Failed to get total");
    assert_eq!(hits, 10);

    // Direct use of the counter client.
    system.counter_client.add(5).await;
    assert_eq!(system.counter_client.get().await, Ok(15));
    system.counter_client.reset().await;
    assert_eq!(system.counter_client.get().await, Ok(0));

    system.shutdown().await;
}

#[tokio::test]
async fn test_second_system_in_same_registry_is_rejected() {
    let shared = ActorSystem::new();
    let first = RallySystem::start_with(shared.clone())
        .await
        .expect("Failed to start system");

    let err = RallySystem::start_with(shared.clone()).await.err();
    assert_eq!(err, Some(SpawnError::DuplicateName(COUNTER.to_string())));
    assert_eq!(shared.len().await, 3);

    first.shutdown().await;
    assert!(shared.is_empty().await);
}

#[tokio::test]
async fn test_failed_start_stops_already_spawned_actors() {
    let shared = ActorSystem::new();
    let squatter = shared
        .spawn_named(PINGER, Counter::new())
        .await
        .expect("Failed to spawn squatter");

    let err = RallySystem::start_with(shared.clone()).await.err();
    assert_eq!(err, Some(SpawnError::DuplicateName(PINGER.to_string())));

    // Only the actor that already held the name is left.
    assert_eq!(shared.len().await, 1);
    assert_eq!(shared.get_actor_by_name(COUNTER).await, None);
    assert_eq!(shared.get_actor_by_name(PONGER).await, None);
    assert_eq!(shared.get_actor_by_name(PINGER).await, Some(squatter));

    shared.shutdown().await;
}

#[tokio::test]
async fn test_counter_ignores_overflowing_add() {
    let system = RallySystem::start().await.expect("Failed to start system");

    system.counter_client.add(u64::MAX).await;
    system.counter_client.add(1).await;
    assert_eq!(system.counter_client.get().await, Ok(u64::MAX));

    // The counter is still alive and accepts further commands.
    system.counter_client.reset().await;
    system.counter_client.add(2).await;
    assert_eq!(system.counter_client.get().await, Ok(2));

    system.shutdown().await;
}

#[tokio::test]
async fn test_client_reports_stopped_counter() {
    let system = RallySystem::start().await.expect("Failed to start system");
    let counter = system.counter_client.pid().clone();
    system.system.stop(&counter).await;

    let result = system.counter_client.get().await;
    assert_eq!(
        result,
        Err(CounterError::ActorCommunicationError(AskError::NotFound(
            counter
        )))
    );

    system.shutdown().await;
}

#[tokio::test]
async fn test_serve_restarts_rally() {
    let system = RallySystem::start().await.expect("Failed to start system");

    system.rally_client.serve(3).await;
    system
        .rally_client
        .wait_finished(3, Duration::from_secs(5))
        .await
        .expect("first rally should finish");

    system.rally_client.serve(2).await;
    system
        .rally_client
        .wait_finished(2, Duration::from_secs(5))
        .await
        .expect("second rally should finish");

    assert_eq!(system.counter_client.get().await, Ok(5));
    system.shutdown().await;
}

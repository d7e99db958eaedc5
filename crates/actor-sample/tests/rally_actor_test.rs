use actor_sample::model::{CounterCommand, Ping, Pong, RallyCommand};
use actor_sample::rally_actor::{Pinger, Ponger};
use std::time::Duration;
use tiny_actor::mock::Probe;
use tiny_actor::ActorSystem;

const TIMEOUT: Duration = Duration::from_secs(2);

/// Real Pinger with probes standing in for the ponger and the counter.
#[tokio::test]
async fn test_pinger_with_probed_dependencies() {
    let system = ActorSystem::new();
    let (ponger, mut ponger_probe) = Probe::new();
    let (counter, mut counter_probe) = Probe::new();
    let ponger = system.spawn(ponger).await;
    let counter = system.spawn(counter).await;
    let pinger = system
        .spawn(Pinger::new(ponger.clone(), counter.clone()))
        .await;

    system
        .send(&pinger, RallyCommand::Serve { rounds: 2 })
        .await;

    // The pinger serves the first ball.
    let envelope = ponger_probe.recv_timeout(TIMEOUT).await.unwrap();
    assert_eq!(envelope.downcast_ref::<Ping>(), Some(&Ping { round: 1 }));
    assert_eq!(envelope.sender(), &pinger);

    // Returning it is tallied and answered with the next round.
    system.send(&pinger, Pong { round: 1 }).await;
    let tally = counter_probe.recv_timeout(TIMEOUT).await.unwrap();
    assert_eq!(
        tally.downcast_ref::<CounterCommand>(),
        Some(&CounterCommand::Add(1))
    );
    let envelope = ponger_probe.recv_timeout(TIMEOUT).await.unwrap();
    assert_eq!(envelope.downcast_ref::<Ping>(), Some(&Ping { round: 2 }));

    // A stale pong changes nothing.
    system.send(&pinger, Pong { round: 7 }).await;
    let completed = system
        .ask(&pinger, RallyCommand::Status)
        .result_as::<u32>()
        .await
        .unwrap();
    assert_eq!(completed, 1);

    // Last round: tallied, no further ping.
    system.send(&pinger, Pong { round: 2 }).await;
    assert!(counter_probe.recv_timeout(TIMEOUT).await.is_some());
    assert!(ponger_probe.recv_timeout(Duration::from_millis(100)).await.is_none());

    system.shutdown().await;
}

#[tokio::test]
async fn test_ponger_answers_ask_directly() {
    let system = ActorSystem::new();
    let ponger = system.spawn(Ponger).await;

    let pong = system
        .ask(&ponger, Ping { round: 3 })
        .result_as::<Pong>()
        .await
        .unwrap();
    assert_eq!(pong, Pong { round: 3 });
}

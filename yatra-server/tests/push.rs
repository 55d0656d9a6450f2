mod support;

use yatra_model::PushEvent;
use yatra_server::{push, scheduler};

use support::{build_test_state, test_config};

#[tokio::test]
async fn new_viewer_receives_full_snapshot_first() {
    let state = build_test_state(test_config());

    let (_viewer, mut events) = push::attach_viewer(&state);

    match events.recv().await.unwrap() {
        PushEvent::TouristsSnapshot { tourists } => assert_eq!(tourists.len(), 120),
        other => panic!("expected tourists snapshot, got {other:?}"),
    }
    match events.recv().await.unwrap() {
        PushEvent::AlertsSnapshot { alerts } => assert_eq!(alerts.len(), 5),
        other => panic!("expected alerts snapshot, got {other:?}"),
    }
}

#[tokio::test]
async fn tick_fans_out_identical_updates_to_all_viewers() {
    let state = build_test_state(test_config());

    let (_first, mut first_events) = push::attach_viewer(&state);
    let (_second, mut second_events) = push::attach_viewer(&state);
    for events in [&mut first_events, &mut second_events] {
        events.recv().await.unwrap();
        events.recv().await.unwrap();
    }

    scheduler::run_tick(&state);

    let first_update = match first_events.recv().await.unwrap() {
        PushEvent::TouristsUpdate { tourists } => tourists,
        other => panic!("expected tourists update, got {other:?}"),
    };
    let second_update = match second_events.recv().await.unwrap() {
        PushEvent::TouristsUpdate { tourists } => tourists,
        other => panic!("expected tourists update, got {other:?}"),
    };

    assert_eq!(first_update, second_update);

    // Exactly one update per tick.
    assert!(first_events.try_recv().is_err());
    assert!(second_events.try_recv().is_err());
}

#[tokio::test]
async fn updates_queue_behind_the_snapshot_in_order() {
    let state = build_test_state(test_config());

    let (_viewer, mut events) = push::attach_viewer(&state);
    scheduler::run_tick(&state);

    assert!(matches!(
        events.recv().await.unwrap(),
        PushEvent::TouristsSnapshot { .. }
    ));
    assert!(matches!(
        events.recv().await.unwrap(),
        PushEvent::AlertsSnapshot { .. }
    ));
    assert!(matches!(
        events.recv().await.unwrap(),
        PushEvent::TouristsUpdate { .. }
    ));
}

#[tokio::test]
async fn dropped_viewer_does_not_disturb_the_rest() {
    let state = build_test_state(test_config());

    let (_gone, gone_events) = push::attach_viewer(&state);
    let (_alive, mut alive_events) = push::attach_viewer(&state);
    assert_eq!(state.viewers.len(), 2);

    drop(gone_events);
    scheduler::run_tick(&state);

    assert_eq!(state.viewers.len(), 1);

    alive_events.recv().await.unwrap();
    alive_events.recv().await.unwrap();
    assert!(matches!(
        alive_events.recv().await.unwrap(),
        PushEvent::TouristsUpdate { .. }
    ));
}

//! The broadcast scheduler: the system's only autonomous behavior.

use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::trace;

use yatra_model::PushEvent;

use crate::state::AppState;

/// One simulation step: advance every tourist, then fan the fresh collection
/// out to all connected viewers. Delivery is best-effort per viewer.
pub fn run_tick(state: &AppState) {
    state.store.tick();
    state.viewers.broadcast(PushEvent::TouristsUpdate {
        tourists: state.store.tourists(),
    });
    trace!(viewers = state.viewers.len(), "movement tick broadcast");
}

/// Spawn the periodic tick loop. Runs until process shutdown.
pub fn spawn(state: AppState) -> JoinHandle<()> {
    let period = state.store.config().tick_interval;
    tokio::spawn(async move {
        let mut ticker = interval(period);
        // interval's first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            run_tick(&state);
        }
    })
}

//! Live push channel: per-viewer connections and the fan-out registry.

pub mod connection;
pub mod messages;
pub mod registry;

pub use connection::Viewer;
pub use registry::ViewerRegistry;

use std::sync::Arc;

use tokio::sync::mpsc;
use yatra_model::PushEvent;

use crate::state::AppState;

/// Per-viewer queue depth before further updates are dropped for that viewer.
pub const VIEWER_QUEUE_DEPTH: usize = 64;

/// Register a brand-new viewer and enqueue its initial snapshot.
///
/// Snapshot events go through the same per-viewer queue as later updates, so
/// a viewer always observes the snapshot before any update that follows it.
/// The returned receiver is the viewer's outbound message stream; dropping it
/// ends delivery (the registry prunes the closed viewer on the next fan-out).
pub fn attach_viewer(state: &AppState) -> (Arc<Viewer>, mpsc::Receiver<PushEvent>) {
    let (tx, rx) = mpsc::channel(VIEWER_QUEUE_DEPTH);
    let viewer = Arc::new(Viewer::new(tx));
    state.viewers.register(viewer.clone());

    let _ = viewer.enqueue(PushEvent::TouristsSnapshot {
        tourists: state.store.tourists(),
    });
    let _ = viewer.enqueue(PushEvent::AlertsSnapshot {
        alerts: state.store.alerts(),
    });

    (viewer, rx)
}

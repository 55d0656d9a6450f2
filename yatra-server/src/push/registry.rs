use std::{fmt, sync::Arc};

use dashmap::DashMap;
use tokio::sync::mpsc::error::TrySendError;
use uuid::Uuid;

use yatra_model::PushEvent;

use crate::push::connection::Viewer;

/// The fan-out set of currently connected viewers, keyed by connection id.
///
/// Registration and removal are O(1); broadcast walks the live set once.
#[derive(Clone)]
pub struct ViewerRegistry {
    viewers: Arc<DashMap<Uuid, Arc<Viewer>>>,
}

impl fmt::Debug for ViewerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerRegistry")
            .field("viewer_count", &self.viewers.len())
            .finish()
    }
}

impl ViewerRegistry {
    pub fn new() -> Self {
        Self {
            viewers: Arc::new(DashMap::new()),
        }
    }

    /// Register a new viewer
    pub fn register(&self, viewer: Arc<Viewer>) {
        self.viewers.insert(viewer.id, viewer);
    }

    /// Remove a viewer from the fan-out set
    pub fn remove(&self, viewer_id: Uuid) {
        self.viewers.remove(&viewer_id);
    }

    /// Number of currently connected viewers.
    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }

    /// Deliver an event to every connected viewer, best effort.
    ///
    /// A lagging viewer loses this event only; a closed viewer is pruned.
    /// Neither outcome affects delivery to the remaining viewers.
    pub fn broadcast(&self, event: PushEvent) {
        let mut closed = Vec::new();
        for entry in self.viewers.iter() {
            match entry.value().enqueue(event.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!(viewer = %entry.key(), "viewer queue full, dropping event");
                }
                Err(TrySendError::Closed(_)) => closed.push(*entry.key()),
            }
        }
        for viewer_id in closed {
            self.viewers.remove(&viewer_id);
        }
    }
}

impl Default for ViewerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

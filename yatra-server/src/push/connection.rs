use std::fmt;

use tokio::sync::mpsc::{self, error::TrySendError};
use uuid::Uuid;

use yatra_model::PushEvent;

/// One connected dashboard viewer.
///
/// Holds the queue feeding the viewer's socket writer. No other per-viewer
/// state exists; a reconnecting viewer is a brand-new `Viewer`.
pub struct Viewer {
    /// Unique connection ID
    pub id: Uuid,
    /// Channel to send events to this connection
    sender: mpsc::Sender<PushEvent>,
}

impl fmt::Debug for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewer")
            .field("id", &self.id)
            .field("channel_closed", &self.sender.is_closed())
            .finish()
    }
}

impl Viewer {
    pub fn new(sender: mpsc::Sender<PushEvent>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender,
        }
    }

    /// Queue an event for this viewer without blocking.
    ///
    /// `Full` means the viewer is lagging and this event is dropped for it;
    /// `Closed` means the viewer is gone and should be pruned.
    pub fn enqueue(&self, event: PushEvent) -> Result<(), TrySendError<PushEvent>> {
        self.sender.try_send(event)
    }
}

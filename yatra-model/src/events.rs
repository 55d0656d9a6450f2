//! Push-channel event types.

use serde::{Deserialize, Serialize};

use crate::alert::Alert;
use crate::tourist::Tourist;

/// Server-to-viewer messages delivered over the push channel.
///
/// Every payload is a full replacement of the named collection, never an
/// incremental patch; viewers diff and re-render wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushEvent {
    // Sent once, on connect
    TouristsSnapshot { tourists: Vec<Tourist> },
    AlertsSnapshot { alerts: Vec<Alert> },

    // Sent for the connection lifetime
    TouristsUpdate { tourists: Vec<Tourist> },
    AlertsUpdate { alerts: Vec<Alert> },
}

//! The tracked tourist record and its safety status.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Safety status of a tracked tourist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouristStatus {
    /// Moving normally, no raised event.
    Normal,
    /// Has an active SOS alert tied to them.
    Sos,
}

impl Display for TouristStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TouristStatus::Normal => write!(f, "normal"),
            TouristStatus::Sos => write!(f, "sos"),
        }
    }
}

/// A tracked mobile entity with a bounded position history.
///
/// Field renames pin the wire format the dashboard expects: the current
/// position travels as `coord` and the emergency contact as `emg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tourist {
    /// Stable identifier, e.g. `T1042`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact number.
    pub phone: String,
    /// Emergency contact number.
    #[serde(rename = "emg")]
    pub emergency_contact: String,
    /// Current position.
    #[serde(rename = "coord")]
    pub position: GeoPoint,
    /// Most recent positions, oldest first. Bounded; the newest entry always
    /// equals `position`.
    pub trail: Vec<GeoPoint>,
    /// Current safety status.
    pub status: TouristStatus,
}

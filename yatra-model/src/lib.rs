//! Shared data models for the Yatra tourist-safety platform.
//!
//! This crate centralizes the wire-level types spoken by the server and the
//! dashboard: geographic primitives, the tracked [`Tourist`] record, the
//! [`Alert`] lifecycle record, and the [`PushEvent`] messages delivered over
//! the live push channel. Both `yatra-core` and `yatra-server` depend on
//! these definitions so there is a single source of truth for field names
//! and status vocabularies.

pub mod alert;
pub mod events;
pub mod geo;
pub mod tourist;

pub use alert::{Alert, AlertId, AlertStatus, InvalidAlertId};
pub use events::PushEvent;
pub use geo::{GeoPoint, RestrictedZone};
pub use tourist::{Tourist, TouristStatus};

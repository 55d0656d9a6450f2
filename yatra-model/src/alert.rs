//! Alert records and their validated identifiers.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an alert.
///
/// The usual progression is active → acknowledged → resolved, but the store
/// does not enforce ordering; operators may jump states in any direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Raised and awaiting an operator.
    Active,
    /// Seen by an operator, response underway.
    Acknowledged,
    /// Closed out.
    Resolved,
}

impl Display for AlertStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlertStatus::Active => write!(f, "active"),
            AlertStatus::Acknowledged => write!(f, "acknowledged"),
            AlertStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Error returned when an alert identifier fails format validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid alert id {0:?}: expected a letter prefix followed by digits")]
pub struct InvalidAlertId(pub String);

/// Validated alert identifier: one ASCII letter followed by digits, e.g. `S12`.
///
/// Construction goes through [`FromStr`], so a held `AlertId` is always
/// well-formed; request handlers reject malformed ids before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AlertId {
    type Err = InvalidAlertId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
            && {
                let rest = chars.as_str();
                !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
            };
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidAlertId(s.to_string()))
        }
    }
}

impl Display for AlertId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raised safety event tied to one tourist.
///
/// `tourist_id` is a weak reference: lookup by id, no ownership. The store
/// only seeds alerts for tourists that exist at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Alert identifier, e.g. `S1`.
    pub id: AlertId,
    /// Id of the tourist this alert was raised for.
    pub tourist_id: String,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
    /// Current lifecycle status.
    pub status: AlertStatus,
}

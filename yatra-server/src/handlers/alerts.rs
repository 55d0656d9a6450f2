//! Alert reads and the status-transition commands.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use tracing::info;

use yatra_model::{Alert, AlertId, AlertStatus, PushEvent};

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Full alert collection. Empty is valid, never an error.
pub async fn list_alerts(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.store.alerts())
}

/// `POST /api/alerts/{id}/ack` — mark an alert acknowledged.
pub async fn acknowledge_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    set_status(&state, &id, AlertStatus::Acknowledged)
}

/// `POST /api/alerts/{id}/resolve` — mark an alert resolved.
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    set_status(&state, &id, AlertStatus::Resolved)
}

/// Validate, mutate, then fan the fresh alert collection out to viewers.
///
/// Id validation happens before any store access so a malformed id (400)
/// stays distinguishable from an unknown one (404). The tourist collection
/// is untouched by this path.
fn set_status(state: &AppState, raw_id: &str, status: AlertStatus) -> AppResult<Json<Value>> {
    let id: AlertId = raw_id.parse()?;

    if !state.store.set_alert_status(&id, status) {
        return Err(AppError::not_found(format!("alert {id} not found")));
    }

    info!(alert = %id, %status, "alert status updated");
    state.viewers.broadcast(PushEvent::AlertsUpdate {
        alerts: state.store.alerts(),
    });

    Ok(Json(json!({ "ok": true })))
}

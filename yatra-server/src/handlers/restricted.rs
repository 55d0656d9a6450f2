//! Restricted-zone polygon read.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::state::AppState;

/// The static restricted-area polygon, as `{ "polygon": [[lat,lng], …] }`.
pub async fn restricted_polygon(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "polygon": state.store.restricted_zone().vertices(),
    }))
}

//! Tourist collection reads.

use axum::{Json, extract::State};

use yatra_model::Tourist;

use crate::state::AppState;

/// Full tourist collection. Empty is valid, never an error.
pub async fn list_tourists(State(state): State<AppState>) -> Json<Vec<Tourist>> {
    Json(state.store.tourists())
}

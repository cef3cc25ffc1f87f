//! Position REST routes.

#[cfg(test)]
#[path = "positions_test.rs"]
mod positions_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::PositionedComponent;

use crate::services::positions::{self, PositionError};
use crate::state::AppState;

/// `GET /api/get-positions`: all widgets in store order.
pub async fn get_positions(State(state): State<AppState>) -> Json<Vec<PositionedComponent>> {
    Json(positions::list_positions(&state).await)
}

/// `POST /api/update-position`: move one widget.
pub async fn update_position(
    State(state): State<AppState>,
    Json(body): Json<PositionedComponent>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    positions::update_position(&state, body)
        .await
        .map_err(|e| position_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) fn position_error_to_status(err: &PositionError) -> StatusCode {
    match err {
        PositionError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

//! Position service: list and update widget positions.
//!
//! DESIGN
//! ======
//! Updates rewrite the stored coordinates in place and keep list order.
//! Concurrent writes to the same id are last-writer-wins; there is no
//! versioning.

#[cfg(test)]
#[path = "positions_test.rs"]
mod positions_test;

use client::net::types::{ComponentId, PositionedComponent};
use tracing::{debug, warn};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("component not found: {0}")]
    NotFound(ComponentId),
}

/// Snapshot of all positions in store order.
pub async fn list_positions(state: &AppState) -> Vec<PositionedComponent> {
    state.positions.read().await.list().to_vec()
}

/// Move an existing component to `change.x`, `change.y`.
///
/// # Errors
///
/// Returns `NotFound` if no component has `change.id`.
pub async fn update_position(
    state: &AppState,
    change: PositionedComponent,
) -> Result<PositionedComponent, PositionError> {
    let mut store = state.positions.write().await;
    let Some(component) = store.get_mut(&change.id) else {
        warn!(id = %change.id, "position update for unknown component");
        return Err(PositionError::NotFound(change.id));
    };
    component.x = change.x;
    component.y = change.y;
    debug!(id = %component.id, x = component.x, y = component.y, "position updated");
    Ok(component.clone())
}

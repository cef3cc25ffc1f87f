//! Board page: the controller for the draggable component canvas.
//!
//! ARCHITECTURE
//! ============
//! On mount the page issues one `get-positions` read and stores the result in
//! the shared `BoardState`. Each drag-end is applied to local state first and
//! then written to the backend without waiting for, or reacting to, the
//! response.
//!
//! TRADE-OFFS
//! ==========
//! Writes are fire-and-forget. A failed write is logged and the optimistic
//! position stays, so the client and backend can diverge until reload.
//! Overlapping writes from rapid drags are not ordered.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use crate::components::connector_layer::ConnectorLayer;
use crate::components::draggable_widget::DraggableWidget;
use crate::net::api;
use crate::net::types::PositionedComponent;
use crate::state::board::BoardState;

/// Apply a drag-end change locally before any network call.
fn apply_optimistic_update(board: &mut BoardState, change: &PositionedComponent) {
    if !board.apply_position(change) {
        log::warn!("position change for unknown component {}", change.id);
    }
}

/// Log the outcome of a best-effort position write. Local state is never
/// touched here: the optimistic update stands either way.
fn report_write_outcome(change: &PositionedComponent, outcome: Result<(), String>) {
    match outcome {
        Ok(()) => log::debug!("saved position of component {} ({}, {})", change.id, change.x, change.y),
        Err(err) => log::error!("error updating position of component {}: {err}", change.id),
    }
}

/// Board page: loads the widget list once, renders one `DraggableWidget` per
/// item plus the connector overlay, and persists drag-end positions.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    // One-shot initial load. Effects only run in the browser.
    Effect::new(move || {
        board.update(BoardState::begin_load);
        leptos::task::spawn_local(async move {
            let result = api::fetch_positions().await;
            board.update(|b| b.finish_load(result));
        });
    });

    let on_move = Callback::new(move |change: PositionedComponent| {
        board.update(|b| apply_optimistic_update(b, &change));
        leptos::task::spawn_local(async move {
            let outcome = api::update_position(&change).await;
            report_write_outcome(&change, outcome);
        });
    });

    view! {
        <div class="app" data-load-status=move || board.with(|b| b.load_status.as_str())>
            <For
                each=move || board.with(|b| b.components.clone())
                key=|component: &PositionedComponent| component.id.clone()
                children=move |component: PositionedComponent| {
                    let PositionedComponent { id, x, y } = component;
                    let lookup_id = id.clone();
                    let position = Signal::derive(move || {
                        board.with(|b| b.component(&lookup_id).map_or((x, y), |c| (c.x, c.y)))
                    });
                    view! { <DraggableWidget id=id position=position on_move=on_move/> }
                }
            />
            <ConnectorLayer/>
        </div>
    }
}

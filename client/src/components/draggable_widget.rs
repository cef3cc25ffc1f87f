//! Draggable widget box.
//!
//! DESIGN
//! ======
//! Uses native HTML5 drag and drop. The widget only reports where it was
//! dropped; the caller owns the position and re-renders it from state.

#[cfg(test)]
#[path = "draggable_widget_test.rs"]
mod draggable_widget_test;

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::net::types::{ComponentId, PositionedComponent};
use crate::util::geometry::{WIDGET_SIZE_PX, drop_position};

/// MIME type under which the widget id is stored in the drag payload.
pub const DRAG_PAYLOAD_FORMAT: &str = "text/plain";

fn widget_class(dragging: bool) -> &'static str {
    if dragging { "draggable-component dragging" } else { "draggable-component" }
}

fn widget_style(x: i32, y: i32) -> String {
    format!(
        "left: {x}px; top: {y}px; position: absolute; width: {WIDGET_SIZE_PX}px; height: {WIDGET_SIZE_PX}px; \
         background-color: lightgray; border: 1px solid black; cursor: move; padding: 10px;"
    )
}

fn placeholder_text(id: &ComponentId) -> String {
    format!("Component {id}")
}

/// Position-changed notification for a drop with the pointer at `(client_x, client_y)`.
fn drag_end_change(id: ComponentId, client_x: i32, client_y: i32) -> PositionedComponent {
    let (x, y) = drop_position(client_x, client_y);
    PositionedComponent { id, x, y }
}

fn write_drag_payload(ev: &DragEvent, payload: &str) {
    let Some(transfer) = ev.data_transfer() else {
        log::warn!("drag start without data transfer for widget {payload}");
        return;
    };
    if let Err(err) = transfer.set_data(DRAG_PAYLOAD_FORMAT, payload) {
        log::warn!("failed to write drag payload for widget {payload}: {err:?}");
    }
}

/// A fixed-size draggable box with a text input and a button.
///
/// `position` is the widget's top-left corner. On drag end `on_move` receives
/// the widget id and the pointer position minus the centering offset.
#[component]
pub fn DraggableWidget(
    id: ComponentId,
    #[prop(into)] position: Signal<(i32, i32)>,
    on_move: Callback<PositionedComponent>,
) -> impl IntoView {
    let dragging = RwSignal::new(false);
    let payload = id.to_string();
    let placeholder = placeholder_text(&id);

    let on_drag_start = move |ev: DragEvent| {
        dragging.set(true);
        write_drag_payload(&ev, &payload);
    };

    let on_drag_end = move |ev: DragEvent| {
        dragging.set(false);
        on_move.run(drag_end_change(id.clone(), ev.client_x(), ev.client_y()));
    };

    view! {
        <div
            class=move || widget_class(dragging.get())
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            style=move || {
                let (x, y) = position.get();
                widget_style(x, y)
            }
        >
            <input type="text" placeholder=placeholder/>
            <button type="button">"Click Me"</button>
        </div>
    }
}

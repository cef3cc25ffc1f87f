//! SVG overlay with the connector lines between the first widgets.

use leptos::prelude::*;

use crate::state::board::BoardState;

pub const CONNECTOR_STROKE: &str = "red";
pub const CONNECTOR_STROKE_WIDTH: &str = "2";

/// Full-size overlay drawing up to two connector lines. Rendered only when
/// the board holds more than one widget.
#[component]
pub fn ConnectorLayer() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let has_lines = move || board.with(|b| b.components.len() > 1);

    view! {
        <Show when=has_lines>
            <svg
                class="lines"
                style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;"
            >
                {move || {
                    board
                        .with(BoardState::connectors)
                        .into_iter()
                        .map(|line| {
                            view! {
                                <line
                                    x1=line.x1.to_string()
                                    y1=line.y1.to_string()
                                    x2=line.x2.to_string()
                                    y2=line.y2.to_string()
                                    stroke=CONNECTOR_STROKE
                                    stroke-width=CONNECTOR_STROKE_WIDTH
                                ></line>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </Show>
    }
}

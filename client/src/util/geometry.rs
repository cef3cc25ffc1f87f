//! Widget geometry: fixed widget size, drop offset, and connector anchors.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Side length of a widget box in pixels.
pub const WIDGET_SIZE_PX: i32 = 100;

/// Offset subtracted from the pointer on drop so the widget lands centered
/// under it, and added to a widget's corner to find its center.
pub const DRAG_CENTER_OFFSET: i32 = WIDGET_SIZE_PX / 2;

/// Connectors only join list indices 0-1 and 1-2.
pub const MAX_CONNECTORS: usize = 2;

/// Line segment between two widget centers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connector {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Top-left corner for a widget dropped with the pointer at `(pointer_x, pointer_y)`.
///
/// No bounds check: results may be negative or off-screen.
pub fn drop_position(pointer_x: i32, pointer_y: i32) -> (i32, i32) {
    (
        pointer_x.saturating_sub(DRAG_CENTER_OFFSET),
        pointer_y.saturating_sub(DRAG_CENTER_OFFSET),
    )
}

/// Center of a widget whose top-left corner is at `(x, y)`.
pub fn widget_center(x: i32, y: i32) -> (i32, i32) {
    (x.saturating_add(DRAG_CENTER_OFFSET), y.saturating_add(DRAG_CENTER_OFFSET))
}

/// Connector from the center of one widget corner to another.
pub fn connector_between(from: (i32, i32), to: (i32, i32)) -> Connector {
    let (x1, y1) = widget_center(from.0, from.1);
    let (x2, y2) = widget_center(to.0, to.1);
    Connector { x1, y1, x2, y2 }
}

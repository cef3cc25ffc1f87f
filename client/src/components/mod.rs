//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `draggable_widget` renders one widget and reports drag-end positions to
//! its caller; `connector_layer` draws the lines between widgets from the
//! shared `BoardState` context.

pub mod connector_layer;
pub mod draggable_widget;

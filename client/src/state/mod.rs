//! Reactive state models shared via Leptos context.
//!
//! DESIGN
//! ======
//! State types are plain structs with methods for each transition. Pages
//! wrap them in `RwSignal` and call those methods inside `update`, which
//! keeps the transitions testable without a reactive runtime.

pub mod board;

//! Pure helpers shared by components and state.

pub mod geometry;

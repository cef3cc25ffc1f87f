//! Wire types for the position endpoints.
//!
//! These mirror the JSON bodies of `GET /api/get-positions` and
//! `POST /api/update-position`. Both sides of the wire use them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a positioned component.
///
/// The backend may hand out integer or string ids; either form is carried
/// verbatim and written back unchanged. Integers above `i64::MAX` land in
/// `Unsigned`. Fractional numbers such as `1.0` are not ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentId {
    Number(i64),
    Unsigned(u64),
    Text(String),
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ComponentId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ComponentId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One draggable widget and its top-left corner in page pixels.
///
/// Also used as the `update-position` request body and as the drag-end
/// notification payload, since all three carry exactly `{id, x, y}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedComponent {
    pub id: ComponentId,
    pub x: i32,
    pub y: i32,
}

impl PositionedComponent {
    pub fn new(id: impl Into<ComponentId>, x: i32, y: i32) -> Self {
        Self { id: id.into(), x, y }
    }
}

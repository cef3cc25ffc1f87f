//! Board state for the draggable component canvas.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model is the local projection of the backend's position list. It is
//! loaded once per mount and then mutated only by drag-end updates, which are
//! applied optimistically and never rolled back.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::types::{ComponentId, PositionedComponent};
use crate::util::geometry::{Connector, MAX_CONNECTORS, connector_between};

/// Lifecycle of the one-shot initial load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet (also the SSR state).
    #[default]
    Idle,
    /// `get-positions` is in flight.
    Loading,
    /// The list was replaced with the backend response.
    Loaded,
    /// The request failed; the list keeps whatever it held before.
    Failed,
}

impl LoadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}

/// Widgets on the board, in backend order.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    /// Widget list. Order drives which widgets get connectors.
    pub components: Vec<PositionedComponent>,
    pub load_status: LoadStatus,
}

impl BoardState {
    pub fn with_components(components: Vec<PositionedComponent>) -> Self {
        Self { components, load_status: LoadStatus::Loaded }
    }

    pub fn begin_load(&mut self) {
        self.load_status = LoadStatus::Loading;
    }

    /// Apply the result of the initial fetch.
    ///
    /// A successful response replaces the list verbatim. A failure is logged
    /// and leaves the list as it was.
    pub fn finish_load(&mut self, result: Result<Vec<PositionedComponent>, String>) {
        match result {
            Ok(components) => {
                log::debug!("loaded {} component positions", components.len());
                self.components = components;
                self.load_status = LoadStatus::Loaded;
            }
            Err(err) => {
                log::error!("error fetching positions: {err}");
                self.load_status = LoadStatus::Failed;
            }
        }
    }

    /// Rewrite the coordinates of the widget matching `change.id`.
    ///
    /// Returns `false` when no widget has that id; the list is then untouched.
    pub fn apply_position(&mut self, change: &PositionedComponent) -> bool {
        match self.components.iter_mut().find(|c| c.id == change.id) {
            Some(component) => {
                component.x = change.x;
                component.y = change.y;
                true
            }
            None => false,
        }
    }

    pub fn component(&self, id: &ComponentId) -> Option<&PositionedComponent> {
        self.components.iter().find(|c| &c.id == id)
    }

    /// Connector lines between consecutive widgets, for list indices 0-1 and
    /// 1-2 only. Index based: reordering the list changes which widgets are
    /// joined.
    pub fn connectors(&self) -> Vec<Connector> {
        self.components
            .windows(2)
            .take(MAX_CONNECTORS)
            .map(|pair| connector_between((pair[0].x, pair[0].y), (pair[1].x, pair[1].y)))
            .collect()
    }
}

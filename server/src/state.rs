//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the position store behind a tokio `RwLock`. The store is a plain
//! `Vec` because list order is part of the contract: clients draw
//! connectors between the first entries.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashSet;
use std::sync::Arc;

use client::net::types::{ComponentId, PositionedComponent};
use tokio::sync::RwLock;

use crate::config::ConfigError;

// =============================================================================
// POSITION STORE
// =============================================================================

/// In-memory position list, in insertion order. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct PositionStore {
    components: Vec<PositionedComponent>,
}

impl PositionStore {
    /// Build a store from seed data.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if two seed entries share an id.
    pub fn from_seed(seed: Vec<PositionedComponent>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(seed.len());
        for component in &seed {
            if !seen.insert(&component.id) {
                return Err(ConfigError::DuplicateId(component.id.clone()));
            }
        }
        Ok(Self { components: seed })
    }

    #[must_use]
    pub fn list(&self) -> &[PositionedComponent] {
        &self.components
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get_mut(&mut self, id: &ComponentId) -> Option<&mut PositionedComponent> {
        self.components.iter_mut().find(|c| &c.id == id)
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub positions: Arc<RwLock<PositionStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: PositionStore) -> Self {
        Self { positions: Arc::new(RwLock::new(store)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

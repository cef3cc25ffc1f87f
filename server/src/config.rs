//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::{Path, PathBuf};

use client::net::types::{ComponentId, PositionedComponent};

use crate::state::PositionStore;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("failed to read position seed {}: {source}", path.display())]
    ReadSeed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse position seed {}: {source}", path.display())]
    ParseSeed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate component id in position seed: {0}")]
    DuplicateId(ComponentId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// JSON file with the initial `[{id, x, y}]` list. Built-in seed when `None`.
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 5000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `POSITIONS_SEED_PATH`: JSON seed file
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` if `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` if `PORT` is not a valid `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let seed_path = lookup("POSITIONS_SEED_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { bind_addr, port, seed_path })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Load the initial position list from `seed_path`, or the built-in seed.
    ///
    /// # Errors
    ///
    /// Returns `ReadSeed`/`ParseSeed` if the seed file is unreadable or not a
    /// JSON array of `{id, x, y}`.
    pub fn load_seed(&self) -> Result<Vec<PositionedComponent>, ConfigError> {
        match &self.seed_path {
            Some(path) => read_seed_file(path),
            None => Ok(default_seed()),
        }
    }

    /// Load the seed and build the position store from it.
    ///
    /// # Errors
    ///
    /// Returns `ReadSeed`/`ParseSeed` for an unusable seed file and
    /// `DuplicateId` if two seed entries share an id.
    pub fn load_store(&self) -> Result<PositionStore, ConfigError> {
        PositionStore::from_seed(self.load_seed()?)
    }
}

fn read_seed_file(path: &Path) -> Result<Vec<PositionedComponent>, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadSeed { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseSeed { path: path.to_path_buf(), source })
}

/// Three widgets laid out so both connectors are visible.
#[must_use]
pub fn default_seed() -> Vec<PositionedComponent> {
    vec![
        PositionedComponent::new(1, 100, 100),
        PositionedComponent::new(2, 350, 100),
        PositionedComponent::new(3, 225, 300),
    ]
}

//! Game configuration: board size, batch size and shape catalog.
//!
//! Defaults reproduce the canonical game. Configs can be overlaid from
//! environment variables or parsed from a JSON document:
//!
//! - `EDGE_SHIFT_ROWS`: Board rows (default: 12)
//! - `EDGE_SHIFT_COLS`: Board columns (default: 12)
//! - `EDGE_SHIFT_QUEUE_SIZE`: Shapes per batch (default: 4)
//! - `EDGE_SHIFT_CATALOG`: `classic` or `extended` (default: extended)

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{GRID_COLS, GRID_ROWS, MAX_BOARD_DIM, MAX_QUEUE_SIZE, QUEUE_SIZE};

/// Which built-in shape set to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Classic,
    #[default]
    Extended,
}

impl FromStr for CatalogKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(CatalogKind::Classic),
            "extended" => Ok(CatalogKind::Extended),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub queue_size: usize,
    pub catalog: CatalogKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            queue_size: QUEUE_SIZE,
            catalog: CatalogKind::Extended,
        }
    }
}

impl GameConfig {
    /// Check dimensions and batch size
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dim_ok = |d: usize| (1..=MAX_BOARD_DIM).contains(&d);
        if !dim_ok(self.rows) || !dim_ok(self.cols) {
            return Err(ConfigError::BoardSize {
                rows: self.rows,
                cols: self.cols,
                max: MAX_BOARD_DIM,
            });
        }
        if !(1..=MAX_QUEUE_SIZE).contains(&self.queue_size) {
            return Err(ConfigError::QueueSize {
                size: self.queue_size,
                max: MAX_QUEUE_SIZE,
            });
        }
        Ok(())
    }

    /// Defaults overlaid with any `EDGE_SHIFT_*` variables that are set
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(rows) = env_parse("EDGE_SHIFT_ROWS")? {
            config.rows = rows;
        }
        if let Some(cols) = env_parse("EDGE_SHIFT_COLS")? {
            config.cols = cols;
        }
        if let Some(size) = env_parse("EDGE_SHIFT_QUEUE_SIZE")? {
            config.queue_size = size;
        }
        if let Some(catalog) = env_parse("EDGE_SHIFT_CATALOG")? {
            config.catalog = catalog;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(doc)?;
        config.validate()?;
        Ok(config)
    }
}

fn env_parse<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv {
            name,
            value: raw.clone(),
        })
}

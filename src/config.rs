// src/config.rs

//! A centralized place for tuning the screen.
//!
//! The constants are the defaults. `TickerConfig` can override them from a
//! JSON file named by `STOCK_TICKER_CONFIG`.

use crate::error::{Result, TickerError};
use crate::stocks::{StockEntry, default_stock_universe};
use crate::ticker::{Easing, TickerSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

// --- Ticker ---
pub const ITEM_WIDTH: f32 = 180.0;
pub const CYCLE_DURATION_MS: u64 = 3000;
pub const MIN_BUFFER_SIZE: usize = 10;
pub const MAX_BUFFER_SIZE: usize = 512;
pub const TICKER_HEIGHT: f32 = 80.0;

// --- Layout ---
pub const LEFT_PANEL_WIDTH: f32 = 250.0;
pub const ICON_SIZE: f32 = 40.0;
pub const WINDOW_WIDTH: f32 = 1100.0;
pub const WINDOW_HEIGHT: f32 = 760.0;

pub const CONFIG_ENV_VAR: &str = "STOCK_TICKER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub item_width: f32,
    pub cycle_duration_ms: u64,
    pub min_buffer_size: usize,
    pub window_width: f32,
    pub window_height: f32,
    /// Stocks shown at startup.
    pub presets: Vec<StockEntry>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            item_width: ITEM_WIDTH,
            cycle_duration_ms: CYCLE_DURATION_MS,
            min_buffer_size: MIN_BUFFER_SIZE,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            presets: default_stock_universe(),
        }
    }
}

impl TickerConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.as_ref().display(), "loaded ticker config");
        Ok(config)
    }

    /// Loads the file named by `STOCK_TICKER_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.item_width.is_finite() && self.item_width > 0.0) {
            return Err(TickerError::InvalidConfig(format!(
                "item_width must be positive, got {}",
                self.item_width
            )));
        }
        if self.min_buffer_size < MIN_BUFFER_SIZE {
            return Err(TickerError::InvalidConfig(format!(
                "min_buffer_size must be at least {MIN_BUFFER_SIZE}, got {}",
                self.min_buffer_size
            )));
        }
        if self.cycle_duration_ms == 0 {
            return Err(TickerError::InvalidConfig(
                "cycle_duration_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }

    pub fn ticker_settings(&self) -> TickerSettings {
        TickerSettings {
            item_width: self.item_width,
            cycle_duration: Duration::from_millis(self.cycle_duration_ms),
            min_buffer_size: self.min_buffer_size,
            easing: Easing::Linear,
        }
    }
}

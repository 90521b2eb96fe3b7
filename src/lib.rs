// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod config;
pub mod error;
pub mod form;
pub mod icons;
pub mod logging;
pub mod panels;
pub mod picker;
pub mod screen;
pub mod stocks;
pub mod ticker;
pub mod ui;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `stocks` ---
pub use stocks::{ChangeDirection, StockEntry, StockList, Symbol};

// --- From `icons` ---
pub use icons::{BundledIcon, IconRegistry, IconSource};

// --- From the add-stock flow ---
pub use form::StockInputForm;
pub use picker::{IconPicker, PathPicker, PickedIcon, pick_stock_icon};

// --- From the ticker engine ---
pub use ticker::{RotationWindow, Slot, TickerLoop, TickerSettings};

// --- Screen and app shell ---
pub use config::TickerConfig;
pub use error::{Result, TickerError};
pub use panels::StatsPanel;
pub use screen::{ScreenAction, ScreenState};
pub use ui::TickerApp;

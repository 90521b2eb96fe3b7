// src/stocks/mod.rs
// -----------------
pub mod definitions;

// Re-export the most useful items so callers don’t have to dive
// another level down the path.
pub use definitions::{ChangeDirection, StockEntry, StockList, Symbol, default_stock_universe};

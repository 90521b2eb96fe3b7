// src/stocks/definitions.rs
//! Stock entries shown by the ticker and the card list.
//
//! The preset universe is hard-coded. A config file can replace it, see
//! `TickerConfig::presets`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type Symbol = String;

/// One displayable stock. Prices and changes are display strings, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Ticker symbol (e.g. "AAPL").
    pub symbol: Symbol,
    /// Display-formatted price.
    pub price: String,
    /// Signed percentage string, e.g. "+1.2%".
    pub change: String,
    /// User-supplied icon URI, if the entry was added with a custom icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Which way a stock moved, as far as colouring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeDirection {
    /// Only a leading `+` counts as up. "1.2%" is down.
    pub fn of(change: &str) -> Self {
        if change.starts_with('+') {
            ChangeDirection::Up
        } else {
            ChangeDirection::Down
        }
    }
}

impl StockEntry {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>, T3: Into<String>>(
        symbol: T1,
        price: T2,
        change: T3,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
            change: change.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, uri: impl Into<String>) -> Self {
        self.icon = Some(uri.into());
        self
    }

    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(&self.change)
    }
}

/// The stocks on screen when the app boots.
#[inline]
pub fn default_stock_universe() -> Vec<StockEntry> {
    vec![
        StockEntry::new("AAPL", "150.25", "+1.2%"),
        StockEntry::new("GOOGL", "2750.80", "-0.5%"),
        StockEntry::new("MSFT", "305.10", "+0.8%"),
        StockEntry::new("AMZN", "3300.45", "+0.3%"),
        StockEntry::new("FB", "335.20", "-0.7%"),
    ]
}

/// Immutable snapshot of the stock list.
///
/// Adding a stock produces a new snapshot with a higher `revision`; consumers
/// compare revisions to notice that the list changed. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct StockList {
    entries: Arc<[StockEntry]>,
    revision: u64,
}

impl StockList {
    pub fn new(entries: Vec<StockEntry>) -> Self {
        Self {
            entries: entries.into(),
            revision: 0,
        }
    }

    /// Returns a new snapshot with `entry` appended.
    pub fn with_added(&self, entry: StockEntry) -> Self {
        let mut entries = self.entries.to_vec();
        entries.push(entry);
        Self {
            entries: entries.into(),
            revision: self.revision + 1,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StockEntry> {
        self.entries.get(index)
    }

    /// The entry a rotation key maps to: `stocks[key mod len]`.
    pub fn at_key(&self, key: u64) -> Option<&StockEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let index = (key % self.entries.len() as u64) as usize;
        self.entries.get(index)
    }

    /// First entry with the given symbol. Symbols are not enforced unique.
    pub fn get_by_symbol(&self, symbol: &str) -> Option<&StockEntry> {
        self.entries.iter().find(|s| s.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StockEntry> {
        self.entries.iter()
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.entries.iter().map(|s| s.symbol.clone()).collect()
    }
}

impl Default for StockList {
    fn default() -> Self {
        Self::new(default_stock_universe())
    }
}

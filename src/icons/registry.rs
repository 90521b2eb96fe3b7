// src/icons/registry.rs
//! Symbol → icon lookup.

use crate::stocks::{StockEntry, Symbol};
use std::collections::HashMap;

/// Icons shipped with the app for the preset symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundledIcon {
    Apple,
    Google,
    Microsoft,
    Amazon,
    Facebook,
}

impl BundledIcon {
    pub const ALL: [BundledIcon; 5] = [
        BundledIcon::Apple,
        BundledIcon::Google,
        BundledIcon::Microsoft,
        BundledIcon::Amazon,
        BundledIcon::Facebook,
    ];

    /// Resource identifier of the bundled asset.
    pub fn resource_id(self) -> &'static str {
        match self {
            BundledIcon::Apple => "apple-icon",
            BundledIcon::Google => "google-icon",
            BundledIcon::Microsoft => "microsoft-icon",
            BundledIcon::Amazon => "amazon-icon",
            BundledIcon::Facebook => "facebook-icon",
        }
    }

    /// Preset symbol this icon belongs to.
    pub fn symbol(self) -> &'static str {
        match self {
            BundledIcon::Apple => "AAPL",
            BundledIcon::Google => "GOOGL",
            BundledIcon::Microsoft => "MSFT",
            BundledIcon::Amazon => "AMZN",
            BundledIcon::Facebook => "FB",
        }
    }
}

/// Where an icon comes from. Renderers accept both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Bundled(BundledIcon),
    Uri(String),
}

/// Owned mapping from symbol to icon. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: HashMap<Symbol, IconSource>,
}

impl IconRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the bundled icons of the five preset symbols.
    pub fn with_presets() -> Self {
        let icons = BundledIcon::ALL
            .iter()
            .map(|icon| (icon.symbol().to_string(), IconSource::Bundled(*icon)))
            .collect();
        Self { icons }
    }

    pub fn get(&self, symbol: &str) -> Option<&IconSource> {
        self.icons.get(symbol)
    }

    /// Inserts or overwrites; returns the icon previously registered, if any.
    pub fn set(&mut self, symbol: impl Into<Symbol>, icon: IconSource) -> Option<IconSource> {
        self.icons.insert(symbol.into(), icon)
    }

    /// Registry icon first, then the entry's own URI.
    pub fn resolve(&self, entry: &StockEntry) -> Option<IconSource> {
        self.get(&entry.symbol)
            .cloned()
            .or_else(|| entry.icon.clone().map(IconSource::Uri))
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

// src/form.rs
//! The "add stock" form.

use crate::picker::PickedIcon;
use crate::stocks::StockEntry;

/// Form state. Text fields are bound straight to the UI's text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockInputForm {
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub icon: Option<PickedIcon>,
}

impl StockInputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbol, price and change must all be non-empty. Nothing else is checked.
    pub fn is_complete(&self) -> bool {
        !self.symbol.is_empty() && !self.price.is_empty() && !self.change.is_empty()
    }

    /// Takes a picker result. A cancelled pick leaves the form alone; a real
    /// one pre-fills the symbol from the file name, which the user may still edit.
    pub fn apply_picked(&mut self, picked: Option<PickedIcon>) {
        if let Some(icon) = picked {
            self.symbol = icon.symbol_hint().to_string();
            self.icon = Some(icon);
        }
    }

    /// Emits the new entry and clears the form, or returns `None` untouched.
    pub fn submit(&mut self) -> Option<StockEntry> {
        if !self.is_complete() {
            return None;
        }
        let form = std::mem::take(self);
        let mut entry = StockEntry::new(form.symbol, form.price, form.change);
        entry.icon = form.icon.map(|icon| icon.uri);
        Some(entry)
    }

    pub fn icon_label(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|_| format!("Icon selected: {}", self.symbol))
    }
}

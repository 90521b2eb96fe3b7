// src/ticker/window.rs
//! Fixed-size sliding window of materialised ticker slots.

use crate::config::MAX_BUFFER_SIZE;
use crate::stocks::{StockEntry, StockList};
use std::collections::VecDeque;

/// Number of slots needed to cover `viewport_width` plus one spare, never
/// fewer than `min_len` and never more than `MAX_BUFFER_SIZE` (unless
/// `min_len` itself is larger).
pub fn buffer_len(viewport_width: f32, item_width: f32, min_len: usize) -> usize {
    if !(item_width.is_finite() && item_width > 0.0) || !viewport_width.is_finite() {
        return min_len;
    }
    let visible = (viewport_width.max(0.0) / item_width).ceil() as usize;
    visible
        .saturating_add(1)
        .min(MAX_BUFFER_SIZE)
        .max(min_len)
}

/// A materialised ticker position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Monotonically increasing render identity.
    pub key: u64,
    pub entry: StockEntry,
}

/// Every slot satisfies `slot.entry == stocks[slot.key mod stocks.len()]`
/// for the list the window was built from.
#[derive(Debug, Clone, Default)]
pub struct RotationWindow {
    slots: VecDeque<Slot>,
    len: usize,
}

impl RotationWindow {
    /// Builds `len` slots with keys `0..len`. An empty list gives an empty window.
    pub fn materialize(stocks: &StockList, len: usize) -> Self {
        let slots = (0..len as u64)
            .filter_map(|key| {
                stocks.at_key(key).map(|entry| Slot {
                    key,
                    entry: entry.clone(),
                })
            })
            .collect();
        Self { slots, len }
    }

    /// Evicts the front slot and appends `evicted.key + len`.
    pub fn advance(&mut self, stocks: &StockList) {
        let Some(evicted) = self.slots.pop_front() else {
            return;
        };
        let key = evicted.key + self.len as u64;
        match stocks.at_key(key) {
            Some(entry) => self.slots.push_back(Slot {
                key,
                entry: entry.clone(),
            }),
            None => self.slots.push_front(evicted),
        }
    }

    /// Configured window length.
    pub fn capacity(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn keys(&self) -> Vec<u64> {
        self.slots.iter().map(|s| s.key).collect()
    }

    pub fn front(&self) -> Option<&Slot> {
        self.slots.front()
    }

    /// True if every slot still maps onto `stocks` by key.
    pub fn is_consistent_with(&self, stocks: &StockList) -> bool {
        self.slots
            .iter()
            .all(|slot| stocks.at_key(slot.key) == Some(&slot.entry))
    }
}

// ──────────────────────────────────────────────────────────────────────────────
//  Unit tests for the rotation window
// ──────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::stocks::StockEntry;

    #[test]
    fn buffer_len_has_a_floor_of_ten() {
        // ceil(300/180) + 1 = 3 -> floored to 10
        assert_eq!(buffer_len(300.0, 180.0, 10), 10);
        assert_eq!(buffer_len(0.0, 180.0, 10), 10);
        // ceil(2000/180) + 1 = 13
        assert_eq!(buffer_len(2000.0, 180.0, 10), 13);
        // exact multiple: 1800/180 = 10, + 1
        assert_eq!(buffer_len(1800.0, 180.0, 10), 11);
    }

    #[test]
    fn buffer_len_tolerates_bad_widths() {
        assert_eq!(buffer_len(1000.0, 0.0, 10), 10);
        assert_eq!(buffer_len(1000.0, -5.0, 10), 10);
        assert_eq!(buffer_len(f32::NAN, 180.0, 10), 10);
        assert_eq!(buffer_len(-100.0, 180.0, 10), 10);
    }

    #[test]
    fn buffer_len_is_capped_for_huge_viewports() {
        assert_eq!(buffer_len(f32::MAX, 180.0, 10), MAX_BUFFER_SIZE);
        assert_eq!(buffer_len(f32::MAX, f32::MIN_POSITIVE, 10), MAX_BUFFER_SIZE);
        assert_eq!(buffer_len(f32::MAX, 180.0, 1000), 1000);
    }

    #[test]
    fn materialize_maps_keys_modulo_list() {
        let stocks = StockList::default();
        let window = RotationWindow::materialize(&stocks, 10);

        assert_eq!(window.len(), 10);
        assert_eq!(window.keys(), (0..10).collect::<Vec<u64>>());
        assert!(window.is_consistent_with(&stocks));
        let symbols: Vec<&str> = window.slots().map(|s| s.entry.symbol.as_str()).collect();
        assert_eq!(&symbols[..6], &["AAPL", "GOOGL", "MSFT", "AMZN", "FB", "AAPL"]);
    }

    #[test]
    fn n_advances_shift_every_key_by_n() {
        let stocks = StockList::default();
        let mut window = RotationWindow::materialize(&stocks, 10);
        let initial = window.keys();

        for n in 1..=23u64 {
            window.advance(&stocks);
            let expected: Vec<u64> = initial.iter().map(|k| k + n).collect();
            assert_eq!(window.keys(), expected);
            assert!(window.is_consistent_with(&stocks));
        }
    }

    #[test]
    fn invariant_holds_when_length_does_not_divide_window() {
        let stocks = StockList::default().with_added(StockEntry::new("TSLA", "700", "+1%"));
        let mut window = RotationWindow::materialize(&stocks, 10);
        for _ in 0..50 {
            window.advance(&stocks);
            assert!(window.is_consistent_with(&stocks));
            assert_eq!(window.len(), 10);
        }
    }

    #[test]
    fn empty_list_gives_inert_window() {
        let stocks = StockList::new(Vec::new());
        let mut window = RotationWindow::materialize(&stocks, 10);
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 10);
        window.advance(&stocks);
        assert!(window.is_empty());
    }
}

// src/screen.rs

use crate::config::TickerConfig;
use crate::form::StockInputForm;
use crate::icons::{IconRegistry, IconSource};
use crate::panels::StatsPanel;
use crate::picker::PickedIcon;
use crate::stocks::{StockEntry, StockList};
use crate::ticker::{TickerLoop, TickerSettings};
use tracing::info;

/// Everything that can change the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Result of the icon picker; `None` means cancelled or failed.
    PickIcon(Option<PickedIcon>),
    /// The "Add Stock" button.
    Submit,
    /// One rendered frame at `now` seconds with the ticker's visible width.
    Frame { now: f64, viewport_width: f32 },
    /// Screen goes away.
    Teardown,
}

/// Owns the whole screen. The UI mutates it only through [`ScreenState::handle`]
/// (plus direct text-field binding via [`ScreenState::form_mut`]) and otherwise reads.
#[derive(Debug)]
pub struct ScreenState {
    stocks: StockList,
    icons: IconRegistry,
    form: StockInputForm,
    ticker: Option<TickerLoop>,
    settings: TickerSettings,
    stats: StatsPanel,
}

impl ScreenState {
    pub fn new(config: &TickerConfig) -> Self {
        Self {
            stocks: StockList::new(config.presets.clone()),
            icons: IconRegistry::with_presets(),
            form: StockInputForm::new(),
            ticker: None,
            settings: config.ticker_settings(),
            stats: StatsPanel::default(),
        }
    }

    /// Applies an action. Returns true when the stock list changed.
    pub fn handle(&mut self, action: ScreenAction) -> bool {
        match action {
            ScreenAction::PickIcon(picked) => {
                self.form.apply_picked(picked);
                false
            }
            ScreenAction::Submit => match self.form.submit() {
                Some(entry) => {
                    self.add_stock(entry);
                    true
                }
                None => false,
            },
            ScreenAction::Frame {
                now,
                viewport_width,
            } => {
                self.frame(now, viewport_width);
                false
            }
            ScreenAction::Teardown => {
                if let Some(ticker) = self.ticker.as_mut() {
                    ticker.teardown();
                }
                false
            }
        }
    }

    fn add_stock(&mut self, entry: StockEntry) {
        if let Some(uri) = &entry.icon {
            self.icons.set(entry.symbol.clone(), IconSource::Uri(uri.clone()));
        }
        info!(
            symbol = %entry.symbol,
            price = %entry.price,
            change = %entry.change,
            custom_icon = entry.icon.is_some(),
            "stock added"
        );
        self.stocks = self.stocks.with_added(entry);
    }

    fn frame(&mut self, now: f64, viewport_width: f32) {
        match self.ticker.as_mut() {
            Some(ticker) if !ticker.is_running() => {}
            Some(ticker) => {
                ticker.sync(&self.stocks, viewport_width, now);
                ticker.tick(now);
            }
            None => {
                self.ticker = Some(TickerLoop::mount(
                    self.stocks.clone(),
                    viewport_width,
                    self.settings,
                    now,
                ));
            }
        }
    }

    pub fn stocks(&self) -> &StockList {
        &self.stocks
    }

    pub fn icons(&self) -> &IconRegistry {
        &self.icons
    }

    pub fn form(&self) -> &StockInputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut StockInputForm {
        &mut self.form
    }

    /// `None` until the first frame mounts the ticker.
    pub fn ticker(&self) -> Option<&TickerLoop> {
        self.ticker.as_ref()
    }

    pub fn stats(&self) -> &StatsPanel {
        &self.stats
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(&TickerConfig::default())
    }
}

// -----------------------------------------------------------------------------
//  Unit tests: add-stock flow end to end
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    fn frame(screen: &mut ScreenState, now: f64) {
        screen.handle(ScreenAction::Frame {
            now,
            viewport_width: 300.0,
        });
    }

    fn fill(screen: &mut ScreenState, symbol: &str, price: &str, change: &str) {
        let form = screen.form_mut();
        form.symbol = symbol.into();
        form.price = price.into();
        form.change = change.into();
    }

    #[test]
    fn first_frame_mounts_the_ticker() {
        let mut screen = ScreenState::default();
        assert!(screen.ticker().is_none());
        frame(&mut screen, 0.0);
        let ticker = screen.ticker().unwrap();
        assert_eq!(ticker.window().len(), 10);
        assert_eq!(ticker.mount_key(), 0);
    }

    #[test]
    fn valid_submission_grows_list_by_one_and_clears_form() {
        let mut screen = ScreenState::default();
        fill(&mut screen, "TSLA", "700.00", "+3.0%");

        assert!(screen.handle(ScreenAction::Submit));
        assert_eq!(screen.stocks().len(), 6);
        assert_eq!(screen.form(), &StockInputForm::default());
    }

    #[test]
    fn incomplete_submission_leaves_list_unchanged() {
        let mut screen = ScreenState::default();
        fill(&mut screen, "TSLA", "", "+3.0%");
        let revision = screen.stocks().revision();

        assert!(!screen.handle(ScreenAction::Submit));
        assert_eq!(screen.stocks().len(), 5);
        assert_eq!(screen.stocks().revision(), revision);
        assert_eq!(screen.form().symbol, "TSLA");
    }

    #[test]
    fn custom_icon_is_registered_for_new_symbol() {
        let mut screen = ScreenState::default();
        screen.handle(ScreenAction::PickIcon(Some(PickedIcon::new(
            "file:///icons/ACME.png",
            "ACME.png",
        ))));
        assert_eq!(screen.form().symbol, "ACME");
        screen.form_mut().price = "12.00".into();
        screen.form_mut().change = "-0.1%".into();

        assert!(screen.handle(ScreenAction::Submit));
        assert_eq!(
            screen.icons().get("ACME"),
            Some(&IconSource::Uri("file:///icons/ACME.png".into()))
        );
    }

    #[test]
    fn cancelled_pick_changes_nothing() {
        let mut screen = ScreenState::default();
        fill(&mut screen, "X", "1", "+1%");
        let before = screen.form().clone();
        screen.handle(ScreenAction::PickIcon(None));
        assert_eq!(screen.form(), &before);
    }

    #[test]
    fn adding_a_stock_reseeds_the_ticker_on_next_frame() {
        let mut screen = ScreenState::default();
        frame(&mut screen, 0.0);
        frame(&mut screen, 4.0);
        assert_eq!(screen.ticker().unwrap().cycles(), 1);
        let old_token = screen.ticker().unwrap().cancellation_token();

        fill(&mut screen, "TSLA", "700.00", "+3.0%");
        screen.handle(ScreenAction::Submit);
        frame(&mut screen, 4.5);

        let ticker = screen.ticker().unwrap();
        assert!(old_token.is_cancelled());
        assert_eq!(ticker.mount_key(), 1);
        assert_eq!(ticker.cycles(), 0);
        assert_eq!(ticker.offset(), 0.0);
        assert_eq!(ticker.stocks().len(), 6);
        assert!(ticker.window().is_consistent_with(screen.stocks()));
    }

    #[test]
    fn teardown_stops_the_ticker() {
        let mut screen = ScreenState::default();
        frame(&mut screen, 0.0);
        screen.handle(ScreenAction::Teardown);
        frame(&mut screen, 9.0);

        let ticker = screen.ticker().unwrap();
        assert!(!ticker.is_running());
        assert_eq!(ticker.cycles(), 0);
    }
}

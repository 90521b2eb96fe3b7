// src/ticker/animation.rs

use super::timer::{CancellationToken, Easing, RepeatingTimer, TimerPoll};
use super::window::{RotationWindow, buffer_len};
use crate::config::{CYCLE_DURATION_MS, ITEM_WIDTH, MIN_BUFFER_SIZE};
use crate::stocks::StockList;
use std::time::Duration;
use tracing::{debug, info};

/// Geometry and timing of the ticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerSettings {
    pub item_width: f32,
    pub cycle_duration: Duration,
    pub min_buffer_size: usize,
    pub easing: Easing,
}

impl Default for TickerSettings {
    fn default() -> Self {
        Self {
            item_width: ITEM_WIDTH,
            cycle_duration: Duration::from_millis(CYCLE_DURATION_MS),
            min_buffer_size: MIN_BUFFER_SIZE,
            easing: Easing::Linear,
        }
    }
}

/// The endlessly scrolling ticker.
///
/// While animating, the strip slides from offset 0 to `-item_width` over one
/// cycle. When a cycle completes the offset snaps back to 0 and the window
/// advances by one slot in the same frame, so the snap is never visible.
///
/// A new stock list is never merged in: the loop re-seeds from scratch with a
/// fresh mount key, which restarts the strip from offset 0.
#[derive(Debug)]
pub struct TickerLoop {
    settings: TickerSettings,
    stocks: StockList,
    window: RotationWindow,
    timer: RepeatingTimer,
    viewport_width: f32,
    mount_key: u64,
    offset: f32,
    cycles: u64,
}

impl TickerLoop {
    pub fn mount(stocks: StockList, viewport_width: f32, settings: TickerSettings, now: f64) -> Self {
        let len = buffer_len(viewport_width, settings.item_width, settings.min_buffer_size);
        let window = RotationWindow::materialize(&stocks, len);
        debug!(
            stocks = stocks.len(),
            window = len,
            revision = stocks.revision(),
            "ticker mounted"
        );
        Self {
            timer: RepeatingTimer::start(settings.cycle_duration, settings.easing, now),
            settings,
            stocks,
            window,
            viewport_width,
            mount_key: 0,
            offset: 0.0,
            cycles: 0,
        }
    }

    /// Throws away the current window and animation and starts over.
    pub fn reseed(&mut self, stocks: StockList, viewport_width: f32, now: f64) {
        self.timer.cancel();
        let mount_key = self.mount_key + 1;
        *self = Self::mount(stocks, viewport_width, self.settings, now);
        self.mount_key = mount_key;
        info!(
            mount_key,
            stocks = self.stocks.len(),
            "ticker re-seeded"
        );
    }

    /// Re-seeds if the list changed. A resize alone never restarts the strip;
    /// the new width only sizes the window at the next re-seed.
    /// Returns true when a re-seed happened.
    pub fn sync(&mut self, stocks: &StockList, viewport_width: f32, now: f64) -> bool {
        if stocks.revision() != self.stocks.revision() {
            self.reseed(stocks.clone(), viewport_width, now);
            return true;
        }
        self.viewport_width = viewport_width;
        false
    }

    /// Advances the animation to `now` and returns the strip offset to draw.
    pub fn tick(&mut self, now: f64) -> f32 {
        match self.timer.poll(now) {
            TimerPoll::Cancelled => self.offset,
            TimerPoll::Running {
                progress,
                completed,
            } => {
                for _ in 0..completed {
                    self.advance();
                }
                self.offset = -self.settings.item_width * progress;
                self.offset
            }
        }
    }

    fn advance(&mut self) {
        self.offset = 0.0;
        self.window.advance(&self.stocks);
        self.cycles += 1;
        debug!(
            cycles = self.cycles,
            front = self.window.front().map(|s| s.key),
            "ticker advanced"
        );
    }

    /// Stops the loop for good. Later ticks neither move nor advance.
    pub fn teardown(&mut self) {
        if !self.timer.is_cancelled() {
            debug!(mount_key = self.mount_key, "ticker torn down");
        }
        self.timer.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.timer.is_cancelled()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.timer.token()
    }

    pub fn window(&self) -> &RotationWindow {
        &self.window
    }

    pub fn stocks(&self) -> &StockList {
        &self.stocks
    }

    pub fn settings(&self) -> &TickerSettings {
        &self.settings
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn mount_key(&self) -> u64 {
        self.mount_key
    }

    /// Cycles completed since the last (re)mount.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
}

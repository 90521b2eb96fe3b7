// src/ticker/timer.rs
//! A repeating timer driven by the frame clock.
//!
//! Time is passed in explicitly as seconds (egui's `input.time`), so the timer
//! never sleeps and never owns a thread. A [`CancellationToken`] is captured
//! when the timer starts; once cancelled, polls report `Cancelled` forever.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared cancel flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Progress curve for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
        }
    }
}

/// Result of polling the timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerPoll {
    Cancelled,
    Running {
        /// Eased progress through the current cycle, in `[0, 1)`.
        progress: f32,
        /// Cycles that finished since the previous poll.
        completed: u64,
    },
}

#[derive(Debug)]
pub struct RepeatingTimer {
    period: f64,
    cycle_started_at: f64,
    easing: Easing,
    token: CancellationToken,
}

impl RepeatingTimer {
    pub fn start(period: Duration, easing: Easing, now: f64) -> Self {
        Self {
            period: period.as_secs_f64(),
            cycle_started_at: now,
            easing,
            token: CancellationToken::new(),
        }
    }

    /// A handle to this timer's cancel flag.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn poll(&mut self, now: f64) -> TimerPoll {
        if self.token.is_cancelled() {
            return TimerPoll::Cancelled;
        }
        if self.period <= 0.0 {
            return TimerPoll::Running {
                progress: 0.0,
                completed: 0,
            };
        }

        // a clock that steps backwards is treated as no time passing
        let elapsed = (now - self.cycle_started_at).max(0.0);
        let completed = (elapsed / self.period).floor();
        self.cycle_started_at += completed * self.period;

        let into_cycle = (now - self.cycle_started_at).max(0.0) / self.period;
        TimerPoll::Running {
            progress: self.easing.apply(into_cycle as f32),
            completed: completed as u64,
        }
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_seconds() -> Duration {
        Duration::from_millis(3000)
    }

    #[test]
    fn progress_is_linear_within_a_cycle() {
        let mut timer = RepeatingTimer::start(three_seconds(), Easing::Linear, 10.0);
        assert_eq!(
            timer.poll(10.0),
            TimerPoll::Running { progress: 0.0, completed: 0 }
        );
        match timer.poll(11.5) {
            TimerPoll::Running { progress, completed } => {
                assert!((progress - 0.5).abs() < 1e-6);
                assert_eq!(completed, 0);
            }
            other => panic!("unexpected poll {other:?}"),
        }
    }

    #[test]
    fn completed_cycles_are_reported_once() {
        let mut timer = RepeatingTimer::start(three_seconds(), Easing::Linear, 0.0);
        match timer.poll(7.5) {
            TimerPoll::Running { progress, completed } => {
                assert_eq!(completed, 2);
                assert!((progress - 0.5).abs() < 1e-6);
            }
            other => panic!("unexpected poll {other:?}"),
        }
        match timer.poll(8.0) {
            TimerPoll::Running { completed, .. } => assert_eq!(completed, 0),
            other => panic!("unexpected poll {other:?}"),
        }
        match timer.poll(9.0) {
            TimerPoll::Running { completed, progress } => {
                assert_eq!(completed, 1);
                assert!(progress.abs() < 1e-6);
            }
            other => panic!("unexpected poll {other:?}"),
        }
    }

    #[test]
    fn clock_going_backwards_is_harmless() {
        let mut timer = RepeatingTimer::start(three_seconds(), Easing::Linear, 5.0);
        assert_eq!(
            timer.poll(4.0),
            TimerPoll::Running { progress: 0.0, completed: 0 }
        );
    }

    #[test]
    fn cancelled_timer_stops_reporting() {
        let mut timer = RepeatingTimer::start(three_seconds(), Easing::Linear, 0.0);
        let token = timer.token();
        token.cancel();
        assert!(timer.is_cancelled());
        assert_eq!(timer.poll(100.0), TimerPoll::Cancelled);
    }

    #[test]
    fn dropping_the_timer_cancels_its_token() {
        let timer = RepeatingTimer::start(three_seconds(), Easing::Linear, 0.0);
        let token = timer.token();
        assert!(!token.is_cancelled());
        drop(timer);
        assert!(token.is_cancelled());
    }

    #[test]
    fn easing_clamps() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
        assert_eq!(Easing::default(), Easing::Linear);
    }
}

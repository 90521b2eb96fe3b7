// src/ticker/mod.rs
pub mod animation;
pub mod timer;
pub mod window;

pub use animation::{TickerLoop, TickerSettings};
pub use timer::{CancellationToken, Easing, RepeatingTimer, TimerPoll};
pub use window::{RotationWindow, Slot, buffer_len};

//! Platform abstraction layer
//!
//! Handles the host side of the loop:
//! - Input events (key presses filtered into paddle commands)
//! - Time/ticks (fixed-rate timer)

pub mod input;
pub mod time;

pub use input::{Command, HostEvent, InputSlot, Key};
pub use time::FixedClock;

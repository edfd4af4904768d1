//! Timer module
//!
//! The countdown state machine and the owned periodic ticker that drives it.

pub mod countdown;
pub mod ticker;

pub use countdown::{parse_duration_input, Countdown, TimerEvent};
pub use ticker::Ticker;

//! Hardware-independent control logic of the click counter.
//!
//! Button edges are coalesced inside a counting window into a gesture. Once
//! the window expires, the gesture toggles one of three blinking indicators.
//! All state lives in [`Clicker`], which is meant to be shared between the
//! edge interrupt and the tick task behind a lock.

#![no_std]

mod blink;
mod clicker;
mod debounce;
mod gesture;
pub mod timing;
mod window;

pub use blink::BlinkChannel;
pub use clicker::{Clicker, Edge, Expiry, Levels, Tick};
pub use gesture::{Channel, Gesture, CHANNELS};
pub use timing::Timing;
pub use window::CountWindow;

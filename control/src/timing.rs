//! Fixed timing constants, expressed in ticks of the control loop.

use crate::gesture::CHANNELS;

/// Frequency at which [`crate::Clicker::tick`] is expected to be called.
pub const TICK_RATE_HZ: u32 = 1_000;

/// Duration measured in control loop ticks.
pub type Ticks = fugit::TimerDurationU32<TICK_RATE_HZ>;

/// Timing of the counting window, debouncing and blinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Length of the window in which clicks are counted into a single gesture.
    pub window: u32,
    /// Minimum spacing between two edges for both to be considered distinct presses.
    pub debounce: u32,
    /// Half-period of each indicator, i.e. ticks between two inversions.
    pub periods: [u32; CHANNELS],
}

impl Timing {
    pub const DEFAULT: Self = Self {
        window: Ticks::millis(1000).ticks(),
        debounce: Ticks::millis(30).ticks(),
        periods: [
            Ticks::millis(250).ticks(),
            Ticks::millis(500).ticks(),
            Ticks::millis(1000).ticks(),
        ],
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! State shared between the button edge interrupt and the tick task.

use crate::blink::BlinkChannel;
use crate::debounce::Debouncer;
use crate::gesture::{Channel, Gesture, CHANNELS};
use crate::timing::Timing;
use crate::window::CountWindow;

/// Complete state of the click counter and its indicators.
///
/// Both [`Clicker::edge`] and [`Clicker::tick`] mutate multiple fields, the
/// caller must make sure they never interleave, e.g. by keeping the clicker
/// behind a shared resource lock.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clicker {
    now: u32,
    debouncer: Debouncer,
    window: CountWindow,
    channels: [BlinkChannel; CHANNELS],
}

/// How a button edge was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Rejected as a contact bounce.
    Bounced,
    /// First click of a new gesture, the window started counting.
    Armed,
    /// Additional click in an already counting window.
    Counted(u8),
}

/// Result of a window expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expiry {
    Toggled { gesture: Gesture, active: bool },
    Ignored { clicks: u8 },
}

/// Output level of each indicator, `true` being lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Levels(pub [bool; CHANNELS]);

impl Levels {
    pub fn get(&self, channel: Channel) -> bool {
        self.0[channel.index()]
    }
}

/// Everything the caller needs to know after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub expired: Option<Expiry>,
    pub levels: Levels,
}

impl Clicker {
    /// # Panics
    ///
    /// Zero-length window or blink period is rejected with a panic.
    pub const fn new(timing: Timing) -> Self {
        Self {
            now: 0,
            debouncer: Debouncer::new(timing.debounce),
            window: CountWindow::new(timing.window),
            channels: [
                BlinkChannel::new(timing.periods[0]),
                BlinkChannel::new(timing.periods[1]),
                BlinkChannel::new(timing.periods[2]),
            ],
        }
    }

    /// Handle a falling edge of the button.
    ///
    /// Must be called once per edge interrupt. It never blocks.
    pub fn edge(&mut self) -> Edge {
        if !self.debouncer.qualify(self.now) {
            return Edge::Bounced;
        }

        let armed_before = self.window.is_armed();
        let clicks = self.window.click();
        if armed_before {
            Edge::Counted(clicks)
        } else {
            Edge::Armed
        }
    }

    /// Advance time by a single tick.
    ///
    /// Ages the counting window, toggles the selected indicator when it
    /// expires, and steps all blink channels.
    pub fn tick(&mut self) -> Tick {
        self.now = self.now.wrapping_add(1);

        let expired = self.window.age().map(|clicks| self.finalize(clicks));

        for channel in self.channels.iter_mut() {
            channel.step();
        }

        Tick {
            expired,
            levels: self.levels(),
        }
    }

    fn finalize(&mut self, clicks: u8) -> Expiry {
        match Gesture::from_clicks(clicks) {
            Some(gesture) => {
                let active = self.channels[gesture.channel().index()].toggle();
                Expiry::Toggled { gesture, active }
            }
            None => Expiry::Ignored { clicks },
        }
    }

    pub fn levels(&self) -> Levels {
        let mut levels = Levels::default();
        for (level, channel) in levels.0.iter_mut().zip(self.channels.iter()) {
            *level = channel.is_lit();
        }
        levels
    }

    pub fn channel(&self, channel: Channel) -> &BlinkChannel {
        &self.channels[channel.index()]
    }

    pub fn window(&self) -> &CountWindow {
        &self.window
    }

    /// Ticks elapsed since startup, wrapping on overflow.
    pub fn now(&self) -> u32 {
        self.now
    }
}

impl Default for Clicker {
    fn default() -> Self {
        Self::new(Timing::DEFAULT)
    }
}

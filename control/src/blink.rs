//! Independently timed blinking of a single indicator.

/// Blink generator of a single indicator, advanced synchronously by ticks.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkChannel {
    period: u32,
    phase: u32,
    active: bool,
    lit: bool,
}

impl BlinkChannel {
    /// # Panics
    ///
    /// The period is measured in ticks between two inversions of the output.
    /// It panics if it is zero.
    pub const fn new(period: u32) -> Self {
        assert!(period > 0, "Blink period must be at least one tick long");
        Self {
            period,
            phase: 0,
            active: false,
            lit: false,
        }
    }

    /// Flip between blinking and dark, returning whether the channel is now active.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        if self.active {
            // Start a clean cycle, a stale phase could cause an early inversion.
            self.phase = 0;
        }
        self.active
    }

    pub fn step(&mut self) {
        if self.active {
            self.phase += 1;
            if self.phase == self.period {
                self.phase = 0;
                self.lit = !self.lit;
            }
        } else {
            self.lit = false;
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

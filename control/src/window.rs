//! Window in which successive clicks are coalesced into a single gesture.

/// Counting window shared between the edge interrupt and the tick task.
///
/// The window is either idle, or counting down towards its expiry. The click
/// count is only meaningful while counting.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountWindow {
    length: u32,
    remaining: u32,
    clicks: u8,
    armed: bool,
}

impl CountWindow {
    /// # Panics
    ///
    /// Window of zero length would never expire. It panics in such case.
    pub const fn new(length: u32) -> Self {
        assert!(length > 0, "Counting window must be at least one tick long");
        Self {
            length,
            remaining: 0,
            clicks: 0,
            armed: false,
        }
    }

    /// Register a qualified click, arming the window if it was idle.
    ///
    /// Returns the number of clicks collected so far. The expiry is never
    /// postponed by subsequent clicks.
    pub(crate) fn click(&mut self) -> u8 {
        if self.armed {
            self.clicks = self.clicks.saturating_add(1);
        } else {
            self.armed = true;
            self.remaining = self.length;
            self.clicks = 1;
        }
        self.clicks
    }

    /// Move one tick closer to the expiry.
    ///
    /// Returns the collected click count on the tick the window expires. The
    /// count is consumed, so it is returned only once per window.
    pub(crate) fn age(&mut self) -> Option<u8> {
        if !self.armed {
            return None;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.armed = false;
            Some(core::mem::take(&mut self.clicks))
        } else {
            None
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn clicks(&self) -> u8 {
        self.clicks
    }
}

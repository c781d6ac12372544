//! Rejection of contact bounce based on the tick counter.

/// Accepts an edge only when the line stayed quiet for the guard interval.
///
/// The edge interrupt fires only on transitions, so elapsed time is measured
/// against the monotonic tick counter instead of being counted down on each
/// interrupt.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Debouncer {
    guard: u32,
    last_edge: Option<u32>,
}

impl Debouncer {
    pub(crate) const fn new(guard: u32) -> Self {
        Self {
            guard,
            last_edge: None,
        }
    }

    /// Register an edge observed at `now` and tell whether it qualifies.
    ///
    /// Rejected edges restart the guard interval too, so a contact that keeps
    /// bouncing stays rejected until it settles.
    pub(crate) fn qualify(&mut self, now: u32) -> bool {
        let qualifies = match self.last_edge {
            Some(last) => now.wrapping_sub(last) >= self.guard,
            None => true,
        };
        self.last_edge = Some(now);
        qualifies
    }
}

//! Request generation tagging.
//!
//! Availability requests are independent and may complete out of order, and
//! they outlive the page visit that sent them. Page visits and requests are
//! tagged from one [`RequestGeneration`] that lives as long as the app, so a
//! tag is never reused; only the answer to the latest request of the current
//! visit may touch the page.

use std::fmt;

/// Tag of one page visit or one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic counter owned by the app state. Never reset.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Issue a fresh tag. It differs from every tag issued before.
    pub fn next(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }
}

//! Delta-time measurement between frames.

use std::time::Instant;

/// Measures elapsed seconds between consecutive frames.
///
/// The first call to [`advance`](Self::advance) establishes the baseline and
/// reports zero, so the first frame produces no motion. Timestamps are
/// passed in rather than sampled internally, which makes frame sequences
/// replayable in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    /// Creates a clock with no baseline yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the seconds elapsed since the previous call and records `now`.
    ///
    /// The first call returns `0.0`. A `now` earlier than the previous
    /// timestamp also yields `0.0` rather than a negative delta.
    pub fn advance(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    /// Forgets the baseline; the next [`advance`](Self::advance) returns zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

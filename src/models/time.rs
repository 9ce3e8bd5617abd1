use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Error returned when an interval would violate the `start < end` invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("interval start {start} must be strictly before end {end}")]
pub struct InvalidInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Half-open UTC time interval `[start, end)`.
///
/// The start instant is included, the end instant is excluded; two intervals
/// that merely touch at a boundary do not overlap. The `start < end`
/// invariant is enforced by construction, so a `TimeInterval` is never
/// empty or reversed. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeInterval {
    /// Create an interval from explicit UTC endpoints.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidInterval> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval { start, end })
        }
    }

    /// Create an interval covering `duration` from `start`.
    ///
    /// Zero and negative durations are rejected through the interval
    /// invariant, as is arithmetic overflow of the end instant.
    pub fn from_start_and_duration(
        start: DateTime<Utc>,
        duration: Duration,
    ) -> Result<Self, InvalidInterval> {
        let end = start.checked_add_signed(duration).unwrap_or(start);
        Self::new(start, end)
    }

    /// Start instant (inclusive).
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End instant (exclusive).
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Span of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open overlap test: `self.start < other.end && self.end > other.start`.
    ///
    /// This is the single overlap predicate used everywhere in the crate —
    /// conflict detection, candidate-slot validation, and the storage
    /// pre-filter all agree on this boundary behavior.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A free candidate interval produced by the slot search.
///
/// A proposed slot is an offer, not a booking; it carries no state beyond
/// its interval and only becomes a meeting through a separate scheduling
/// call that succeeds against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProposedSlot {
    pub interval: TimeInterval,
}

impl From<TimeInterval> for ProposedSlot {
    fn from(interval: TimeInterval) -> Self {
        Self { interval }
    }
}

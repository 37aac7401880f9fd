//! Time management for the simulation
//!
//! The clock operates in discrete one-minute ticks; 1440 ticks form a day.
//! This module provides deterministic time advancement and the
//! minute-to-day conversion used when reporting cycle lengths.

use serde::{Deserialize, Serialize};

/// Number of simulated minutes in one day (24 hours x 60 minutes).
pub const MINUTES_PER_DAY: usize = 24 * 60;

/// Tracks elapsed simulation time in minutes and days
///
/// # Example
/// ```
/// use ball_clock_core_rs::ClockTime;
///
/// let mut time = ClockTime::new();
/// assert_eq!(time.elapsed_minutes(), 0);
/// assert_eq!(time.elapsed_days(), 0);
///
/// time.advance_minute();
/// assert_eq!(time.elapsed_minutes(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// Total minutes elapsed since simulation start
    elapsed_minutes: usize,
}

impl ClockTime {
    /// Create a new `ClockTime` at minute zero
    pub fn new() -> Self {
        Self { elapsed_minutes: 0 }
    }

    /// Advance time by one minute
    pub fn advance_minute(&mut self) {
        self.elapsed_minutes += 1;
    }

    /// Total minutes elapsed since start
    pub fn elapsed_minutes(&self) -> usize {
        self.elapsed_minutes
    }

    /// Whole days elapsed (1440 minutes each)
    ///
    /// # Example
    /// ```
    /// use ball_clock_core_rs::{ClockTime, MINUTES_PER_DAY};
    ///
    /// let mut time = ClockTime::new();
    /// for _ in 0..MINUTES_PER_DAY {
    ///     time.advance_minute();
    /// }
    /// assert_eq!(time.elapsed_days(), 1);
    /// ```
    pub fn elapsed_days(&self) -> usize {
        self.elapsed_minutes / MINUTES_PER_DAY
    }

    /// Minute within the current day (0-indexed)
    pub fn minute_within_day(&self) -> usize {
        self.elapsed_minutes % MINUTES_PER_DAY
    }

    /// True when elapsed time is an exact number of days
    ///
    /// Cycle lengths for valid ball counts always land on a day boundary.
    pub fn is_day_boundary(&self) -> bool {
        self.minute_within_day() == 0
    }
}

//! Bounded ball trays
//!
//! A tray is an ordered holding area with a fixed capacity. Balls enter
//! at the back and leave from either end: the front when the clock arm
//! lifts the next ball, the back when a full tray tilts and drains.
//!
//! A push against a full tray is refused without mutation; the caller
//! (the clock engine) decides how to redistribute. Popping an empty tray
//! is a logic error in the tick algorithm, never a normal condition.

use crate::models::ball::Ball;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during tray operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrayError {
    /// Push refused: the tray already holds `capacity` balls.
    /// The tray is unchanged; the caller must drain and cascade.
    #[error("tray full: already holds {capacity} balls")]
    Full { capacity: usize },

    /// Pop from an empty tray. Unreachable while the conservation
    /// invariant holds; treated as fatal by callers.
    #[error("pop from empty tray")]
    Empty,
}

/// The three indicator trays, in the order a cascading ball visits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrayKind {
    Minute,
    FiveMinute,
    Hour,
}

impl TrayKind {
    /// Cascade order: a ball spilling off one tray proceeds to the next
    pub const CASCADE: [TrayKind; 3] = [TrayKind::Minute, TrayKind::FiveMinute, TrayKind::Hour];

    /// Fixed capacity of this indicator tray
    ///
    /// The hour tray holds 11 free balls; its 12th, permanently fixed
    /// ball never moves and is not modeled.
    pub fn capacity(self) -> usize {
        match self {
            TrayKind::Minute => 4,
            TrayKind::FiveMinute | TrayKind::Hour => 11,
        }
    }
}

impl fmt::Display for TrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrayKind::Minute => "minute",
            TrayKind::FiveMinute => "five-minute",
            TrayKind::Hour => "hour",
        };
        write!(f, "{}", label)
    }
}

/// A bounded, ordered holding area for balls
///
/// Invariant: `len() <= capacity()` at all times between operations.
/// Trays are created empty and never resized.
///
/// # Example
/// ```
/// use ball_clock_core_rs::{Ball, Tray};
///
/// let mut tray = Tray::new(4);
/// tray.push(Ball(1)).unwrap();
/// tray.push(Ball(2)).unwrap();
///
/// assert_eq!(tray.len(), 2);
/// assert_eq!(tray.pop_front().unwrap(), Ball(1)); // earliest arrival
/// assert_eq!(tray.pop_back().unwrap(), Ball(2));  // latest arrival
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tray {
    items: VecDeque<Ball>,
    capacity: usize,
}

impl Tray {
    /// Create an empty tray with the given fixed capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a tray from pre-seeded contents (bottom queue construction)
    pub(crate) fn from_parts(items: VecDeque<Ball>, capacity: usize) -> Self {
        assert!(items.len() <= capacity, "seeded past capacity");
        Self { items, capacity }
    }

    /// Append a ball at the back
    ///
    /// Returns `Err(TrayError::Full)` without mutating when the tray is
    /// at capacity.
    pub fn push(&mut self, ball: Ball) -> Result<(), TrayError> {
        if self.items.len() >= self.capacity {
            return Err(TrayError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push_back(ball);
        Ok(())
    }

    /// Remove and return the earliest-inserted ball
    pub fn pop_front(&mut self) -> Result<Ball, TrayError> {
        self.items.pop_front().ok_or(TrayError::Empty)
    }

    /// Remove and return the most-recently-inserted ball (drain path)
    pub fn pop_back(&mut self) -> Result<Ball, TrayError> {
        self.items.pop_back().ok_or(TrayError::Empty)
    }

    /// Number of balls currently held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the tray holds no balls
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when one more push would overflow
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Maximum number of balls this tray can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Balls in order from earliest to latest arrival
    pub fn balls(&self) -> impl Iterator<Item = Ball> + '_ {
        self.items.iter().copied()
    }
}

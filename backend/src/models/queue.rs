//! Bottom queue
//!
//! The reservoir at the base of the clock. It is a tray whose capacity
//! equals the total ball count, seeded with balls `1..=n` in ascending
//! order. That seeded arrangement is the canonical order whose recurrence
//! defines the cycle length.
//!
//! The queue is both the source of the ball elevated each minute (from
//! the front) and the receiver of balls drained from tilting trays (at
//! the back). The canonical-order check is a capability layered over a
//! plain [`Tray`] by composition, not a subtype.

use crate::models::ball::Ball;
use crate::models::tray::{Tray, TrayError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The bottom reservoir of the clock
///
/// # Example
/// ```
/// use ball_clock_core_rs::{Ball, BallQueue};
///
/// let mut queue = BallQueue::new(30);
/// assert!(queue.is_canonical_order());
///
/// let first = queue.pop_front().unwrap();
/// assert_eq!(first, Ball(1));
/// assert!(!queue.is_canonical_order());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallQueue {
    tray: Tray,
}

impl BallQueue {
    /// Create a queue of capacity `ball_count`, seeded `1..=ball_count`
    pub fn new(ball_count: u32) -> Self {
        let items: VecDeque<Ball> = (1..=ball_count).map(Ball).collect();
        Self {
            tray: Tray::from_parts(items, ball_count as usize),
        }
    }

    /// True iff the queue holds exactly `1, 2, ..., n` in order
    ///
    /// Both completeness and order are required: a queue missing balls
    /// (because some rest on trays) is never canonical. This is the
    /// termination oracle for the simulation, evaluated once per tick.
    pub fn is_canonical_order(&self) -> bool {
        self.tray.len() == self.tray.capacity()
            && self.tray.balls().zip(1..).all(|(ball, n)| ball.number() == n)
    }

    /// Remove and return the least-recently-returned ball (front)
    pub fn pop_front(&mut self) -> Result<Ball, TrayError> {
        self.tray.pop_front()
    }

    /// Append a returning ball at the back
    ///
    /// `Err(TrayError::Full)` here means a ball was duplicated somewhere;
    /// callers treat it as a fatal invariant violation.
    pub fn push(&mut self, ball: Ball) -> Result<(), TrayError> {
        self.tray.push(ball)
    }

    /// Number of balls currently waiting
    pub fn len(&self) -> usize {
        self.tray.len()
    }

    /// True when no balls are waiting (cannot happen for valid counts)
    pub fn is_empty(&self) -> bool {
        self.tray.is_empty()
    }

    /// Total ball count the queue was seeded with
    pub fn capacity(&self) -> usize {
        self.tray.capacity()
    }

    /// Balls in order from front (next to be elevated) to back
    pub fn balls(&self) -> impl Iterator<Item = Ball> + '_ {
        self.tray.balls()
    }
}

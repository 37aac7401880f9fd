//! Ball identity
//!
//! Balls are opaque numbered tokens. The number carries no meaning beyond
//! identity: it is only compared against the seeded ordering to detect
//! when the bottom queue has cycled back to its starting arrangement.
//! Balls are never created or destroyed after clock construction, only
//! relocated between the queue and the trays.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numbered ball, identified by a value in `1..=n`
///
/// # Example
/// ```
/// use ball_clock_core_rs::Ball;
///
/// let ball = Ball(7);
/// assert_eq!(ball.number(), 7);
/// assert_eq!(ball.to_string(), "7");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ball(pub u32);

impl Ball {
    /// The ball's identifying number
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Clock engine - the per-minute transfer and overflow mechanics
//!
//! A [`Clock`] owns the bottom queue and the three indicator trays and
//! advances them one minute at a time:
//!
//! ```text
//! For each tick t:
//! 1. Lift the ball at the front of the bottom queue
//! 2. Offer it to the minute, five-minute, and hour trays in order
//! 3. A tray with room accepts the ball; the tick ends there
//! 4. A full tray first tilts: its balls return to the rear of the
//!    queue in reverse order of arrival, then the ball cascades on
//! 5. Past the hour tray, the carried ball itself rejoins the queue
//! ```
//!
//! The exact drain order (most recent arrival first) is what makes the
//! ball orderings, and therefore the cycle length, come out right.

use crate::models::ball::Ball;
use crate::models::queue::BallQueue;
use crate::models::tray::{Tray, TrayError, TrayKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest supported ball count, from the original problem statement.
pub const MIN_BALLS: u32 = 27;

/// Largest supported ball count.
pub const MAX_BALLS: u32 = 127;

/// Errors that can occur constructing or ticking a clock
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    /// Ball count outside the supported range; no clock is built
    #[error("ball count {0} outside supported range {}..={}", MIN_BALLS, MAX_BALLS)]
    InvalidSize(u32),

    /// A tray operation failed mid-tick. Unreachable while the
    /// conservation invariant holds; indicates an engine bug, not bad
    /// input, and is never recoverable.
    #[error("tick invariant violated: {0}")]
    Invariant(#[from] TrayError),
}

/// One tray tilt: the drained balls in the order they rejoined the queue
/// (reverse of their arrival on the tray)
#[derive(Debug, Clone, PartialEq)]
pub struct TrayOverflow {
    pub tray: TrayKind,
    pub returned: Vec<Ball>,
}

/// What happened during a single one-minute tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// The ball the arm lifted from the queue this minute
    pub elevated: Ball,

    /// Tray the ball came to rest on, or `None` if it fell past the
    /// hour tray and rejoined the queue
    pub rested_on: Option<TrayKind>,

    /// Tilts triggered this tick, in cascade order (at most three)
    pub overflows: Vec<TrayOverflow>,
}

/// The clock mechanism: one bottom queue and three indicator trays
///
/// The clock exclusively owns all four containers. At any point between
/// ticks the multiset of balls across them is exactly `{1..n}`.
///
/// # Example
/// ```
/// use ball_clock_core_rs::{Ball, Clock, TrayKind};
///
/// let mut clock = Clock::new(30).unwrap();
/// let result = clock.tick().unwrap();
///
/// assert_eq!(result.elevated, Ball(1));
/// assert_eq!(result.rested_on, Some(TrayKind::Minute));
/// assert!(!clock.is_initial_order());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    ball_count: u32,
    queue: BallQueue,
    minute_tray: Tray,
    five_minute_tray: Tray,
    hour_tray: Tray,
}

impl Clock {
    /// Build a clock with `ball_count` balls seeded in the bottom queue
    ///
    /// # Returns
    ///
    /// * `Ok(Clock)` - queue seeded `1..=ball_count`, trays empty
    /// * `Err(ClockError::InvalidSize)` - count outside `27..=127`
    pub fn new(ball_count: u32) -> Result<Self, ClockError> {
        if !(MIN_BALLS..=MAX_BALLS).contains(&ball_count) {
            return Err(ClockError::InvalidSize(ball_count));
        }
        Ok(Self {
            ball_count,
            queue: BallQueue::new(ball_count),
            minute_tray: Tray::new(TrayKind::Minute.capacity()),
            five_minute_tray: Tray::new(TrayKind::FiveMinute.capacity()),
            hour_tray: Tray::new(TrayKind::Hour.capacity()),
        })
    }

    /// Advance the mechanism by one minute
    ///
    /// Lifts the front ball off the queue and offers it to each tray in
    /// cascade order, draining full trays along the way. See the module
    /// docs for the full algorithm.
    pub fn tick(&mut self) -> Result<TickResult, ClockError> {
        let ball = self.queue.pop_front()?;
        let mut result = TickResult {
            elevated: ball,
            rested_on: None,
            overflows: Vec::new(),
        };

        let trays = [
            (TrayKind::Minute, &mut self.minute_tray),
            (TrayKind::FiveMinute, &mut self.five_minute_tray),
            (TrayKind::Hour, &mut self.hour_tray),
        ];
        for (kind, tray) in trays {
            match tray.push(ball) {
                Ok(()) => {
                    result.rested_on = Some(kind);
                    return Ok(result);
                }
                Err(TrayError::Full { .. }) => {
                    let returned = Self::drain(tray, &mut self.queue)?;
                    result.overflows.push(TrayOverflow {
                        tray: kind,
                        returned,
                    });
                }
                // push never reports Empty; surface it as the engine bug it is
                Err(err @ TrayError::Empty) => return Err(ClockError::Invariant(err)),
            }
        }

        // Fell past the hour tray: the carried ball itself rejoins the queue
        self.queue.push(ball)?;
        Ok(result)
    }

    /// Tilt a full tray: return every ball to the rear of the queue,
    /// most recent arrival first
    fn drain(tray: &mut Tray, queue: &mut BallQueue) -> Result<Vec<Ball>, ClockError> {
        let mut returned = Vec::with_capacity(tray.len());
        while !tray.is_empty() {
            let ball = tray.pop_back()?;
            queue.push(ball)?;
            returned.push(ball);
        }
        Ok(returned)
    }

    /// True when every ball is back in the queue in seeded order
    pub fn is_initial_order(&self) -> bool {
        self.queue.is_canonical_order()
    }

    /// Total balls in this clock
    pub fn ball_count(&self) -> u32 {
        self.ball_count
    }

    /// The bottom queue
    pub fn queue(&self) -> &BallQueue {
        &self.queue
    }

    /// One of the three indicator trays
    pub fn tray(&self, kind: TrayKind) -> &Tray {
        match kind {
            TrayKind::Minute => &self.minute_tray,
            TrayKind::FiveMinute => &self.five_minute_tray,
            TrayKind::Hour => &self.hour_tray,
        }
    }

    /// Human-readable dump of tray and queue contents, for diagnostics
    pub fn render_state(&self) -> String {
        let line = |tray: &Tray| {
            tray.balls()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!(
            "minute: [{}]\nfive-minute: [{}]\nhour: [{}]\nqueue: [{}]",
            line(&self.minute_tray),
            line(&self.five_minute_tray),
            line(&self.hour_tray),
            self.queue
                .balls()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

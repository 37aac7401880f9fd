//! Simulation engine
//!
//! Given a ball count, constructs a [`Clock`], ticks it until the bottom
//! queue returns to canonical order or a step bound is exhausted, and
//! converts the elapsed minutes into days.
//!
//! # Example
//!
//! ```
//! use ball_clock_core_rs::run_clock;
//!
//! let report = run_clock(30).unwrap();
//! assert_eq!(report.days, 15);
//! assert_eq!(report.minutes, 21_600);
//! ```

use crate::clock::{Clock, ClockError, MAX_BALLS, MIN_BALLS};
use crate::core::time::{ClockTime, MINUTES_PER_DAY};
use crate::models::event::{Event, EventLog};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on simulated minutes before a run gives up.
///
/// Generous for mid-range ball counts; large valid counts can cycle
/// longer than this and surface as [`SimulationError::NoCycleFound`]
/// unless the bound is raised via [`SimulationConfig`].
pub const DEFAULT_MAX_STEPS: usize = 600_000;

/// Errors reported by a simulation run
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// Ball count outside the supported range; nothing was simulated
    #[error("invalid ball count {0}: supported range is {}..={}", MIN_BALLS, MAX_BALLS)]
    InvalidSize(u32),

    /// Step bound exhausted without the queue returning to canonical
    /// order. Distinct from success so callers can tell "answer
    /// computed" from "bound exceeded".
    #[error("no cycle found for {balls} balls within {max_steps} minutes")]
    NoCycleFound { balls: u32, max_steps: usize },

    /// Conservation invariant broke mid-tick: an engine bug, not bad input
    #[error("clock invariant violated: {0}")]
    Invariant(String),
}

impl From<ClockError> for SimulationError {
    fn from(err: ClockError) -> Self {
        match err {
            ClockError::InvalidSize(count) => SimulationError::InvalidSize(count),
            ClockError::Invariant(tray_err) => SimulationError::Invariant(tray_err.to_string()),
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Upper bound on simulated minutes before giving up
    pub max_steps: usize,

    /// Record per-tick events for diagnostics. Off by default: a full
    /// cycle logs several events per minute across hundreds of
    /// thousands of minutes.
    pub record_events: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            record_events: false,
        }
    }
}

/// Result of a completed run: the clock's periodicity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    /// Ball count simulated
    pub balls: u32,

    /// Elapsed minutes until the seeded ordering recurred
    pub minutes: usize,

    /// Whole days elapsed (minutes / 1440); cycles for valid counts
    /// land exactly on day boundaries
    pub days: usize,
}

/// Simulation driver owning one clock, its time, and its diagnostics
///
/// Each driver is fully independent: runs for different ball counts
/// share no state and may execute in parallel.
#[derive(Debug)]
pub struct Simulation {
    clock: Clock,
    time: ClockTime,
    events: EventLog,
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation with the default configuration
    pub fn new(balls: u32) -> Result<Self, SimulationError> {
        Self::with_config(balls, SimulationConfig::default())
    }

    /// Create a simulation with an explicit configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Simulation)` - clock built and seeded, time at zero
    /// * `Err(SimulationError::InvalidSize)` - count outside `27..=127`
    pub fn with_config(balls: u32, config: SimulationConfig) -> Result<Self, SimulationError> {
        Ok(Self {
            clock: Clock::new(balls)?,
            time: ClockTime::new(),
            events: EventLog::new(),
            config,
        })
    }

    /// Run until the seeded ordering recurs
    ///
    /// Ticks the clock one minute at a time, checking the canonical-order
    /// oracle after every tick (including the first). Deterministic:
    /// repeated runs for the same ball count report identical minutes.
    ///
    /// # Returns
    ///
    /// * `Ok(CycleReport)` - cycle found within the step bound
    /// * `Err(SimulationError::NoCycleFound)` - bound exhausted
    /// * `Err(SimulationError::Invariant)` - engine bug; fatal
    pub fn run(&mut self) -> Result<CycleReport, SimulationError> {
        while self.time.elapsed_minutes() < self.config.max_steps {
            let result = self.clock.tick()?;
            self.time.advance_minute();
            let minute = self.time.elapsed_minutes();

            if self.config.record_events {
                self.events.log(Event::Elevated {
                    minute,
                    ball: result.elevated,
                });
                for overflow in &result.overflows {
                    self.events.log(Event::Tilted {
                        minute,
                        tray: overflow.tray,
                        returned: overflow.returned.clone(),
                    });
                }
                match result.rested_on {
                    Some(tray) => self.events.log(Event::Rested {
                        minute,
                        tray,
                        ball: result.elevated,
                    }),
                    None => self.events.log(Event::Recycled {
                        minute,
                        ball: result.elevated,
                    }),
                }
            }

            if self.clock.is_initial_order() {
                if self.config.record_events {
                    self.events.log(Event::CycleFound { minute });
                }
                return Ok(CycleReport {
                    balls: self.clock.ball_count(),
                    minutes: minute,
                    days: minute / MINUTES_PER_DAY,
                });
            }
        }
        Err(SimulationError::NoCycleFound {
            balls: self.clock.ball_count(),
            max_steps: self.config.max_steps,
        })
    }

    /// The clock being simulated
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Minutes simulated so far
    pub fn elapsed_minutes(&self) -> usize {
        self.time.elapsed_minutes()
    }

    /// Recorded diagnostic events (empty unless `record_events` is set)
    pub fn events(&self) -> &EventLog {
        &self.events
    }
}

/// Run one clock to completion with the default configuration
///
/// # Example
/// ```
/// use ball_clock_core_rs::run_clock;
///
/// assert_eq!(run_clock(30).unwrap().days, 15);
/// ```
pub fn run_clock(balls: u32) -> Result<CycleReport, SimulationError> {
    let mut sim = Simulation::new(balls)?;
    sim.run()
}

//! Ball Clock Core - Rust Engine
//!
//! Deterministic simulator for the classic mechanical "ball clock": every
//! minute an arm lifts the least-recently-used ball from the bottom queue
//! and drops it onto a track of indicator trays (minute, five-minute,
//! hour). A full tray tilts, returning its balls to the queue in reverse
//! order of arrival. The engine computes how many days elapse before the
//! queue returns to its seeded ordering.
//!
//! # Architecture
//!
//! - **core**: Time accounting (minutes and days)
//! - **models**: Domain types (Ball, Tray, BallQueue, events)
//! - **clock**: The tick engine (transfer, overflow, drain cascade)
//! - **sim**: Simulation driver (run loop, cycle detection, reporting)
//!
//! # Critical Invariants
//!
//! 1. Balls are conserved: the multiset across queue + trays is always `{1..n}`
//! 2. No tray ever holds more balls than its capacity
//! 3. Execution is fully deterministic; same ball count, same answer

// Module declarations
pub mod clock;
pub mod core;
pub mod models;
pub mod sim;

// Re-exports for convenience
pub use crate::core::time::{ClockTime, MINUTES_PER_DAY};
pub use clock::{Clock, ClockError, TickResult, TrayOverflow, MAX_BALLS, MIN_BALLS};
pub use models::{
    ball::Ball,
    event::{Event, EventLog},
    queue::BallQueue,
    tray::{Tray, TrayError, TrayKind},
};
pub use sim::{
    run_clock, CycleReport, Simulation, SimulationConfig, SimulationError, DEFAULT_MAX_STEPS,
};

//! Simulation driver - runs a clock until its ball ordering repeats
//!
//! See `engine.rs` for the run loop.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    run_clock, CycleReport, Simulation, SimulationConfig, SimulationError, DEFAULT_MAX_STEPS,
};

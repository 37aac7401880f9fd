//! Core utilities: simulation time accounting.

pub mod time;

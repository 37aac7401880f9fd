//! Event logging for simulation diagnostics
//!
//! This module defines the Event enum which captures the mechanical
//! actions of the clock, minute by minute. Events enable:
//! - Debugging (understand where every ball went and when)
//! - Auditing (verify drain order and cascade behavior)
//! - Analysis (tilt frequency, ball trajectories)
//!
//! The log is an owned collaborator on the simulation driver, switched
//! on per run; there is no process-wide debug flag. Recording is off by
//! default because a full cycle produces hundreds of thousands of events.

use crate::models::ball::Ball;
use crate::models::tray::TrayKind;

/// A mechanical action of the clock, stamped with the minute it occurred.
///
/// Events are logged in the order they occur within a tick: the elevation
/// first, then any tilts in cascade order, then where the ball came to rest.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The arm lifted a ball off the front of the bottom queue
    Elevated { minute: usize, ball: Ball },

    /// A ball came to rest on an indicator tray
    Rested {
        minute: usize,
        tray: TrayKind,
        ball: Ball,
    },

    /// A full tray tilted; `returned` lists its balls in the order they
    /// rejoined the queue (reverse of arrival)
    Tilted {
        minute: usize,
        tray: TrayKind,
        returned: Vec<Ball>,
    },

    /// The carried ball fell past the hour tray and rejoined the queue
    Recycled { minute: usize, ball: Ball },

    /// The bottom queue matched its seeded order; the cycle is complete
    CycleFound { minute: usize },
}

impl Event {
    /// Minute this event occurred at (1-based)
    pub fn minute(&self) -> usize {
        match self {
            Event::Elevated { minute, .. }
            | Event::Rested { minute, .. }
            | Event::Tilted { minute, .. }
            | Event::Recycled { minute, .. }
            | Event::CycleFound { minute } => *minute,
        }
    }

    /// Short type tag for filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Elevated { .. } => "elevated",
            Event::Rested { .. } => "rested",
            Event::Tilted { .. } => "tilted",
            Event::Recycled { .. } => "recycled",
            Event::CycleFound { .. } => "cycle_found",
        }
    }
}

/// In-memory log of simulation events
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in logging order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events for a specific minute
    pub fn events_at_minute(&self, minute: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.minute() == minute).collect()
    }

    /// Events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

//! Domain models: balls, trays, the bottom queue, and diagnostic events.

pub mod ball;
pub mod event;
pub mod queue;
pub mod tray;

pub use ball::Ball;
pub use event::{Event, EventLog};
pub use queue::BallQueue;
pub use tray::{Tray, TrayError, TrayKind};

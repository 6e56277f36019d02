//! Decision matrix, position sizing and the stop ladder.

pub mod engine;
pub mod sizing;
pub mod stops;

pub use engine::{decide, Action, Decision};
pub use sizing::{size_position, PositionAllocation};
pub use stops::{compute_stops, StopPlan};

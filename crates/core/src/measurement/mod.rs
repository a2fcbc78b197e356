//! Angular triangulation measurement
//!
//! # Contents
//!
//! - `MeasuringState` and its prompt / button selectors
//! - `estimate_distance` and `DistanceReading` (law of sines, validity)
//! - `MeasurementSession`, the three-stage anchor-marking state machine
//! - `Frame`, the outbound per-tick snapshot

mod estimator;
mod frame;
mod session;
mod state;

pub use estimator::{estimate_distance, DistanceReading, ReadingDisplay};
pub use frame::Frame;
pub use session::MeasurementSession;
pub use state::{ButtonLabel, MeasuringState, Prompt};

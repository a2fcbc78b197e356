//! Host-side driver for the sightline triangulation engine.
//!
//! Replays recorded or synthetic orientation data through a
//! [`MeasurementDriver`] and renders the frames a phone UI would show.

pub mod driver;
pub mod error;
pub mod feed;
pub mod scenario;
pub mod state;

pub use driver::{pacing_period, LocalDriver, MeasurementDriver, SharedDriver};
pub use error::SimError;
pub use feed::{ScriptedFeed, SightingGeometry, SyntheticConfig, SyntheticSighting};
pub use scenario::{Scenario, ScenarioStep};
pub use state::LockedState;

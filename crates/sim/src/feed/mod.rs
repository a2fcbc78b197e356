//! Orientation feeds for host-side runs.

pub mod scripted;
pub mod synthetic;

pub use scripted::ScriptedFeed;
pub use synthetic::{SightingGeometry, SyntheticConfig, SyntheticSighting};

//! Per-tick UI snapshot

use super::estimator::DistanceReading;
use super::state::{ButtonLabel, MeasuringState, Prompt};

/// Everything the presentation layer needs to render one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub state: MeasuringState,
    pub prompt: Prompt,
    pub button: ButtonLabel,
    /// Distance reading, only in `CloseAnchorMarked`
    pub reading: Option<DistanceReading>,
    /// Last tick was in portrait; the UI should ask the user to rotate
    pub rotate_device: bool,
}

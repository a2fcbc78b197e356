//! Pull-based orientation source

use super::OrientationSample;

/// Provides the latest known orientation sample.
///
/// Implementations own acquisition and cadence; the engine only reads.
pub trait OrientationSource {
    /// Most recent sample, or `None` if the sensor has not reported yet.
    fn latest_sample(&self) -> Option<OrientationSample>;
}

/// Fixed-sample source for host testing.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockSource {
    sample: Option<OrientationSample>,
}

impl MockSource {
    pub fn new() -> Self {
        Self { sample: None }
    }

    /// Replace the sample returned by the next pull.
    pub fn set(&mut self, sample: OrientationSample) {
        self.sample = Some(sample);
    }

    pub fn clear(&mut self) {
        self.sample = None;
    }
}

impl OrientationSource for MockSource {
    fn latest_sample(&self) -> Option<OrientationSample> {
        self.sample
    }
}

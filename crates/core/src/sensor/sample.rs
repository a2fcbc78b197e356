//! Orientation sample types

/// Coarse screen orientation reported alongside each sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenMode {
    Portrait,
    Landscape,
}

impl ScreenMode {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenMode::Portrait => "portrait",
            ScreenMode::Landscape => "landscape",
        }
    }
}

/// One reading from the device orientation sensor.
///
/// Fields are optional because browsers and sensor stacks routinely deliver
/// partial events before the compass settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationSample {
    /// Compass heading in degrees (0-360, 0 = North)
    pub heading: Option<f32>,
    /// Tilt around the long axis; positive means the device is inverted
    pub tilt: Option<f32>,
    /// Screen orientation at the time of the reading
    pub mode: ScreenMode,
}

impl OrientationSample {
    pub fn new(heading: Option<f32>, tilt: Option<f32>, mode: ScreenMode) -> Self {
        Self {
            heading,
            tilt,
            mode,
        }
    }

    /// Complete landscape sample, the only kind the engine acts on.
    pub fn landscape(heading: f32, tilt: f32) -> Self {
        Self::new(Some(heading), Some(tilt), ScreenMode::Landscape)
    }
}

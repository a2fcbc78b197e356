//! Device heading normalization
//!
//! A phone held in landscape reports a compass heading that flips by 180°
//! when the device is turned upside down. The tilt sign tells the two apart.

use super::angle::wrap_360;
use crate::sensor::{OrientationSample, ScreenMode};

/// Normalize a raw orientation sample into a comparable heading.
///
/// Returns `None` (no update this tick) when the heading or tilt is missing
/// or the screen is not in landscape. A positive tilt means the device is
/// inverted, so the heading is rotated by 180°.
pub fn normalize_heading(sample: &OrientationSample) -> Option<f32> {
    if sample.mode != ScreenMode::Landscape {
        return None;
    }
    let heading = sample.heading?;
    let tilt = sample.tilt?;

    if tilt > 0.0 {
        Some(wrap_360(180.0 + heading))
    } else {
        Some(wrap_360(heading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape(heading: f32, tilt: f32) -> OrientationSample {
        OrientationSample::new(Some(heading), Some(tilt), ScreenMode::Landscape)
    }

    #[test]
    fn test_upright_heading_unchanged() {
        for h in [0.0, 12.5, 180.0, 359.0] {
            let n = normalize_heading(&landscape(h, -30.0)).unwrap();
            assert!((n - h).abs() < 0.001, "expected {}, got {}", h, n);
        }
    }

    #[test]
    fn test_zero_tilt_is_upright() {
        let n = normalize_heading(&landscape(42.0, 0.0)).unwrap();
        assert!((n - 42.0).abs() < 0.001);
    }

    #[test]
    fn test_inverted_heading_rotated() {
        let n = normalize_heading(&landscape(10.0, 45.0)).unwrap();
        assert!((n - 190.0).abs() < 0.001);

        let n = normalize_heading(&landscape(270.0, 0.5)).unwrap();
        assert!((n - 90.0).abs() < 0.001, "expected wrap to 90, got {}", n);
    }

    #[test]
    fn test_portrait_yields_no_update() {
        let sample = OrientationSample::new(Some(10.0), Some(-5.0), ScreenMode::Portrait);
        assert_eq!(normalize_heading(&sample), None);
    }

    #[test]
    fn test_missing_fields_yield_no_update() {
        let no_heading = OrientationSample::new(None, Some(-5.0), ScreenMode::Landscape);
        let no_tilt = OrientationSample::new(Some(10.0), None, ScreenMode::Landscape);
        assert_eq!(normalize_heading(&no_heading), None);
        assert_eq!(normalize_heading(&no_tilt), None);
    }
}

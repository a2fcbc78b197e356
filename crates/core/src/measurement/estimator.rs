//! Law-of-sines distance estimation
//!
//! With the far anchor sighted from the close reference point, and the close
//! anchor sighted back from the standing point, the live heading at the
//! standing point closes the triangle:
//!
//! ```text
//! distance = known_distance * sin(angle_a) / sin(angle_c)
//! ```
//!
//! `angle_a` is the angle at the standing point between the close anchor and
//! the live heading, `angle_c` the angle at the object between the far anchor
//! and the live heading.

use core::fmt;

use crate::geometry::{deg_to_rad, round_to_decimals};

/// Smallest `sin(angle_c)` treated as a real triangle.
const MIN_SIN_C: f64 = 1e-9;

/// Estimate the distance to the sighted object.
///
/// Returns `None` when either angle is unknown or zero, when the known
/// distance is zero or not finite, or when `sin(angle_c)` is zero (far
/// anchor parallel or opposite to the live heading).
/// The result is unrounded.
pub fn estimate_distance(
    angle_a: Option<f32>,
    angle_c: Option<f32>,
    known_distance: f32,
) -> Option<f64> {
    let angle_a = angle_a?;
    let angle_c = angle_c?;
    if angle_a == 0.0 || angle_c == 0.0 || angle_c >= 180.0 {
        return None;
    }
    if known_distance == 0.0 || !known_distance.is_finite() {
        return None;
    }

    // sin(180°) evaluates to ~1.2e-16, not zero
    let sin_c = libm::sin(deg_to_rad(angle_c as f64));
    if sin_c <= MIN_SIN_C {
        return None;
    }
    let sin_a = libm::sin(deg_to_rad(angle_a as f64));

    let distance = known_distance as f64 * sin_a / sin_c;
    if distance.is_finite() {
        Some(distance)
    } else {
        None
    }
}

/// Distance as presented to the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistanceReading {
    /// Non-negative estimate, unrounded
    Distance(f64),
    /// No usable estimate for the current geometry
    Invalid,
}

impl DistanceReading {
    /// Classify a raw estimate. Missing or negative results are invalid; an
    /// exact zero is kept as a valid reading.
    pub fn classify(estimate: Option<f64>) -> Self {
        match estimate {
            Some(d) if d >= 0.0 => DistanceReading::Distance(d),
            _ => DistanceReading::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DistanceReading::Distance(_))
    }

    /// Estimate rounded for display.
    pub fn rounded(&self, decimals: u8) -> Option<f64> {
        match self {
            DistanceReading::Distance(d) => Some(round_to_decimals(*d, decimals)),
            DistanceReading::Invalid => None,
        }
    }

    /// Formatter producing `"5.8 m"` or `"Invalid distance"`.
    pub fn display(&self, decimals: u8, unit: &'static str) -> ReadingDisplay {
        ReadingDisplay {
            reading: *self,
            decimals,
            unit,
        }
    }
}

/// [`fmt::Display`] adapter for a [`DistanceReading`].
#[derive(Clone, Copy, Debug)]
pub struct ReadingDisplay {
    reading: DistanceReading,
    decimals: u8,
    unit: &'static str,
}

impl fmt::Display for ReadingDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reading.rounded(self.decimals) {
            Some(value) => write!(
                f,
                "{:.*} {}",
                self.decimals as usize, value, self.unit
            ),
            None => write!(f, "Invalid distance"),
        }
    }
}

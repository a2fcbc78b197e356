//! Circular angle arithmetic
//!
//! All bearings are compass degrees, clockwise from north.

/// Wrap an angle into [0, 360).
pub fn wrap_360(deg: f32) -> f32 {
    let wrapped = deg % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // -1e-6 + 360.0 rounds up to 360.0 in f32
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unsigned minimum rotation between two bearings.
///
/// Returns a value in [0, 180]: the smaller of the two arcs joining `a` and
/// `b` around the circle. Symmetric in its arguments.
pub fn angle_diff(a: f32, b: f32) -> f32 {
    let d = libm::fabsf(a - b) % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Angle between a marked anchor and the live heading.
///
/// `None` when the anchor has not been marked or no live heading is known.
pub fn anchor_angle(anchor: Option<f32>, live: Option<f32>) -> Option<f32> {
    Some(angle_diff(anchor?, live?))
}

/// Degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (core::f64::consts::PI / 180.0)
}

/// Round half away from zero to `places` decimal digits.
pub fn round_to_decimals(value: f64, places: u8) -> f64 {
    let scale = libm::pow(10.0, places as f64);
    libm::round(value * scale) / scale
}

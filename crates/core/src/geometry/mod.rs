//! Bearing geometry
//!
//! Pure angle helpers and the device-heading normalizer used by the
//! measurement session.

mod angle;
mod heading;

pub use angle::{anchor_angle, angle_diff, deg_to_rad, round_to_decimals, wrap_360};
pub use heading::normalize_heading;

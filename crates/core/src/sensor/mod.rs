//! Orientation sensor contract
//!
//! The engine never acquires samples itself. A platform feed implements
//! [`OrientationSource`] and the driving loop pulls the latest sample once per
//! tick.

mod sample;
mod source;

pub use sample::{OrientationSample, ScreenMode};
pub use source::{MockSource, OrientationSource};

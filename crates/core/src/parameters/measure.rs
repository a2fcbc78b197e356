//! Measurement Parameter Definitions
//!
//! # Parameters
//!
//! - `MEAS_KNOWN_DIST` - Known distance between the close reference point and
//!   the standing point
//! - `MEAS_DECIMALS` - Decimal places shown for the distance
//! - `MEAS_UNIT_FT` - Label the distance in feet instead of meters (no
//!   conversion; the estimate is in the units of the known distance)

use super::error::ParameterError;
use super::storage::{ParamValue, ParameterStore};

/// Default known distance
const DEFAULT_KNOWN_DIST: f32 = 10.0;

/// Minimum known distance
const MIN_KNOWN_DIST: f32 = 0.1;

/// Maximum known distance
const MAX_KNOWN_DIST: f32 = 10_000.0;

/// Default display decimals
const DEFAULT_DECIMALS: i32 = 1;

/// Maximum display decimals
const MAX_DECIMALS: i32 = 4;

/// Measurement parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureParams {
    pub known_distance: f32,
    pub decimals: u8,
    pub unit_feet: bool,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            known_distance: DEFAULT_KNOWN_DIST,
            decimals: DEFAULT_DECIMALS as u8,
            unit_feet: false,
        }
    }
}

impl MeasureParams {
    /// Register measurement parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("MEAS_KNOWN_DIST", ParamValue::Float(DEFAULT_KNOWN_DIST))?;
        store.register("MEAS_DECIMALS", ParamValue::Int(DEFAULT_DECIMALS))?;
        store.register("MEAS_UNIT_FT", ParamValue::Bool(false))?;
        Ok(())
    }

    /// Load measurement parameters from parameter store
    ///
    /// Missing parameters fall back to defaults; out-of-range values are
    /// clamped.
    pub fn from_store(store: &ParameterStore) -> Self {
        let known_distance = match store.get("MEAS_KNOWN_DIST") {
            Some(ParamValue::Float(v)) if v.is_finite() => v.clamp(MIN_KNOWN_DIST, MAX_KNOWN_DIST),
            Some(ParamValue::Int(v)) => (*v as f32).clamp(MIN_KNOWN_DIST, MAX_KNOWN_DIST),
            _ => DEFAULT_KNOWN_DIST,
        };

        let decimals = match store.get("MEAS_DECIMALS") {
            Some(ParamValue::Int(v)) => (*v).clamp(0, MAX_DECIMALS) as u8,
            _ => DEFAULT_DECIMALS as u8,
        };

        let unit_feet = matches!(store.get("MEAS_UNIT_FT"), Some(ParamValue::Bool(true)));

        Self {
            known_distance,
            decimals,
            unit_feet,
        }
    }

    /// Unit label for the distance display
    pub fn unit(&self) -> &'static str {
        if self.unit_feet {
            "ft"
        } else {
            "m"
        }
    }

    pub fn is_valid(&self) -> bool {
        (MIN_KNOWN_DIST..=MAX_KNOWN_DIST).contains(&self.known_distance)
            && (self.decimals as i32) <= MAX_DECIMALS
    }
}

//! Parameter management types
//!
//! Session configuration lives in a [`ParameterStore`]; typed blocks such as
//! [`MeasureParams`] register their defaults and read themselves back out.

pub mod error;
pub mod measure;
pub mod storage;

pub use error::ParameterError;
pub use measure::MeasureParams;
pub use storage::{ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};

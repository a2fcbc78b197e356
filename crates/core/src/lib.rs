//! sightline_core - Angular triangulation engine
//!
//! Estimates the distance to a remote object from a device orientation
//! sensor and one known distance, using the law of sines. The crate holds the
//! platform-agnostic algorithms and types and can be tested on host without
//! any feature flags.
//!
//! # Design Principles
//!
//! - **Pure no_std**: No std library dependencies
//! - **Data states, not errors**: missing sensor data, unset anchors and
//!   degenerate geometry surface as `None` / `Invalid`, never as failures
//! - **Trait abstractions**: Sensor feeds and state synchronization injected
//!   via traits
//!
//! # Modules
//!
//! - [`sensor`]: Orientation sample types and the pull-based source trait
//! - [`geometry`]: Circular angle math and heading normalization
//! - [`measurement`]: Anchor-marking session, distance estimator, UI frame
//! - [`parameters`]: Parameter store and measurement parameters
//! - [`traits`]: Synchronized state access
//!
//! # Example
//!
//! ```
//! use sightline_core::measurement::{DistanceReading, MeasurementSession};
//! use sightline_core::sensor::OrientationSample;
//!
//! let mut session = MeasurementSession::new(10.0);
//! session.observe(&OrientationSample::landscape(0.0, -5.0));
//! session.advance(); // far anchor
//! session.observe(&OrientationSample::landscape(90.0, -5.0));
//! session.advance(); // close anchor
//! session.observe(&OrientationSample::landscape(60.0, -5.0));
//!
//! let reading = session.reading().unwrap();
//! assert_eq!(reading.rounded(1), Some(5.8));
//! assert!(matches!(reading, DistanceReading::Distance(_)));
//! ```

#![no_std]

mod logging;

pub mod geometry;
pub mod measurement;
pub mod parameters;
pub mod sensor;
pub mod traits;

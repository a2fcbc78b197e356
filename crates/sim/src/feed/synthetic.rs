//! Synthetic sighting generator.
//!
//! Places the close reference point at the origin, the object and the
//! standing point at given bearings and ranges from it, and produces the
//! three sightings a user would make, with optional heading noise and an
//! upside-down device.
//!
//! Coordinates are local east/north in the units of the known distance.

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sightline_core::geometry::wrap_360;
use sightline_core::sensor::OrientationSample;

use crate::scenario::{Scenario, ScenarioStep};

/// Tilt reported while the device is held normally.
const UPRIGHT_TILT: f32 = -25.0;

/// Tilt reported while the device is upside down.
const INVERTED_TILT: f32 = 25.0;

/// Ground-truth triangle.
#[derive(Debug, Clone, Copy)]
pub struct SightingGeometry {
    /// Distance from the close reference point to the standing point
    pub known_distance: f32,
    /// True distance from the close reference point to the object
    pub object_distance: f32,
    /// Bearing from the close reference point to the object (degrees)
    pub object_bearing: f32,
    /// Bearing from the close reference point to the standing point (degrees)
    pub standing_bearing: f32,
}

impl SightingGeometry {
    /// Standing point off to the right of the line of sight.
    pub fn perpendicular(known_distance: f32, object_distance: f32) -> Self {
        Self {
            known_distance,
            object_distance,
            object_bearing: 0.0,
            standing_bearing: 90.0,
        }
    }

    fn object(&self) -> (f32, f32) {
        polar(self.object_distance, self.object_bearing)
    }

    fn standing_point(&self) -> (f32, f32) {
        polar(self.known_distance, self.standing_bearing)
    }
}

/// Noise and handling options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticConfig {
    /// Heading noise standard deviation in degrees
    pub heading_noise_deg: f32,
    /// RNG seed for deterministic mode. None = random.
    pub seed: Option<u64>,
    /// Hold the device upside down for every sighting
    pub inverted: bool,
}

/// Generates sighting scenarios for a [`SightingGeometry`].
pub struct SyntheticSighting {
    geometry: SightingGeometry,
    config: SyntheticConfig,
    rng: StdRng,
}

impl SyntheticSighting {
    pub fn new(geometry: SightingGeometry, config: SyntheticConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            geometry,
            config,
            rng,
        }
    }

    pub fn geometry(&self) -> &SightingGeometry {
        &self.geometry
    }

    /// Exact bearings of the three sightings: far anchor, close anchor, object.
    pub fn true_bearings(&self) -> [f32; 3] {
        let origin = (0.0, 0.0);
        let object = self.geometry.object();
        let standing = self.geometry.standing_point();
        [
            bearing(origin, object),
            bearing(standing, origin),
            bearing(standing, object),
        ]
    }

    /// One full measurement: sight far anchor, mark, sight close anchor,
    /// mark, sight the object from the standing point.
    pub fn scenario(&mut self) -> Scenario {
        let [far, close, live] = self.true_bearings();
        let steps = vec![
            ScenarioStep::Tick(self.sample(far)),
            ScenarioStep::Mark,
            ScenarioStep::Tick(self.sample(close)),
            ScenarioStep::Mark,
            ScenarioStep::Tick(self.sample(live)),
        ];
        Scenario::new(Some(self.geometry.known_distance), steps)
    }

    /// Raw sample for a true bearing, as the sensor would report it.
    fn sample(&mut self, true_bearing: f32) -> OrientationSample {
        let observed = true_bearing + self.gaussian_noise(self.config.heading_noise_deg);
        if self.config.inverted {
            OrientationSample::landscape(wrap_360(observed - 180.0), INVERTED_TILT)
        } else {
            OrientationSample::landscape(wrap_360(observed), UPRIGHT_TILT)
        }
    }

    /// Generate Gaussian noise using Box-Muller transform.
    fn gaussian_noise(&mut self, stddev: f32) -> f32 {
        if stddev == 0.0 {
            return 0.0;
        }
        let u1: f32 = self.rng.gen::<f32>().max(f32::EPSILON);
        let u2: f32 = self.rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        z * stddev
    }
}

fn polar(range: f32, bearing_deg: f32) -> (f32, f32) {
    let rad = bearing_deg.to_radians();
    (range * rad.sin(), range * rad.cos())
}

/// Compass bearing from `from` to `to` (east, north).
fn bearing(from: (f32, f32), to: (f32, f32)) -> f32 {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    wrap_360(dx.atan2(dy).to_degrees())
}

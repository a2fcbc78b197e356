//! Measurement scenarios
//!
//! A scenario is a recorded sequence of sensor ticks and button presses,
//! stored as JSON:
//!
//! ```json
//! {
//!   "known_distance": 10.0,
//!   "steps": [
//!     { "tick": { "heading": 0.0, "tilt": -20.0, "mode": "landscape" } },
//!     "mark",
//!     { "tick": { "heading": 90.0, "tilt": -20.0 } },
//!     "mark",
//!     { "tick": { "heading": 60.0, "tilt": -20.0 } }
//!   ]
//! }
//! ```
//!
//! `heading` and `tilt` may be omitted or `null`; `mode` defaults to
//! landscape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sightline_core::sensor::{OrientationSample, ScreenMode};

use crate::error::SimError;

/// One scripted event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioStep {
    /// Sensor delivers a sample
    Tick(OrientationSample),
    /// User presses the action button
    Mark,
    /// Measurement view is torn down and re-entered
    Reset,
}

/// Scripted measurement run.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Used when no `--known-distance` is given on the command line
    pub known_distance: Option<f32>,
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ScreenModeJson {
    Portrait,
    Landscape,
}

fn default_mode() -> ScreenModeJson {
    ScreenModeJson::Landscape
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SampleJson {
    #[serde(default)]
    heading: Option<f32>,
    #[serde(default)]
    tilt: Option<f32>,
    #[serde(default = "default_mode")]
    mode: ScreenModeJson,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StepJson {
    Tick(SampleJson),
    Mark,
    Reset,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScenarioJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    known_distance: Option<f32>,
    steps: Vec<StepJson>,
}

impl From<SampleJson> for OrientationSample {
    fn from(json: SampleJson) -> Self {
        let mode = match json.mode {
            ScreenModeJson::Portrait => ScreenMode::Portrait,
            ScreenModeJson::Landscape => ScreenMode::Landscape,
        };
        OrientationSample::new(json.heading, json.tilt, mode)
    }
}

impl From<&OrientationSample> for SampleJson {
    fn from(sample: &OrientationSample) -> Self {
        let mode = match sample.mode {
            ScreenMode::Portrait => ScreenModeJson::Portrait,
            ScreenMode::Landscape => ScreenModeJson::Landscape,
        };
        SampleJson {
            heading: sample.heading,
            tilt: sample.tilt,
            mode,
        }
    }
}

impl Scenario {
    pub fn new(known_distance: Option<f32>, steps: Vec<ScenarioStep>) -> Self {
        Self {
            known_distance,
            steps,
        }
    }

    /// Parse a scenario from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let parsed: ScenarioJson = serde_json::from_str(json)
            .map_err(|e| SimError::ScenarioParse(format!("JSON parse error: {e}")))?;

        if parsed.steps.is_empty() {
            return Err(SimError::EmptyScenario);
        }
        if let Some(d) = parsed.known_distance {
            if !d.is_finite() || d <= 0.0 {
                return Err(SimError::ScenarioParse(format!(
                    "known_distance must be positive, got {d}"
                )));
            }
        }

        let steps = parsed
            .steps
            .into_iter()
            .map(|step| match step {
                StepJson::Tick(sample) => ScenarioStep::Tick(sample.into()),
                StepJson::Mark => ScenarioStep::Mark,
                StepJson::Reset => ScenarioStep::Reset,
            })
            .collect();

        Ok(Self {
            known_distance: parsed.known_distance,
            steps,
        })
    }

    /// Read and parse a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize the scenario back to pretty-printed JSON.
    pub fn to_json(&self) -> String {
        let json = ScenarioJson {
            known_distance: self.known_distance,
            steps: self
                .steps
                .iter()
                .map(|step| match step {
                    ScenarioStep::Tick(sample) => StepJson::Tick(sample.into()),
                    ScenarioStep::Mark => StepJson::Mark,
                    ScenarioStep::Reset => StepJson::Reset,
                })
                .collect(),
        };
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Number of mark presses in the scenario.
    pub fn mark_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, ScenarioStep::Mark))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_scenario() {
        let json = r#"{
            "known_distance": 12.5,
            "steps": [
                { "tick": { "heading": 10.0, "tilt": -3.0, "mode": "landscape" } },
                "mark",
                { "tick": { "heading": 20.0, "tilt": 4.0 } },
                { "tick": { "mode": "portrait" } },
                "reset"
            ]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.known_distance, Some(12.5));
        assert_eq!(scenario.steps.len(), 5);
        assert_eq!(
            scenario.steps[0],
            ScenarioStep::Tick(OrientationSample::landscape(10.0, -3.0))
        );
        assert_eq!(scenario.steps[1], ScenarioStep::Mark);
        assert_eq!(
            scenario.steps[3],
            ScenarioStep::Tick(OrientationSample::new(None, None, ScreenMode::Portrait))
        );
        assert_eq!(scenario.steps[4], ScenarioStep::Reset);
        assert_eq!(scenario.mark_count(), 1);
    }

    #[test]
    fn null_fields_are_absent() {
        let json = r#"{ "steps": [ { "tick": { "heading": null, "tilt": 1.0 } } ] }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.known_distance, None);
        match scenario.steps[0] {
            ScenarioStep::Tick(sample) => {
                assert_eq!(sample.heading, None);
                assert_eq!(sample.tilt, Some(1.0));
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn empty_scenario_rejected() {
        let err = Scenario::from_json(r#"{ "steps": [] }"#).unwrap_err();
        assert!(matches!(err, SimError::EmptyScenario));
    }

    #[test]
    fn bad_known_distance_rejected() {
        let err = Scenario::from_json(r#"{ "known_distance": -2.0, "steps": ["mark"] }"#)
            .unwrap_err();
        assert!(matches!(err, SimError::ScenarioParse(_)));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Scenario::from_json(r#"{ "steps": [ "jump" ] }"#).unwrap_err();
        assert!(matches!(err, SimError::ScenarioParse(_)));
    }

    #[test]
    fn to_json_parses_back() {
        let scenario = Scenario::new(
            Some(8.0),
            vec![
                ScenarioStep::Tick(OrientationSample::landscape(5.0, -1.0)),
                ScenarioStep::Mark,
            ],
        );
        assert_eq!(Scenario::from_json(&scenario.to_json()).unwrap(), scenario);
    }
}

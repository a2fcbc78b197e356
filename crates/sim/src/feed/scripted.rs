//! Scenario playback feed.
//!
//! Steps are consumed one at a time; tick steps become the feed's latest
//! sample, marks and resets are handed back to the caller to act on.

use std::collections::VecDeque;

use sightline_core::sensor::{OrientationSample, OrientationSource};

use crate::scenario::{Scenario, ScenarioStep};

/// Replays a [`Scenario`] as an orientation source.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFeed {
    pending: VecDeque<ScenarioStep>,
    current: Option<OrientationSample>,
}

impl ScriptedFeed {
    pub fn new(scenario: &Scenario) -> Self {
        Self {
            pending: scenario.steps.iter().copied().collect(),
            current: None,
        }
    }

    /// Pop the next step. A tick step also becomes the latest sample.
    pub fn next_step(&mut self) -> Option<ScenarioStep> {
        let step = self.pending.pop_front()?;
        if let ScenarioStep::Tick(sample) = step {
            self.current = Some(sample);
        }
        Some(step)
    }

    /// Steps not yet replayed.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

impl OrientationSource for ScriptedFeed {
    fn latest_sample(&self) -> Option<OrientationSample> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_updates_latest_sample_on_ticks_only() {
        let scenario = Scenario::new(
            None,
            vec![
                ScenarioStep::Tick(OrientationSample::landscape(10.0, -1.0)),
                ScenarioStep::Mark,
                ScenarioStep::Tick(OrientationSample::landscape(20.0, -1.0)),
            ],
        );
        let mut feed = ScriptedFeed::new(&scenario);
        assert_eq!(feed.latest_sample(), None);
        assert_eq!(feed.remaining(), 3);

        feed.next_step();
        assert_eq!(feed.latest_sample().unwrap().heading, Some(10.0));

        assert_eq!(feed.next_step(), Some(ScenarioStep::Mark));
        assert_eq!(feed.latest_sample().unwrap().heading, Some(10.0));

        feed.next_step();
        assert_eq!(feed.latest_sample().unwrap().heading, Some(20.0));
        assert!(feed.is_finished());
        assert_eq!(feed.next_step(), None);
    }
}

//! Per-tick driving loop.
//!
//! The driver owns the orientation feed and a synchronized session. Each
//! tick pulls the latest sample, feeds it to the session and returns the
//! frame to render. The button press runs in the same critical section as a
//! fresh sample read, so the anchor is always taken from the newest heading.

use std::time::Duration;

use log::{debug, info};
use sightline_core::measurement::{Frame, MeasurementSession, MeasuringState};
use sightline_core::parameters::MeasureParams;
use sightline_core::sensor::OrientationSource;
use sightline_core::traits::{MockState, SharedState};

use crate::error::SimError;
use crate::feed::ScriptedFeed;
use crate::scenario::ScenarioStep;
use crate::state::LockedState;

/// Drives one measurement view.
pub struct MeasurementDriver<F, S> {
    feed: F,
    session: S,
    params: MeasureParams,
}

/// Driver for single-threaded hosts.
pub type LocalDriver<F> = MeasurementDriver<F, MockState<MeasurementSession>>;

/// Driver whose session may be shared across threads.
pub type SharedDriver<F> = MeasurementDriver<F, LockedState<MeasurementSession>>;

impl<F: OrientationSource> LocalDriver<F> {
    pub fn local(feed: F, params: MeasureParams) -> Self {
        let session = MockState::new(MeasurementSession::new(params.known_distance));
        MeasurementDriver::new(feed, session, params)
    }
}

impl<F: OrientationSource> SharedDriver<F> {
    pub fn shared(feed: F, params: MeasureParams) -> Self {
        let session = LockedState::new(MeasurementSession::new(params.known_distance));
        MeasurementDriver::new(feed, session, params)
    }
}

impl<F, S> MeasurementDriver<F, S>
where
    F: OrientationSource,
    S: SharedState<MeasurementSession>,
{
    pub fn new(feed: F, session: S, params: MeasureParams) -> Self {
        info!(
            "measurement view entered: known distance {} {}",
            params.known_distance,
            params.unit()
        );
        Self {
            feed,
            session,
            params,
        }
    }

    /// Process one sensor tick.
    pub fn tick(&self) -> Frame {
        let sample = self.feed.latest_sample();
        self.session.with_mut(|session| {
            if let Some(sample) = sample {
                session.observe(&sample);
            }
            session.frame()
        })
    }

    /// Press the action button.
    pub fn press(&self) -> MeasuringState {
        let sample = self.feed.latest_sample();
        let (state, far, close) = self.session.with_mut(|session| {
            if let Some(sample) = sample {
                session.observe(&sample);
            }
            let state = session.advance();
            (state, session.far_anchor(), session.close_anchor())
        });
        info!(
            "button pressed -> {} (far anchor {:?}, close anchor {:?})",
            state.as_str(),
            far,
            close
        );
        state
    }

    /// Tear the view down: anchors are discarded and the session restarts.
    pub fn teardown(&self) {
        self.session.with_mut(|session| session.reset());
        info!("measurement view reset");
    }

    /// Frame for the current session without consuming a sample.
    pub fn frame(&self) -> Frame {
        self.session.with(|session| session.frame())
    }

    /// Render a frame as a single status line.
    pub fn render(&self, frame: &Frame) -> String {
        let body = if frame.rotate_device {
            "Rotate your device to landscape".to_string()
        } else {
            match (frame.prompt.instruction(), frame.reading) {
                (Some(text), _) => text.to_string(),
                (None, Some(reading)) => reading
                    .display(self.params.decimals, self.params.unit())
                    .to_string(),
                (None, None) => String::new(),
            }
        };
        format!(
            "{:<17} | {} | [{}]",
            frame.state.as_str(),
            body,
            frame.button.as_str()
        )
    }

    pub fn params(&self) -> &MeasureParams {
        &self.params
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut F {
        &mut self.feed
    }
}

impl<S> MeasurementDriver<ScriptedFeed, S>
where
    S: SharedState<MeasurementSession>,
{
    /// Replay the next scripted step and return the resulting frame.
    pub fn step(&mut self) -> Option<Frame> {
        let step = self.feed.next_step()?;
        let frame = match step {
            ScenarioStep::Tick(_) => self.tick(),
            ScenarioStep::Mark => {
                self.press();
                self.frame()
            }
            ScenarioStep::Reset => {
                self.teardown();
                self.frame()
            }
        };
        debug!("step {:?} -> {:?}", step, frame.state);
        Some(frame)
    }

    /// Replay every remaining step.
    pub fn run_to_end(&mut self) -> Vec<Frame> {
        let mut frames = Vec::with_capacity(self.feed.remaining());
        while let Some(frame) = self.step() {
            frames.push(frame);
        }
        frames
    }
}

/// Replay step period for a pace of `rate_hz` steps per second.
///
/// `0` means unpaced (`None`). The period never drops below 1 ms.
pub fn pacing_period(rate_hz: f32) -> Result<Option<Duration>, SimError> {
    if !rate_hz.is_finite() || rate_hz < 0.0 {
        return Err(SimError::InvalidArgument(format!(
            "rate-hz must be a non-negative number, got {rate_hz}"
        )));
    }
    if rate_hz == 0.0 {
        return Ok(None);
    }
    let period = Duration::try_from_secs_f32(1.0 / rate_hz).map_err(|_| {
        SimError::InvalidArgument(format!("rate-hz {rate_hz} is too slow to pace"))
    })?;
    Ok(Some(period.max(Duration::from_millis(1))))
}

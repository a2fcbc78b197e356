//! Measurement session
//!
//! One session per measurement view. The session owns both anchors and the
//! last good live heading; nothing is shared between sessions.
//!
//! # Lifecycle
//!
//! 1. `new()` - when the measurement view is entered
//! 2. `observe()` - on every sensor tick (never changes state or anchors)
//! 3. `advance()` - on every press of the single action button
//! 4. `reset()` / drop - when the view is torn down

use super::estimator::{estimate_distance, DistanceReading};
use super::frame::Frame;
use super::state::MeasuringState;
use crate::geometry::{anchor_angle, normalize_heading};
use crate::logging::{log_debug, log_trace, log_warn};
use crate::sensor::{OrientationSample, ScreenMode};

/// State of one measurement attempt.
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    state: MeasuringState,
    /// Calibration length between the close reference point and the standing point
    known_distance: f32,
    /// Last normalized heading; kept across ticks that carry no usable data
    live_heading: Option<f32>,
    far_anchor: Option<f32>,
    close_anchor: Option<f32>,
    /// Screen mode of the most recent tick
    last_mode: Option<ScreenMode>,
}

impl MeasurementSession {
    /// Start a session with the given known distance.
    ///
    /// The known distance is fixed for the lifetime of the session.
    pub fn new(known_distance: f32) -> Self {
        if !(known_distance.is_finite() && known_distance > 0.0) {
            log_warn!("session started with unusable known distance {}", known_distance);
        }
        Self {
            state: MeasuringState::Started,
            known_distance,
            live_heading: None,
            far_anchor: None,
            close_anchor: None,
            last_mode: None,
        }
    }

    /// Feed one sensor tick.
    ///
    /// Returns `true` if the live heading was updated. Ticks with missing
    /// fields or in portrait keep the previous heading.
    pub fn observe(&mut self, sample: &OrientationSample) -> bool {
        self.last_mode = Some(sample.mode);
        match normalize_heading(sample) {
            Some(heading) => {
                self.live_heading = Some(heading);
                true
            }
            None => false,
        }
    }

    /// Fire the mark / measure-again action.
    ///
    /// Snapshots the current live heading into the anchor for this stage, or
    /// clears both anchors from the terminal state. Marking before any
    /// heading has been observed stores an unset anchor; the state still
    /// advances. Returns the new state.
    pub fn advance(&mut self) -> MeasuringState {
        match self.state {
            MeasuringState::Started => {
                self.far_anchor = self.live_heading;
                self.log_mark("far", self.far_anchor);
            }
            MeasuringState::FarAnchorMarked => {
                self.close_anchor = self.live_heading;
                self.log_mark("close", self.close_anchor);
            }
            MeasuringState::CloseAnchorMarked => {
                self.far_anchor = None;
                self.close_anchor = None;
            }
        }
        self.state = self.state.next();
        log_debug!("measurement state -> {}", self.state.as_str());
        self.state
    }

    /// Discard both anchors and return to `Started`.
    ///
    /// The live heading is kept.
    pub fn reset(&mut self) {
        self.state = MeasuringState::Started;
        self.far_anchor = None;
        self.close_anchor = None;
    }

    pub fn state(&self) -> MeasuringState {
        self.state
    }

    pub fn known_distance(&self) -> f32 {
        self.known_distance
    }

    pub fn live_heading(&self) -> Option<f32> {
        self.live_heading
    }

    pub fn far_anchor(&self) -> Option<f32> {
        self.far_anchor
    }

    pub fn close_anchor(&self) -> Option<f32> {
        self.close_anchor
    }

    /// Angle between the far anchor and the live heading (`angle_c`).
    pub fn far_angle(&self) -> Option<f32> {
        anchor_angle(self.far_anchor, self.live_heading)
    }

    /// Angle between the close anchor and the live heading (`angle_a`).
    pub fn close_angle(&self) -> Option<f32> {
        anchor_angle(self.close_anchor, self.live_heading)
    }

    /// Unrounded distance estimate against the current live heading.
    pub fn distance(&self) -> Option<f64> {
        estimate_distance(self.close_angle(), self.far_angle(), self.known_distance)
    }

    /// Distance reading, present only once both anchors have been marked.
    pub fn reading(&self) -> Option<DistanceReading> {
        if !self.state.shows_distance() {
            return None;
        }
        let reading = DistanceReading::classify(self.distance());
        if !reading.is_valid() {
            log_trace!("invalid distance for current geometry");
        }
        Some(reading)
    }

    /// Snapshot of everything the UI renders for this tick.
    pub fn frame(&self) -> Frame {
        Frame {
            state: self.state,
            prompt: self.state.prompt(),
            button: self.state.button_label(),
            reading: self.reading(),
            rotate_device: self.last_mode == Some(ScreenMode::Portrait),
        }
    }

    fn log_mark(&self, which: &'static str, anchor: Option<f32>) {
        match anchor {
            Some(heading) => log_debug!("{} anchor marked at {}", which, heading),
            None => log_warn!("{} anchor marked before any heading was observed", which),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(session: &mut MeasurementSession, heading: f32) {
        assert!(session.observe(&OrientationSample::landscape(heading, -10.0)));
    }

    fn portrait(heading: f32) -> OrientationSample {
        OrientationSample::new(Some(heading), Some(-10.0), ScreenMode::Portrait)
    }

    #[test]
    fn test_new_session() {
        let session = MeasurementSession::new(10.0);
        assert_eq!(session.state(), MeasuringState::Started);
        assert_eq!(session.far_anchor(), None);
        assert_eq!(session.close_anchor(), None);
        assert_eq!(session.live_heading(), None);
        assert_eq!(session.reading(), None);
    }

    #[test]
    fn test_ticks_never_change_state() {
        let mut session = MeasurementSession::new(10.0);
        for h in 0..50 {
            session.observe(&OrientationSample::landscape(h as f32 * 7.0, -1.0));
        }
        assert_eq!(session.state(), MeasuringState::Started);
        assert_eq!(session.far_anchor(), None);
    }

    #[test]
    fn test_full_cycle_clears_anchors() {
        let mut session = MeasurementSession::new(10.0);
        tick(&mut session, 100.0);
        assert_eq!(session.advance(), MeasuringState::FarAnchorMarked);
        assert_eq!(session.far_anchor(), Some(100.0));

        tick(&mut session, 250.0);
        tick(&mut session, 260.0);
        assert_eq!(session.advance(), MeasuringState::CloseAnchorMarked);
        assert_eq!(session.close_anchor(), Some(260.0));

        tick(&mut session, 40.0);
        assert_eq!(session.advance(), MeasuringState::Started);
        assert_eq!(session.far_anchor(), None);
        assert_eq!(session.close_anchor(), None);
    }

    #[test]
    fn test_reference_measurement() {
        // Far anchor at 0°, close anchor at 90°, live heading at 60°:
        // angle_a = 30°, angle_c = 60°
        let mut session = MeasurementSession::new(10.0);
        tick(&mut session, 0.0);
        session.advance();
        tick(&mut session, 90.0);
        session.advance();
        tick(&mut session, 60.0);

        assert!((session.close_angle().unwrap() - 30.0).abs() < 0.001);
        assert!((session.far_angle().unwrap() - 60.0).abs() < 0.001);
        let reading = session.reading().unwrap();
        assert!((reading.rounded(1).unwrap() - 5.8).abs() < 1e-9);
    }

    #[test]
    fn test_far_anchor_at_zero_heading_is_marked() {
        let mut session = MeasurementSession::new(10.0);
        tick(&mut session, 0.0);
        session.advance();
        assert_eq!(session.far_anchor(), Some(0.0));
        tick(&mut session, 15.0);
        assert!((session.far_angle().unwrap() - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_live_heading_aligned_with_far_anchor_is_invalid() {
        let mut session = MeasurementSession::new(10.0);
        tick(&mut session, 45.0);
        session.advance();
        tick(&mut session, 120.0);
        session.advance();
        tick(&mut session, 45.0);
        assert_eq!(session.reading(), Some(DistanceReading::Invalid));
    }

    #[test]
    fn test_live_heading_opposite_far_anchor_is_invalid() {
        let mut session = MeasurementSession::new(10.0);
        tick(&mut session, 0.0);
        session.advance();
        tick(&mut session, 150.0);
        session.advance();
        tick(&mut session, 180.0);
        assert_eq!(session.far_angle(), Some(180.0));
        assert_eq!(session.close_angle(), Some(30.0));
        assert_eq!(session.distance(), None);
        assert_eq!(session.reading(), Some(DistanceReading::Invalid));
    }

    #[test]
    fn test_portrait_tick_keeps_last_distance() {
        let mut session = MeasurementSession::new(10.0);
        tick(&mut session, 0.0);
        session.advance();
        tick(&mut session, 90.0);
        session.advance();
        tick(&mut session, 60.0);
        let before = session.reading();

        assert!(!session.observe(&portrait(200.0)));
        assert_eq!(session.reading(), before);
        assert!(session.frame().rotate_device);

        tick(&mut session, 60.0);
        assert!(!session.frame().rotate_device);
    }

    #[test]
    fn test_repeated_ticks_are_idempotent() {
        let mut session = MeasurementSession::new(12.0);
        tick(&mut session, 10.0);
        session.advance();
        tick(&mut session, 200.0);
        session.advance();
        tick(&mut session, 150.0);
        let first = session.reading();
        for _ in 0..100 {
            tick(&mut session, 150.0);
            assert_eq!(session.reading(), first);
        }
    }

    #[test]
    fn test_mark_without_heading_advances_with_unset_anchor() {
        let mut session = MeasurementSession::new(10.0);
        assert_eq!(session.advance(), MeasuringState::FarAnchorMarked);
        assert_eq!(session.far_anchor(), None);
        tick(&mut session, 30.0);
        session.advance();
        assert_eq!(session.reading(), Some(DistanceReading::Invalid));
    }

    #[test]
    fn test_reset_mid_attempt() {
        let mut session = MeasurementSession::new(10.0);
        tick(&mut session, 30.0);
        session.advance();
        session.reset();
        assert_eq!(session.state(), MeasuringState::Started);
        assert_eq!(session.far_anchor(), None);
        assert_eq!(session.live_heading(), Some(30.0));
    }

    #[test]
    fn test_frame_follows_state() {
        let mut session = MeasurementSession::new(10.0);
        let frame = session.frame();
        assert_eq!(frame.button.as_str(), "Mark");
        assert!(frame.reading.is_none());
        assert!(!frame.rotate_device);

        session.advance();
        session.advance();
        let frame = session.frame();
        assert_eq!(frame.button.as_str(), "Measure Again");
        assert!(frame.reading.is_some());
    }
}

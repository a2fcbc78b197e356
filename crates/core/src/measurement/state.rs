//! Anchor-marking states and their UI selectors

/// Stage of a measurement attempt.
///
/// `Started` → `FarAnchorMarked` → `CloseAnchorMarked` → `Started`, advanced
/// only by the single mark action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasuringState {
    /// Waiting for the far anchor to be sighted from the close reference point
    #[default]
    Started,
    /// Far anchor stored; waiting for the close anchor from the standing point
    FarAnchorMarked,
    /// Both anchors stored; distance is displayed and tracks the live heading
    CloseAnchorMarked,
}

/// What the UI should show above the action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prompt {
    SightFarAnchor,
    SightCloseAnchor,
    ShowDistance,
}

impl Prompt {
    /// Instruction text, or `None` when the distance reading takes its place.
    pub fn instruction(&self) -> Option<&'static str> {
        match self {
            Prompt::SightFarAnchor => Some(
                "Stand on the close anchor, then point to the far anchor, then press Mark",
            ),
            Prompt::SightCloseAnchor => Some(
                "Stand on your measured spot, then point to the close anchor, then press Mark",
            ),
            Prompt::ShowDistance => None,
        }
    }
}

/// Label of the single action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLabel {
    Mark,
    MeasureAgain,
}

impl ButtonLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonLabel::Mark => "Mark",
            ButtonLabel::MeasureAgain => "Measure Again",
        }
    }
}

impl MeasuringState {
    /// State reached when the action fires in this state.
    pub fn next(self) -> Self {
        match self {
            MeasuringState::Started => MeasuringState::FarAnchorMarked,
            MeasuringState::FarAnchorMarked => MeasuringState::CloseAnchorMarked,
            MeasuringState::CloseAnchorMarked => MeasuringState::Started,
        }
    }

    pub fn prompt(self) -> Prompt {
        match self {
            MeasuringState::Started => Prompt::SightFarAnchor,
            MeasuringState::FarAnchorMarked => Prompt::SightCloseAnchor,
            MeasuringState::CloseAnchorMarked => Prompt::ShowDistance,
        }
    }

    pub fn button_label(self) -> ButtonLabel {
        match self {
            MeasuringState::Started | MeasuringState::FarAnchorMarked => ButtonLabel::Mark,
            MeasuringState::CloseAnchorMarked => ButtonLabel::MeasureAgain,
        }
    }

    /// Whether a distance reading is displayed in this state.
    pub fn shows_distance(self) -> bool {
        matches!(self, MeasuringState::CloseAnchorMarked)
    }

    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasuringState::Started => "Started",
            MeasuringState::FarAnchorMarked => "FarAnchorMarked",
            MeasuringState::CloseAnchorMarked => "CloseAnchorMarked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_started() {
        assert_eq!(MeasuringState::default(), MeasuringState::Started);
    }

    #[test]
    fn test_cycle_returns_to_started() {
        let s = MeasuringState::Started;
        assert_eq!(s.next(), MeasuringState::FarAnchorMarked);
        assert_eq!(s.next().next(), MeasuringState::CloseAnchorMarked);
        assert_eq!(s.next().next().next(), MeasuringState::Started);
    }

    #[test]
    fn test_prompts_are_distinct() {
        let prompts = [
            MeasuringState::Started.prompt(),
            MeasuringState::FarAnchorMarked.prompt(),
            MeasuringState::CloseAnchorMarked.prompt(),
        ];
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
        assert!(prompts[0].instruction().unwrap().contains("far anchor"));
        assert!(prompts[1].instruction().unwrap().contains("close anchor"));
        assert_eq!(prompts[2].instruction(), None);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(MeasuringState::Started.button_label().as_str(), "Mark");
        assert_eq!(MeasuringState::FarAnchorMarked.button_label().as_str(), "Mark");
        assert_eq!(
            MeasuringState::CloseAnchorMarked.button_label().as_str(),
            "Measure Again"
        );
    }

    #[test]
    fn test_only_terminal_state_shows_distance() {
        assert!(!MeasuringState::Started.shows_distance());
        assert!(!MeasuringState::FarAnchorMarked.shows_distance());
        assert!(MeasuringState::CloseAnchorMarked.shows_distance());
    }
}

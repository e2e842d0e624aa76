use crate::{FingerState, HandLandmarks};

/// Maps one hand's landmarks to a vocabulary label, or `None` when the pose
/// matches nothing.
///
/// The rule-based [`FingerRuleClassifier`] is the default; a learned model can
/// sit behind the same trait.
pub trait PoseClassifier: Send {
    fn classify(&mut self, hand: &HandLandmarks) -> Option<String>;
}

/// Required extended (`true`) / curled (`false`) state per finger. `None`
/// means the finger is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FingerPattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinky: Option<bool>,
}

impl FingerPattern {
    /// Pattern over the four long fingers, thumb ignored.
    pub const fn fingers(index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self {
            thumb: None,
            index: Some(index),
            middle: Some(middle),
            ring: Some(ring),
            pinky: Some(pinky),
        }
    }

    pub const fn with_thumb(mut self, thumb: bool) -> Self {
        self.thumb = Some(thumb);
        self
    }

    pub fn matches(&self, state: &FingerState) -> bool {
        let check = |want: Option<bool>, got: bool| want.is_none_or(|w| w == got);
        check(self.thumb, state.thumb)
            && check(self.index, state.index)
            && check(self.middle, state.middle)
            && check(self.ring, state.ring)
            && check(self.pinky, state.pinky)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PoseRule {
    pub label: String,
    pub pattern: FingerPattern,
}

impl PoseRule {
    pub fn new(label: impl Into<String>, pattern: FingerPattern) -> Self {
        Self {
            label: label.into(),
            pattern,
        }
    }

    /// Vocabulary shipped with the subtitle demo.
    pub fn defaults() -> Vec<PoseRule> {
        vec![
            PoseRule::new("hello", FingerPattern::fingers(true, true, true, true)),
            PoseRule::new(
                "thank_you",
                FingerPattern::fingers(false, false, false, false),
            ),
            PoseRule::new("we", FingerPattern::fingers(true, true, false, false)),
            PoseRule::new("made", FingerPattern::fingers(true, true, true, false)),
            PoseRule::new("this", FingerPattern::fingers(true, false, false, false)),
            PoseRule::new("program", FingerPattern::fingers(false, false, false, true)),
        ]
    }
}

/// Evaluates [`PoseRule`]s in order against the finger state; first match
/// wins.
#[derive(Debug, Clone)]
pub struct FingerRuleClassifier {
    rules: Vec<PoseRule>,
}

impl FingerRuleClassifier {
    pub fn new(rules: Vec<PoseRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[PoseRule] {
        &self.rules
    }

    pub fn classify_state(&self, state: &FingerState) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(state))
            .map(|rule| rule.label.as_str())
    }
}

impl Default for FingerRuleClassifier {
    fn default() -> Self {
        Self::new(PoseRule::defaults())
    }
}

impl PoseClassifier for FingerRuleClassifier {
    fn classify(&mut self, hand: &HandLandmarks) -> Option<String> {
        let state = FingerState::from_hand(hand);
        let label = self.classify_state(&state).map(str::to_string);
        tracing::trace!(?state, label = ?label, "pose_classified");
        label
    }
}

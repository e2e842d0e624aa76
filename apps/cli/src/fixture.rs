use std::path::Path;

use anyhow::Context;
use signline_hand_pose::HandLandmarks;

pub const DEMO_JSON: &str = include_str!("../fixtures/demo.json");

/// A recorded session: detector readings and user actions on one clock.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub name: String,
    pub frames: Vec<FixtureFrame>,
}

/// One tick of a recording.
///
/// `hand` carries raw landmarks (42 or 63 floats) and goes through the pose
/// classifier; `label` is an already-classified reading. A frame with an
/// `action` and no reading is a user action between ticks. Any other frame
/// without a reading is a "no hand" tick.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FixtureFrame {
    pub t_ms: i64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub hand: Option<Vec<f32>>,
    #[serde(default)]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Commit,
    Undo,
    Clear,
    ResetInput,
    ResetTranscript,
}

#[derive(Debug)]
pub enum Reading {
    Hand(HandLandmarks),
    Label(String),
    Empty,
}

impl Fixture {
    pub fn demo() -> anyhow::Result<Self> {
        Self::parse(DEMO_JSON).context("built-in demo fixture is invalid")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid fixture {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let fixture: Self = serde_json::from_str(content)?;
        if let Some(pair) = fixture.frames.windows(2).find(|w| w[1].t_ms < w[0].t_ms) {
            anyhow::bail!(
                "timestamps must not decrease ({} after {})",
                pair[1].t_ms,
                pair[0].t_ms
            );
        }
        Ok(fixture)
    }
}

impl FixtureFrame {
    /// `None` for action-only frames, which do not advance the detector.
    pub fn reading(&self) -> anyhow::Result<Option<Reading>> {
        if let Some(flat) = self.hand.as_deref() {
            let hand = HandLandmarks::from_flat(flat)
                .with_context(|| format!("bad hand landmarks at t_ms={}", self.t_ms))?;
            return Ok(Some(Reading::Hand(hand)));
        }
        if let Some(label) = self.label.as_ref() {
            return Ok(Some(Reading::Label(label.clone())));
        }
        if self.action.is_some() {
            return Ok(None);
        }
        Ok(Some(Reading::Empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fixture_parses() {
        let fixture = Fixture::demo().unwrap();
        assert_eq!(fixture.name, "demo");
        assert!(fixture.frames.iter().any(|f| f.hand.is_some()));
        assert!(fixture.frames.iter().all(|f| f.reading().is_ok()));
    }

    #[test]
    fn frame_kinds() {
        let fixture = Fixture::parse(
            r#"{"frames": [
                {"t_ms": 0, "label": "we"},
                {"t_ms": 10},
                {"t_ms": 20, "action": "commit"},
                {"t_ms": 30, "label": "made", "action": "undo"}
            ]}"#,
        )
        .unwrap();

        let readings: Vec<_> = fixture
            .frames
            .iter()
            .map(|f| f.reading().unwrap())
            .collect();
        assert!(matches!(readings[0], Some(Reading::Label(ref l)) if l == "we"));
        assert!(matches!(readings[1], Some(Reading::Empty)));
        assert!(readings[2].is_none());
        assert!(matches!(readings[3], Some(Reading::Label(_))));
        assert_eq!(fixture.frames[3].action, Some(Action::Undo));
    }

    #[test]
    fn short_hand_buffer_is_rejected() {
        let fixture = Fixture::parse(r#"{"frames": [{"t_ms": 0, "hand": [0.1, 0.2]}]}"#).unwrap();
        let err = fixture.frames[0].reading().unwrap_err();
        assert!(err.to_string().contains("t_ms=0"));
    }

    #[test]
    fn decreasing_timestamps_are_rejected() {
        let err = Fixture::parse(r#"{"frames": [{"t_ms": 10}, {"t_ms": 5}]}"#).unwrap_err();
        assert!(err.to_string().contains("must not decrease"));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(Fixture::parse(r#"{"frames": [{"t_ms": 0, "action": "dance"}]}"#).is_err());
    }
}

use crate::GestureLabel;

/// What an empty ("no gesture") reading does to the debounce state.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmptyReadingPolicy {
    /// Empty readings change nothing. A held pose interrupted by a no-hand
    /// frame cannot fire again until a different label is accepted.
    #[default]
    Retain,
    /// Empty readings forget the last accepted label (not its timestamp), so
    /// the same pose can fire again once the window has elapsed.
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebounceState {
    pub last_accepted_label: Option<GestureLabel>,
    /// `None` stands for "never accepted" (minus infinity).
    pub last_accepted_at_ms: Option<i64>,
}

/// Turns the per-frame classifier stream into discrete "word accepted" events.
#[derive(Debug, Clone)]
pub struct DebounceFilter {
    window_ms: u64,
    policy: EmptyReadingPolicy,
    state: DebounceState,
}

impl DebounceFilter {
    pub const DEFAULT_WINDOW_MS: u64 = 800;

    pub fn new(window_ms: u64, policy: EmptyReadingPolicy) -> Self {
        Self {
            window_ms,
            policy,
            state: DebounceState::default(),
        }
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Returns the label when it is accepted as a new word.
    ///
    /// Rejects empty readings, repeats of the last accepted label, and any
    /// reading within `window_ms` of the last acceptance (inclusive).
    pub fn try_accept(&mut self, raw: Option<&GestureLabel>, now_ms: i64) -> Option<GestureLabel> {
        let Some(label) = raw else {
            if self.policy == EmptyReadingPolicy::Clear {
                self.state.last_accepted_label = None;
            }
            return None;
        };

        if self.state.last_accepted_label.as_ref() == Some(label) {
            return None;
        }

        if let Some(last) = self.state.last_accepted_at_ms {
            // A clock that runs backwards counts as "still inside the window".
            let elapsed = now_ms.saturating_sub(last);
            if elapsed < 0 || elapsed.unsigned_abs() <= self.window_ms {
                return None;
            }
        }

        self.state.last_accepted_label = Some(label.clone());
        self.state.last_accepted_at_ms = Some(now_ms);
        Some(label.clone())
    }

    pub fn reset(&mut self) {
        self.state = DebounceState::default();
    }
}

impl Default for DebounceFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW_MS, EmptyReadingPolicy::default())
    }
}

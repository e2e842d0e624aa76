use std::collections::VecDeque;

use crate::Error;

/// Majority vote over the last `window` raw readings.
///
/// A label is reported once it appears at least `min_votes` times in the
/// window. Empty readings occupy a slot but never win. When two labels tie,
/// the one seen most recently is reported.
#[derive(Debug, Clone)]
pub struct LabelSmoother {
    window: usize,
    min_votes: usize,
    recent: VecDeque<Option<String>>,
}

impl LabelSmoother {
    pub const DEFAULT_WINDOW: usize = 3;
    pub const DEFAULT_MIN_VOTES: usize = 2;

    pub fn new(window: usize, min_votes: usize) -> Result<Self, Error> {
        if window == 0 {
            return Err(Error::EmptySmootherWindow);
        }
        Ok(Self {
            window,
            min_votes: min_votes.clamp(1, window),
            recent: VecDeque::with_capacity(window),
        })
    }

    pub fn push(&mut self, reading: Option<String>) -> Option<String> {
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(reading);
        self.current()
    }

    /// The label the current window votes for, if any.
    pub fn current(&self) -> Option<String> {
        // (label, votes, last position)
        let mut tally: Vec<(&str, usize, usize)> = Vec::new();
        for (pos, label) in self.recent.iter().enumerate() {
            let Some(label) = label.as_deref() else {
                continue;
            };
            match tally.iter_mut().find(|(l, _, _)| *l == label) {
                Some(entry) => {
                    entry.1 += 1;
                    entry.2 = pos;
                }
                None => tally.push((label, 1, pos)),
            }
        }

        tally
            .into_iter()
            .filter(|(_, votes, _)| *votes >= self.min_votes)
            .max_by_key(|(_, votes, last)| (*votes, *last))
            .map(|(label, _, _)| label.to_string())
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }
}

impl Default for LabelSmoother {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
            min_votes: Self::DEFAULT_MIN_VOTES,
            recent: VecDeque::with_capacity(Self::DEFAULT_WINDOW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn two_of_three_wins() {
        let mut smoother = LabelSmoother::default();
        assert_eq!(smoother.push(some("hello")), None);
        assert_eq!(smoother.push(some("hello")), some("hello"));
        assert_eq!(smoother.push(some("we")), some("hello"));
        assert_eq!(smoother.push(some("we")), some("we"));
    }

    #[test]
    fn empty_readings_dilute_the_window() {
        let mut smoother = LabelSmoother::default();
        smoother.push(some("hello"));
        smoother.push(some("hello"));
        assert_eq!(smoother.push(None), some("hello"));
        assert_eq!(smoother.push(None), None);
    }

    #[test]
    fn tie_goes_to_most_recent() {
        let mut smoother = LabelSmoother::new(4, 2).unwrap();
        for label in ["a", "a", "b", "b"] {
            smoother.push(some(label));
        }
        assert_eq!(smoother.current(), some("b"));

        smoother.push(some("a"));
        assert_eq!(smoother.current(), some("a"));
    }

    #[test]
    fn single_vote_window_passes_through() {
        let mut smoother = LabelSmoother::new(1, 1).unwrap();
        assert_eq!(smoother.push(some("this")), some("this"));
        assert_eq!(smoother.push(None), None);
    }

    #[test]
    fn min_votes_is_clamped_to_window() {
        let mut smoother = LabelSmoother::new(2, 10).unwrap();
        smoother.push(some("we"));
        assert_eq!(smoother.push(some("we")), some("we"));
    }

    #[test]
    fn zero_window_is_rejected() {
        assert!(matches!(LabelSmoother::new(0, 1), Err(Error::EmptySmootherWindow)));
    }

    #[test]
    fn reset_forgets_history() {
        let mut smoother = LabelSmoother::default();
        smoother.push(some("hello"));
        smoother.push(some("hello"));
        smoother.reset();
        assert_eq!(smoother.current(), None);
    }

    #[quickcheck_macros::quickcheck]
    fn prop_output_was_in_window(readings: Vec<Option<u8>>) -> bool {
        let mut smoother = LabelSmoother::default();
        readings.into_iter().all(|r| {
            let out = smoother.push(r.map(|v| (v % 4).to_string()));
            match out {
                None => true,
                Some(label) => smoother
                    .recent
                    .iter()
                    .filter(|r| r.as_deref() == Some(label.as_str()))
                    .count()
                    >= 2,
            }
        })
    }
}

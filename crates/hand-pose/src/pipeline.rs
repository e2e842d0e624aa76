use crate::{Error, FingerRuleClassifier, HandLandmarks, LabelSmoother, PoseClassifier, PoseRule};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    pub rules: Vec<PoseRule>,
    /// Majority-vote smoothing over raw readings. `None` feeds raw readings
    /// straight through.
    pub smoothing: Option<SmoothingConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SmoothingConfig {
    pub window: usize,
    pub min_votes: usize,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            rules: PoseRule::defaults(),
            smoothing: None,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window: LabelSmoother::DEFAULT_WINDOW,
            min_votes: LabelSmoother::DEFAULT_MIN_VOTES,
        }
    }
}

/// Per-tick pose source: classify the visible hand (if any), then smooth.
pub struct PosePipeline {
    classifier: Box<dyn PoseClassifier>,
    smoother: Option<LabelSmoother>,
}

impl PosePipeline {
    pub fn new(classifier: impl PoseClassifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
            smoother: None,
        }
    }

    pub fn with_smoother(mut self, smoother: LabelSmoother) -> Self {
        self.smoother = Some(smoother);
        self
    }

    pub fn from_config(config: &PoseConfig) -> Result<Self, Error> {
        let pipeline = Self::new(FingerRuleClassifier::new(config.rules.clone()));
        match config.smoothing {
            Some(s) => Ok(pipeline.with_smoother(LabelSmoother::new(s.window, s.min_votes)?)),
            None => Ok(pipeline),
        }
    }

    /// One reading per tick. `None` means no hand was detected.
    pub fn observe(&mut self, hand: Option<&HandLandmarks>) -> Option<String> {
        let raw = hand.and_then(|h| self.classifier.classify(h));
        match self.smoother.as_mut() {
            Some(smoother) => smoother.push(raw),
            None => raw,
        }
    }

    /// Like [`PosePipeline::observe`] for sources that hand over
    /// pre-classified labels; blank labels count as "no gesture".
    pub fn observe_label(&mut self, label: Option<&str>) -> Option<String> {
        let raw = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        match self.smoother.as_mut() {
            Some(smoother) => smoother.push(raw),
            None => raw,
        }
    }

    pub fn reset(&mut self) {
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.reset();
        }
    }
}

impl Default for PosePipeline {
    fn default() -> Self {
        Self::new(FingerRuleClassifier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingers::tests::hand;

    #[test]
    fn no_hand_is_no_gesture() {
        let mut pipeline = PosePipeline::default();
        assert_eq!(pipeline.observe(None), None);
    }

    #[test]
    fn raw_pipeline_passes_classifier_output() {
        let mut pipeline = PosePipeline::default();
        let palm = hand([true; 5]);
        assert_eq!(pipeline.observe(Some(&palm)).as_deref(), Some("hello"));
    }

    #[test]
    fn smoothed_pipeline_needs_two_readings() {
        let config = PoseConfig {
            smoothing: Some(SmoothingConfig::default()),
            ..Default::default()
        };
        let mut pipeline = PosePipeline::from_config(&config).unwrap();
        let point = hand([false, true, false, false, false]);

        assert_eq!(pipeline.observe(Some(&point)), None);
        assert_eq!(pipeline.observe(Some(&point)).as_deref(), Some("this"));
    }

    #[test]
    fn reset_forgets_smoothing_votes() {
        let config = PoseConfig {
            smoothing: Some(SmoothingConfig::default()),
            ..Default::default()
        };
        let mut pipeline = PosePipeline::from_config(&config).unwrap();
        pipeline.observe_label(Some("we"));
        pipeline.reset();
        assert_eq!(pipeline.observe_label(Some("we")), None);
        assert_eq!(pipeline.observe_label(Some("we")).as_deref(), Some("we"));
    }

    #[test]
    fn observe_label_treats_blank_as_empty() {
        let mut pipeline = PosePipeline::default();
        assert_eq!(pipeline.observe_label(Some("  ")), None);
        assert_eq!(pipeline.observe_label(Some(" we ")).as_deref(), Some("we"));
        assert_eq!(pipeline.observe_label(None), None);
    }

    #[test]
    fn invalid_smoothing_config_is_an_error() {
        let config = PoseConfig {
            smoothing: Some(SmoothingConfig {
                window: 0,
                min_votes: 1,
            }),
            ..Default::default()
        };
        assert!(PosePipeline::from_config(&config).is_err());
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: PoseConfig =
            serde_json::from_str(r#"{"smoothing": {"window": 5, "min_votes": 3}}"#).unwrap();
        assert_eq!(config.rules, PoseRule::defaults());
        assert_eq!(config.smoothing.map(|s| s.window), Some(5));
    }
}

//! Canned sentence expansion applied at commit time.
//!
//! Rules are literal: each one lists substrings that must all occur in the
//! lower-cased buffer text. The first matching rule's replacement is used;
//! otherwise the raw words are capitalized and terminated with a period.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhraseRule {
    pub requires: Vec<String>,
    pub replacement: String,
}

impl PhraseRule {
    pub fn new<I, S>(requires: I, replacement: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requires: requires
                .into_iter()
                .map(|s| s.into().to_lowercase())
                .collect(),
            replacement: replacement.into(),
        }
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.requires
            .iter()
            .all(|needle| lowered.contains(needle.to_lowercase().as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PhraseRules(Vec<PhraseRule>);

impl PhraseRules {
    pub fn new(rules: Vec<PhraseRule>) -> Self {
        Self(rules)
    }

    /// No rules: every commit goes through the fallback.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn rules(&self) -> &[PhraseRule] {
        &self.0
    }

    pub fn expand(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        match self.0.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => rule.replacement.clone(),
            None => fallback(text),
        }
    }
}

impl Default for PhraseRules {
    fn default() -> Self {
        Self(vec![
            PhraseRule::new(["hello"], "Hello everyone, nice to meet you!"),
            PhraseRule::new(
                ["we", "made"],
                "We made this program to turn sign language into speech.",
            ),
            PhraseRule::new(["thank"], "Thank you for watching!"),
        ])
    }
}

/// Capitalize the first letter and make sure the sentence ends with
/// terminal punctuation.
pub fn fallback(text: &str) -> String {
    let text = text.trim();
    let mut chars = text.chars();
    let mut sentence = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };
    if !sentence.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    sentence
}

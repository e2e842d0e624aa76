use std::collections::BTreeMap;

use crate::GestureLabel;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplayWord {
    pub word: String,
    /// Language code → word.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
}

impl DisplayWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translations: BTreeMap::new(),
        }
    }

    pub fn with_translation(mut self, lang: impl Into<String>, word: impl Into<String>) -> Self {
        self.translations.insert(lang.into(), word.into());
        self
    }
}

/// Static label → display word mapping, with optional per-language overrides.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayWordTable {
    /// Active language code. `None` uses each entry's base word.
    pub language: Option<String>,
    pub words: BTreeMap<String, DisplayWord>,
}

impl DisplayWordTable {
    pub fn new(words: impl IntoIterator<Item = (String, DisplayWord)>) -> Self {
        Self {
            language: None,
            words: words.into_iter().collect(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Display word for `label`: the active language's entry, then the base
    /// word, then the label text itself. Blank words are skipped, so the
    /// result is never blank.
    pub fn lookup(&self, label: &GestureLabel) -> String {
        let Some(entry) = self.words.get(label.as_str()) else {
            return label.as_str().to_string();
        };

        let translated = self
            .language
            .as_ref()
            .and_then(|lang| entry.translations.get(lang));

        [translated, Some(&entry.word)]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|word| !word.trim().is_empty())
            .unwrap_or(label.as_str())
            .to_string()
    }
}

impl Default for DisplayWordTable {
    fn default() -> Self {
        let entries = [
            ("hello", "hello", "hallo"),
            ("we", "we", "wir"),
            ("made", "made", "haben gemacht"),
            ("this", "this", "dieses"),
            ("program", "program", "Programm"),
            ("thank_you", "thank you", "danke"),
        ];

        Self::new(entries.into_iter().map(|(label, en, de)| {
            (
                label.to_string(),
                DisplayWord::new(en).with_translation("de", de),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> GestureLabel {
        GestureLabel::new(s).unwrap()
    }

    #[test]
    fn mapped_label_uses_word() {
        let table = DisplayWordTable::default();
        assert_eq!(table.lookup(&label("thank_you")), "thank you");
        assert_eq!(table.lookup(&label("hello")), "hello");
    }

    #[test]
    fn unmapped_label_falls_back_to_raw_text() {
        let table = DisplayWordTable::default();
        assert_eq!(table.lookup(&label("wie_gehts")), "wie_gehts");
    }

    #[test]
    fn blank_words_fall_back() {
        let we = DisplayWord::new("we").with_translation("de", " ");
        let words = [
            ("hello".to_string(), DisplayWord::new("")),
            ("we".to_string(), we),
        ];
        let table = DisplayWordTable::new(words).with_language("de");
        assert_eq!(table.lookup(&label("hello")), "hello");
        assert_eq!(table.lookup(&label("we")), "we");
    }

    #[test]
    fn language_override_wins_when_present() {
        let table = DisplayWordTable::default().with_language("de");
        assert_eq!(table.lookup(&label("thank_you")), "danke");

        let mut table = table;
        table
            .words
            .insert("ok".to_string(), DisplayWord::new("okay"));
        assert_eq!(table.lookup(&label("ok")), "okay");
    }

    #[test]
    fn deserializes_partial_config() {
        let table: DisplayWordTable = serde_json::from_str(
            r#"{"language": "fr", "words": {"hello": {"word": "hello", "translations": {"fr": "bonjour"}}}}"#,
        )
        .unwrap();
        assert_eq!(table.lookup(&label("hello")), "bonjour");
        assert_eq!(table.lookup(&label("we")), "we");
    }
}

use std::fmt;

/// A vocabulary token produced by the pose classifier.
///
/// "No gesture" is modelled as `Option::<GestureLabel>::None`; a label is
/// never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(transparent)]
pub struct GestureLabel(String);

impl GestureLabel {
    /// Returns `None` for blank input, which the classifier uses to mean
    /// "nothing recognized".
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Convenience for classifier outputs that are already optional.
    pub fn from_reading(reading: Option<impl AsRef<str>>) -> Option<Self> {
        reading.and_then(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GestureLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> serde::Deserialize<'de> for GestureLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        GestureLabel::new(&raw).ok_or_else(|| serde::de::Error::custom("gesture label is blank"))
    }
}

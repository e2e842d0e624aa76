use crate::id::{IdGenerator, UuidIdGen};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct TranscriptEntry {
    pub id: String,
    pub text: String,
}

/// Append-only log of committed sentences.
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    id_gen: Box<dyn IdGenerator>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::with_id_gen(UuidIdGen)
    }

    pub fn with_id_gen(id_gen: impl IdGenerator + 'static) -> Self {
        Self {
            entries: Vec::new(),
            id_gen: Box::new(id_gen),
        }
    }

    pub fn append(&mut self, text: String) -> &TranscriptEntry {
        let id = self.id_gen.next_id();
        self.entries.push(TranscriptEntry { id, text });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text export, one sentence per line.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drops every entry. IDs keep counting so renderers never see a reused ID.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcript")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

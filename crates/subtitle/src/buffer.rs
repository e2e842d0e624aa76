/// In-progress utterance: accepted display words in signing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceBuffer {
    words: Vec<String>,
}

impl SentenceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: String) {
        self.words.push(word);
    }

    /// Removes and returns the last word; `None` on an empty buffer.
    pub fn pop(&mut self) -> Option<String> {
        self.words.pop()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Moves the words out, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.words)
    }
}

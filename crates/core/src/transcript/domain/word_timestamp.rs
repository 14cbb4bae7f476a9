use serde::{Deserialize, Serialize};

/// A recognized token with its spoken interval, as reported by the recognizer.
///
/// `text` is usually one word but may hold several space-separated words that
/// the recognizer glued together. On the wire this is `[text, start, end]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64, f64)", into = "(String, f64, f64)")]
pub struct WordTimestamp {
    pub text: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

impl WordTimestamp {
    pub fn new(text: impl Into<String>, start_seconds: f64, end_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            end_seconds,
        }
    }

    /// Number of words after collapsing whitespace runs and trimming the ends.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl From<(String, f64, f64)> for WordTimestamp {
    fn from((text, start_seconds, end_seconds): (String, f64, f64)) -> Self {
        Self {
            text,
            start_seconds,
            end_seconds,
        }
    }
}

impl From<WordTimestamp> for (String, f64, f64) {
    fn from(w: WordTimestamp) -> Self {
        (w.text, w.start_seconds, w.end_seconds)
    }
}

/// A word timestamp after normalization: one entry per word.
///
/// Words split out of a multi-word [`WordTimestamp`] all carry the source's
/// full interval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64, f64)", into = "(String, f64, f64)")]
pub struct CorrectedTimestamp {
    pub text: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

impl CorrectedTimestamp {
    pub fn new(text: impl Into<String>, start_seconds: f64, end_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            end_seconds,
        }
    }
}

impl From<&WordTimestamp> for CorrectedTimestamp {
    fn from(w: &WordTimestamp) -> Self {
        Self::new(w.text.clone(), w.start_seconds, w.end_seconds)
    }
}

impl From<(String, f64, f64)> for CorrectedTimestamp {
    fn from((text, start_seconds, end_seconds): (String, f64, f64)) -> Self {
        Self {
            text,
            start_seconds,
            end_seconds,
        }
    }
}

impl From<CorrectedTimestamp> for (String, f64, f64) {
    fn from(w: CorrectedTimestamp) -> Self {
        (w.text, w.start_seconds, w.end_seconds)
    }
}

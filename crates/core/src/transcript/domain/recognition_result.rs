use serde::Deserialize;

use super::word_timestamp::WordTimestamp;

/// Output of a speech recognizer: finalized segments in spoken order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RecognitionResult {
    #[serde(rename = "results", default)]
    pub segments: Vec<Segment>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Segment {
    /// Candidate transcriptions, best first. Only the first one is used.
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub transcript: String,
    /// Recognizer confidence in [0, 1]. Interim results omit it.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub timestamps: Vec<WordTimestamp>,
}

impl RecognitionResult {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl Segment {
    pub fn new(alternatives: Vec<Alternative>) -> Self {
        Self { alternatives }
    }

    pub fn best(&self) -> Option<&Alternative> {
        self.alternatives.first()
    }
}

impl Alternative {
    pub fn new(
        transcript: impl Into<String>,
        confidence: f64,
        timestamps: Vec<WordTimestamp>,
    ) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
            timestamps,
        }
    }
}

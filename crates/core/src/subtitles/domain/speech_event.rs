use serde::{Deserialize, Serialize};

use crate::transcript::domain::word_timestamp::CorrectedTimestamp;

/// Raw record of one retained segment: uncased transcript plus per-word timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeechEvent {
    pub id: String,
    pub text: String,
    pub words: Vec<CorrectedTimestamp>,
}

impl SpeechEvent {
    pub fn first_start(&self) -> Option<f64> {
        self.words.first().map(|w| w.start_seconds)
    }

    pub fn last_end(&self) -> Option<f64> {
        self.words.last().map(|w| w.end_seconds)
    }
}

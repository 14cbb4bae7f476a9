use super::word_timestamp::{CorrectedTimestamp, WordTimestamp};

pub struct TimestampNormalizer;

impl TimestampNormalizer {
    /// Split every multi-word timestamp into one entry per word.
    ///
    /// Split words share the source interval unchanged; no time is
    /// interpolated between them. Single-word entries pass through as-is.
    pub fn normalize(timestamps: &[WordTimestamp]) -> Vec<CorrectedTimestamp> {
        let mut corrected = Vec::with_capacity(timestamps.len());

        for timestamp in timestamps {
            if timestamp.word_count() <= 1 {
                corrected.push(CorrectedTimestamp::from(timestamp));
                continue;
            }

            log::debug!(
                "Splitting {:?} into {} words at [{}, {}]",
                timestamp.text,
                timestamp.word_count(),
                timestamp.start_seconds,
                timestamp.end_seconds
            );
            corrected.extend(timestamp.text.split_whitespace().map(|word| {
                CorrectedTimestamp::new(word, timestamp.start_seconds, timestamp.end_seconds)
            }));
        }

        corrected
    }
}

use thiserror::Error;

use super::casing::Casing;
use super::speech_event::SpeechEvent;
use super::subtitle_cue::SubtitleCue;
use crate::shared::constants::MIN_SEGMENT_CONFIDENCE;
use crate::shared::duration_format::{format_duration, DurationError};
use crate::transcript::domain::recognition_result::{Alternative, RecognitionResult};
use crate::transcript::domain::timestamp_normalizer::TimestampNormalizer;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("malformed segment #{index}: {reason}")]
    MalformedSegment { index: usize, reason: &'static str },
    #[error("invalid cue time: {0}")]
    InvalidDuration(#[from] DurationError),
}

/// Display cues and the raw event log built from one recognition result.
///
/// Both lists have the same length; entry `i` of each shares id `i + 1`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormattedTranscript {
    pub subtitles: Vec<SubtitleCue>,
    pub events: Vec<SpeechEvent>,
}

impl FormattedTranscript {
    pub fn len(&self) -> usize {
        self.subtitles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtitles.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.events.iter().map(|e| e.words.len()).sum()
    }
}

pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// Turn recognized segments into subtitle cues and speech events.
    ///
    /// Segments with confidence `<= 0.0` are skipped and do not consume an id,
    /// so ids are dense over the retained segments. Any error aborts the whole
    /// run; no partial output is returned.
    pub fn format(
        result: &RecognitionResult,
        casing: Casing,
    ) -> Result<FormattedTranscript, FormatError> {
        let mut formatted = FormattedTranscript::default();

        for (index, segment) in result.segments.iter().enumerate() {
            let alternative = segment.best().ok_or(FormatError::MalformedSegment {
                index,
                reason: "segment has no alternatives",
            })?;

            if !Self::is_retained(alternative.confidence) {
                log::debug!(
                    "Dropping segment #{index} (confidence {})",
                    alternative.confidence
                );
                continue;
            }

            let id = (formatted.events.len() + 1).to_string();
            let (cue, event) = Self::build_entry(id, index, alternative, casing)?;
            formatted.subtitles.push(cue);
            formatted.events.push(event);
        }

        Ok(formatted)
    }

    /// Keep only segments strictly above the cut-off; NaN never passes.
    fn is_retained(confidence: f64) -> bool {
        confidence > MIN_SEGMENT_CONFIDENCE
    }

    fn build_entry(
        id: String,
        index: usize,
        alternative: &Alternative,
        casing: Casing,
    ) -> Result<(SubtitleCue, SpeechEvent), FormatError> {
        let event = SpeechEvent {
            id,
            text: alternative.transcript.clone(),
            words: TimestampNormalizer::normalize(&alternative.timestamps),
        };
        let (start, end) = match (event.first_start(), event.last_end()) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(FormatError::MalformedSegment {
                    index,
                    reason: "retained segment has no word timestamps",
                })
            }
        };

        let cue = SubtitleCue {
            id: event.id.clone(),
            start_time: format_duration(start)?,
            end_time: format_duration(end)?,
            text: casing.apply(&alternative.transcript),
        };
        Ok((cue, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::domain::recognition_result::Segment;
    use crate::transcript::domain::word_timestamp::{CorrectedTimestamp, WordTimestamp};
    use rstest::rstest;

    fn ts(text: &str, start: f64, end: f64) -> WordTimestamp {
        WordTimestamp::new(text, start, end)
    }

    fn segment(transcript: &str, confidence: f64, timestamps: Vec<WordTimestamp>) -> Segment {
        Segment::new(vec![Alternative::new(transcript, confidence, timestamps)])
    }

    fn spoken(transcript: &str, confidence: f64) -> Segment {
        let timestamps = transcript
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| ts(w, i as f64, i as f64 + 0.5))
            .collect();
        segment(transcript, confidence, timestamps)
    }

    fn ids(formatted: &FormattedTranscript) -> (Vec<&str>, Vec<&str>) {
        (
            formatted.subtitles.iter().map(|c| c.id.as_str()).collect(),
            formatted.events.iter().map(|e| e.id.as_str()).collect(),
        )
    }

    #[test]
    fn test_empty_result_yields_empty_outputs() {
        let formatted =
            TranscriptFormatter::format(&RecognitionResult::default(), Casing::Yes).unwrap();
        assert!(formatted.subtitles.is_empty());
        assert!(formatted.events.is_empty());
        assert!(formatted.is_empty());
    }

    #[test]
    fn test_single_segment_end_to_end() {
        let result = RecognitionResult::new(vec![segment(
            "hi there",
            0.9,
            vec![ts("hi there", 1.0, 2.5)],
        )]);
        let formatted = TranscriptFormatter::format(&result, Casing::Yes).unwrap();

        let expected_words = vec![
            CorrectedTimestamp::new("hi", 1.0, 2.5),
            CorrectedTimestamp::new("there", 1.0, 2.5),
        ];
        assert_eq!(
            formatted.subtitles,
            vec![SubtitleCue {
                id: "1".to_string(),
                start_time: "00:00:01,000".to_string(),
                end_time: "00:00:02,500".to_string(),
                text: "Hi there.".to_string(),
            }]
        );
        assert_eq!(
            formatted.events,
            vec![SpeechEvent {
                id: "1".to_string(),
                text: "hi there".to_string(),
                words: expected_words,
            }]
        );
    }

    #[test]
    fn test_zero_confidence_segment_is_dropped_without_consuming_id() {
        let result = RecognitionResult::new(vec![spoken("um", 0.0), spoken("real words", 0.8)]);
        let formatted = TranscriptFormatter::format(&result, Casing::No).unwrap();

        assert_eq!(formatted.len(), 1);
        assert_eq!(ids(&formatted), (vec!["1"], vec!["1"]));
        assert_eq!(formatted.events[0].text, "real words");
    }

    #[rstest]
    #[case::all_kept(&[0.9, 0.8, 0.7], 3)]
    #[case::leading_drop(&[0.0, 0.8, 0.7], 2)]
    #[case::alternating(&[0.5, 0.0, 0.5, 0.0, 0.5], 3)]
    #[case::negative(&[-0.1, 0.2], 1)]
    #[case::all_dropped(&[0.0, 0.0], 0)]
    #[case::tiny_positive(&[f64::MIN_POSITIVE], 1)]
    #[case::nan(&[f64::NAN, 0.2], 1)]
    fn test_ids_are_dense_over_retained_segments(
        #[case] confidences: &[f64],
        #[case] expected_len: usize,
    ) {
        let segments = confidences.iter().map(|&c| spoken("some words", c)).collect();
        let formatted =
            TranscriptFormatter::format(&RecognitionResult::new(segments), Casing::Yes).unwrap();

        let expected: Vec<String> = (1..=expected_len).map(|i| i.to_string()).collect();
        let (cue_ids, event_ids) = ids(&formatted);
        assert_eq!(cue_ids, expected);
        assert_eq!(event_ids, expected);
    }

    #[test]
    fn test_nan_confidence_segment_is_dropped() {
        let result = RecognitionResult::new(vec![spoken("lost", f64::NAN), spoken("kept", 0.3)]);
        let formatted = TranscriptFormatter::format(&result, Casing::No).unwrap();
        assert_eq!(formatted.len(), 1);
        assert_eq!(formatted.subtitles[0].id, "1");
        assert_eq!(formatted.events[0].text, "kept");
    }

    #[test]
    fn test_no_casing_keeps_raw_transcript() {
        let result = RecognitionResult::new(vec![spoken("hello world ", 0.9)]);
        let formatted = TranscriptFormatter::format(&result, Casing::No).unwrap();
        assert_eq!(formatted.subtitles[0].text, "hello world ");
    }

    #[test]
    fn test_empty_transcript_without_casing_gives_empty_cue_text() {
        let result = RecognitionResult::new(vec![segment("", 0.9, vec![ts("", 0.0, 0.4)])]);
        let formatted = TranscriptFormatter::format(&result, Casing::No).unwrap();
        assert_eq!(formatted.subtitles[0].text, "");
        assert_eq!(formatted.subtitles[0].end_time, "00:00:00,400");
    }

    #[test]
    fn test_event_text_is_never_cased() {
        let result = RecognitionResult::new(vec![spoken(" hello world ", 0.9)]);
        let formatted = TranscriptFormatter::format(&result, Casing::Yes).unwrap();
        assert_eq!(formatted.subtitles[0].text, "Hello world.");
        assert_eq!(formatted.events[0].text, " hello world ");
    }

    #[test]
    fn test_cue_spans_first_start_to_last_end() {
        let result = RecognitionResult::new(vec![segment(
            "we went to new york",
            0.7,
            vec![
                ts("we", 61.2, 61.4),
                ts("went", 61.4, 61.7),
                ts("to", 61.7, 61.8),
                ts("new york", 61.8, 62.55),
            ],
        )]);
        let formatted = TranscriptFormatter::format(&result, Casing::Yes).unwrap();
        let cue = &formatted.subtitles[0];
        assert_eq!(cue.start_time, "00:01:01,200");
        assert_eq!(cue.end_time, "00:01:02,550");
        assert_eq!(formatted.events[0].words.len(), 6);
        assert_eq!(formatted.word_count(), 6);
    }

    #[test]
    fn test_only_first_alternative_is_used() {
        let result = RecognitionResult::new(vec![Segment::new(vec![
            Alternative::new("first", 0.5, vec![ts("first", 0.0, 1.0)]),
            Alternative::new("second", 0.9, vec![ts("second", 5.0, 6.0)]),
        ])]);
        let formatted = TranscriptFormatter::format(&result, Casing::No).unwrap();
        assert_eq!(formatted.subtitles[0].text, "first");
        assert_eq!(formatted.subtitles[0].end_time, "00:00:01,000");
    }

    #[test]
    fn test_retained_segment_without_timestamps_fails() {
        let result = RecognitionResult::new(vec![
            spoken("fine", 0.9),
            segment("broken", 0.9, vec![]),
        ]);
        let err = TranscriptFormatter::format(&result, Casing::Yes).unwrap_err();
        assert_eq!(
            err,
            FormatError::MalformedSegment {
                index: 1,
                reason: "retained segment has no word timestamps",
            }
        );
    }

    #[test]
    fn test_dropped_segment_without_timestamps_is_fine() {
        let result = RecognitionResult::new(vec![segment("", 0.0, vec![]), spoken("ok", 0.4)]);
        let formatted = TranscriptFormatter::format(&result, Casing::Yes).unwrap();
        assert_eq!(formatted.len(), 1);
    }

    #[test]
    fn test_segment_without_alternatives_fails() {
        let result = RecognitionResult::new(vec![Segment::default()]);
        let err = TranscriptFormatter::format(&result, Casing::Yes).unwrap_err();
        assert!(matches!(err, FormatError::MalformedSegment { index: 0, .. }));
    }

    #[test]
    fn test_negative_timestamp_fails_with_invalid_duration() {
        let result = RecognitionResult::new(vec![segment("x", 0.9, vec![ts("x", -1.0, 0.5)])]);
        let err = TranscriptFormatter::format(&result, Casing::Yes).unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidDuration(DurationError::Negative(-1.0))
        );
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let result = RecognitionResult::new(vec![
            spoken("one two", 0.9),
            spoken("three", 0.0),
            segment("four five", 0.6, vec![ts("four five", 3.0, 4.0)]),
        ]);
        let first = TranscriptFormatter::format(&result, Casing::Yes).unwrap();
        let second = TranscriptFormatter::format(&result, Casing::Yes).unwrap();
        assert_eq!(first, second);
    }
}

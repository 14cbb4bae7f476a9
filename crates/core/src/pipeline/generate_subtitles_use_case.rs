use std::path::Path;

use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::output_paths::OutputPaths;
use crate::subtitles::domain::casing::Casing;
use crate::subtitles::domain::event_log_writer::EventLogWriter;
use crate::subtitles::domain::subtitle_writer::SubtitleWriter;
use crate::subtitles::domain::transcript_formatter::TranscriptFormatter;
use crate::transcript::domain::recognition_reader::RecognitionReader;

/// Counts describing one completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatSummary {
    pub segments: usize,
    pub cues: usize,
    pub dropped: usize,
    pub words: usize,
}

pub struct GenerateSubtitlesUseCase {
    reader: Box<dyn RecognitionReader>,
    subtitle_writer: Box<dyn SubtitleWriter>,
    event_writer: Box<dyn EventLogWriter>,
    casing: Casing,
    logger: Box<dyn PipelineLogger>,
}

impl GenerateSubtitlesUseCase {
    pub fn new(
        reader: Box<dyn RecognitionReader>,
        subtitle_writer: Box<dyn SubtitleWriter>,
        event_writer: Box<dyn EventLogWriter>,
        casing: Casing,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            subtitle_writer,
            event_writer,
            casing,
            logger,
        }
    }

    /// Read a recognition result, format it and write both outputs.
    ///
    /// Nothing is written if reading or formatting fails.
    pub fn run(
        &mut self,
        input: &Path,
        outputs: &OutputPaths,
    ) -> Result<FormatSummary, Box<dyn std::error::Error>> {
        // 1. Load recognized segments
        let result = self.reader.read(input)?;

        // 2. Build cues and events in one pass
        let formatted = TranscriptFormatter::format(&result, self.casing)?;
        let summary = FormatSummary {
            segments: result.segments.len(),
            cues: formatted.len(),
            dropped: result.segments.len() - formatted.len(),
            words: formatted.word_count(),
        };
        self.logger.info(&format!(
            "Formatted {} of {} segments (casing: {})",
            summary.cues, summary.segments, self.casing
        ));

        // 3. Subtitles first, then the raw event log
        self.subtitle_writer
            .write_subtitles(&outputs.subtitles, &formatted.subtitles)?;
        self.logger.info(&format!(
            "Finished generating subtitles file: {}",
            outputs.subtitles.display()
        ));
        self.event_writer
            .write_events(&outputs.events, &formatted.events)?;
        self.logger.info(&format!(
            "Finished generating speech events file: {}",
            outputs.events.display()
        ));

        self.logger.metric("segments", summary.segments as f64);
        self.logger.metric("cues", summary.cues as f64);
        self.logger.metric("dropped", summary.dropped as f64);
        self.logger.metric("words", summary.words as f64);
        self.logger.summary();

        Ok(summary)
    }
}

use std::path::Path;

use super::output_write_error::{write_with_parents, OutputWriteError};
use crate::subtitles::domain::event_log_writer::EventLogWriter;
use crate::subtitles::domain::speech_event::SpeechEvent;

/// Writes speech events as pretty-printed JSON, words as `[text, start, end]`.
#[derive(Debug, Default)]
pub struct JsonEventWriter;

impl JsonEventWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(events: &[SpeechEvent]) -> Result<String, OutputWriteError> {
        serde_json::to_string_pretty(events).map_err(OutputWriteError::Serialize)
    }
}

impl EventLogWriter for JsonEventWriter {
    fn write_events(
        &self,
        path: &Path,
        events: &[SpeechEvent],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let json = Self::render(events)?;
        write_with_parents(path, &json)?;
        log::info!("Wrote {} speech events to {}", events.len(), path.display());
        Ok(())
    }
}

use std::path::Path;

use super::speech_event::SpeechEvent;

/// Domain interface for persisting the raw speech event log.
pub trait EventLogWriter: Send {
    fn write_events(
        &self,
        path: &Path,
        events: &[SpeechEvent],
    ) -> Result<(), Box<dyn std::error::Error>>;
}

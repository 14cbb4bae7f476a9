use std::path::Path;

use super::subtitle_cue::SubtitleCue;

/// Domain interface for persisting subtitle cues.
pub trait SubtitleWriter: Send {
    fn write_subtitles(
        &self,
        path: &Path,
        cues: &[SubtitleCue],
    ) -> Result<(), Box<dyn std::error::Error>>;
}

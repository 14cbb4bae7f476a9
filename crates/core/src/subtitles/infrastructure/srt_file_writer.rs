//! SRT (SubRip) subtitle file writer.

use std::fmt::Write;
use std::path::Path;

use super::output_write_error::write_with_parents;
use crate::subtitles::domain::subtitle_cue::SubtitleCue;
use crate::subtitles::domain::subtitle_writer::SubtitleWriter;

/// Render cues as SRT text: id, `start --> end`, text, then a blank line.
pub fn render_srt(cues: &[SubtitleCue]) -> String {
    let mut out = String::new();
    for cue in cues {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", cue.id);
        let _ = writeln!(out, "{} --> {}", cue.start_time, cue.end_time);
        let _ = writeln!(out, "{}", cue.text);
        out.push('\n');
    }
    out
}

#[derive(Debug, Default)]
pub struct SrtFileWriter;

impl SrtFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl SubtitleWriter for SrtFileWriter {
    fn write_subtitles(
        &self,
        path: &Path,
        cues: &[SubtitleCue],
    ) -> Result<(), Box<dyn std::error::Error>> {
        write_with_parents(path, &render_srt(cues))?;
        log::info!("Wrote {} subtitles to {}", cues.len(), path.display());
        Ok(())
    }
}

use std::path::{Path, PathBuf};

use super::constants::{EVENTS_FILE_SUFFIX, SRT_EXTENSION};

/// Destination files for one formatting run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub subtitles: PathBuf,
    pub events: PathBuf,
}

impl OutputPaths {
    /// `<out_dir>/<stem>.srt` and `<out_dir>/<stem>_events.json`, where `stem`
    /// is the input file name minus its final extension.
    pub fn for_input(input: &Path, out_dir: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "subtitles".to_string());

        Self {
            subtitles: out_dir.join(format!("{stem}.{SRT_EXTENSION}")),
            events: out_dir.join(format!("{stem}{EVENTS_FILE_SUFFIX}")),
        }
    }
}

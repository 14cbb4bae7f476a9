pub const DEFAULT_OUTPUT_DIR: &str = "out";

pub const SRT_EXTENSION: &str = "srt";
pub const EVENTS_FILE_SUFFIX: &str = "_events.json";

/// Segments at or below this confidence are dropped from every output.
pub const MIN_SEGMENT_CONFIDENCE: f64 = 0.0;

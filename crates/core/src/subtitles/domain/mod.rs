pub mod casing;
pub mod event_log_writer;
pub mod speech_event;
pub mod subtitle_cue;
pub mod subtitle_writer;
pub mod transcript_formatter;

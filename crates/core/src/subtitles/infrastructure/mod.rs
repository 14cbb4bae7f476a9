pub mod json_event_writer;
pub mod output_write_error;
pub mod srt_file_writer;

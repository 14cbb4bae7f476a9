pub mod constants;
pub mod duration_format;
pub mod output_paths;

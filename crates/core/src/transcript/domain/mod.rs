pub mod recognition_reader;
pub mod recognition_result;
pub mod timestamp_normalizer;
pub mod word_timestamp;

pub mod json_recognition_reader;

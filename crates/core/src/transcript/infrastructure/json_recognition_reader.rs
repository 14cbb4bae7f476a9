use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::transcript::domain::recognition_reader::RecognitionReader;
use crate::transcript::domain::recognition_result::RecognitionResult;

#[derive(Error, Debug)]
pub enum RecognitionReadError {
    #[error("failed to read recognition result {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed recognition result {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a recognizer response saved as JSON (`{"results": [...]}`).
#[derive(Debug, Default)]
pub struct JsonRecognitionReader;

impl JsonRecognitionReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path) -> Result<RecognitionResult, RecognitionReadError> {
        let json = fs::read_to_string(path).map_err(|e| RecognitionReadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_str(&json).map_err(|e| RecognitionReadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse_str(json: &str) -> Result<RecognitionResult, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl RecognitionReader for JsonRecognitionReader {
    fn read(&self, path: &Path) -> Result<RecognitionResult, Box<dyn std::error::Error>> {
        let result = self.read_file(path)?;
        log::info!(
            "Loaded {} recognized segments from {}",
            result.segments.len(),
            path.display()
        );
        Ok(result)
    }
}

use std::path::Path;

use super::recognition_result::RecognitionResult;

/// Domain interface for loading an already-produced recognition result.
pub trait RecognitionReader: Send {
    fn read(&self, path: &Path) -> Result<RecognitionResult, Box<dyn std::error::Error>>;
}

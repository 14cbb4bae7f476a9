use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputWriteError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize speech events: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Write `contents` to `path`, creating missing parent directories first.
pub(crate) fn write_with_parents(
    path: &std::path::Path,
    contents: &str,
) -> Result<(), OutputWriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| OutputWriteError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, contents).map_err(|e| OutputWriteError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

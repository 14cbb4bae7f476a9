use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use subtitle_me_core::shared::constants::DEFAULT_OUTPUT_DIR;
use subtitle_me_core::subtitles::domain::casing::Casing;

/// Persistent defaults, overridden by anything passed on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub casing: Casing,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            casing: Casing::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Subtitle Me").join("settings.json"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    log::warn!("Ignoring invalid settings at {}: {e}", path.display());
                    None
                }
            })
            .unwrap_or_default()
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether cue text gets a capitalized first letter and a trailing period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    #[default]
    Yes,
    No,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("casing must be 'yes' or 'no', got '{0}'")]
pub struct CasingParseError(pub String);

impl Casing {
    pub const ALL: &[Casing] = &[Casing::Yes, Casing::No];

    /// Produce the cue text for a raw transcript.
    ///
    /// `Yes` trims, uppercases only the first character and appends `.`
    /// unconditionally. `No` returns the transcript untouched.
    pub fn apply(self, transcript: &str) -> String {
        match self {
            Casing::Yes => {
                let trimmed = transcript.trim();
                let mut chars = trimmed.chars();
                let mut text = String::with_capacity(trimmed.len() + 1);
                if let Some(first) = chars.next() {
                    text.extend(first.to_uppercase());
                    text.push_str(chars.as_str());
                }
                text.push('.');
                text
            }
            Casing::No => transcript.to_string(),
        }
    }
}

impl FromStr for Casing {
    type Err = CasingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Casing::Yes),
            "no" => Ok(Casing::No),
            _ => Err(CasingParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Casing::Yes => write!(f, "yes"),
            Casing::No => write!(f, "no"),
        }
    }
}

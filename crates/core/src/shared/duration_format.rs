//! SubRip timestamp rendering (`HH:MM:SS,mmm`).

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DurationError {
    #[error("duration must not be negative, got {0}s")]
    Negative(f64),
    #[error("duration must be a finite number, got {0}")]
    NotFinite(f64),
}

/// Format a duration in fractional seconds as an SRT timestamp.
///
/// Units are never trimmed, so anything under an hour still starts with `00:`.
/// Milliseconds are rounded to the nearest whole value; hours past 99 simply
/// widen the first field.
pub fn format_duration(total_seconds: f64) -> Result<String, DurationError> {
    if !total_seconds.is_finite() {
        return Err(DurationError::NotFinite(total_seconds));
    }
    if total_seconds < 0.0 {
        return Err(DurationError::Negative(total_seconds));
    }

    let total_ms = (total_seconds * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let mins = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    Ok(format!("{hours:02}:{mins:02}:{secs:02},{millis:03}"))
}

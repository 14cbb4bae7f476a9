use serde::Serialize;

/// One SRT cue. Times are already rendered as `HH:MM:SS,mmm`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleCue {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub text: String,
}

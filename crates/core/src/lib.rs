pub mod pipeline;
pub mod shared;
pub mod subtitles;
pub mod transcript;

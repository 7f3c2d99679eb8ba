//! Subprocess boundary around yt-dlp.
//!
//! The API crate talks to the [`MediaExtractor`] trait; [`YtDlp`] is the real
//! implementation that builds argument lists, spawns the tool, and maps exit
//! status and output streams into [`ExtractorError`] or parsed JSON.

pub mod error;
pub mod traits;
pub mod ytdlp;

pub use error::ExtractorError;
pub use traits::MediaExtractor;
pub use ytdlp::YtDlp;

//! External collaborators for the face-track pipeline.
//!
//! This crate wraps the processes the pipeline delegates to:
//! - `yt-dlp` for video acquisition
//! - `ffprobe` for video metadata
//! - `ffmpeg` for streaming decoded RGB frames at the sampling step

pub mod download;
pub mod error;
pub mod frames;
pub mod probe;

pub use download::{fetch_video, is_supported_url};
pub use error::{MediaError, MediaResult};
pub use frames::FrameStream;
pub use probe::{probe_video, VideoInfo};

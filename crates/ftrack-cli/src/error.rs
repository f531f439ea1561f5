//! Analysis run errors.

use std::path::PathBuf;
use thiserror::Error;

use ftrack_media::MediaError;

/// Fatal failures of an analysis run.
///
/// Per-detection embedding failures never reach this type; they are
/// recovered inside the assembler. Everything here aborts the run with
/// a non-zero exit.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Video file not found: {0}")]
    VideoNotFound(PathBuf),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

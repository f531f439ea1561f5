//! Command-line entry points for the face-track pipeline.
//!
//! Two independent surfaces: `ftrack-fetch` turns a source locator into
//! a local video file, `ftrack-analyze` turns a local video into the
//! face-track report document.

pub mod analyze;
pub mod error;
pub mod telemetry;

pub use analyze::{run_analyze, AnalyzeOptions};
pub use error::AnalyzeError;

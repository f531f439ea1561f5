//! Shared data models for the FaceTrack pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Face detections and pixel bounding boxes
//! - Raw RGB frames handed to detection engines
//! - Per-speaker summaries and the final report document

pub mod detection;
pub mod frame;
pub mod rect;
pub mod report;
pub mod speaker;

// Re-export common types
pub use detection::Detection;
pub use frame::RgbFrame;
pub use rect::BoundingBox;
pub use report::{FaceTrackReport, ProcessingInfo};
pub use speaker::{AvgPosition, SpeakerSummary};

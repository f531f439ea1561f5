//! Face-track construction pipeline.
//!
//! This crate provides:
//! - Frame sampling over a target interval
//! - Embedding-based speaker identity resolution
//! - Size/centeredness confidence scoring
//! - Per-frame detection assembly with skip-and-continue failure handling
//! - Temporal smoothing of per-speaker trajectories
//! - Per-speaker screen-time aggregation and report assembly
//!
//! The face detector and embedder are capability seams ([`FaceDetector`],
//! [`FaceEmbedder`]); the `engine` module ships pure-Rust reference
//! implementations, but any backend can be wired in.

pub mod adapters;
pub mod aggregate;
pub mod assemble;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod identity;
pub mod report;
pub mod sampler;
pub mod smooth;

// Re-export common types
pub use adapters::{DetectorParams, FaceDetector, FaceEmbedder};
pub use aggregate::summarize_speakers;
pub use assemble::{DetectionAssembler, DetectionOutcome, RunContext, SkipReason};
pub use confidence::confidence_score;
pub use config::AnalysisConfig;
pub use identity::{RegistryEntry, SpeakerRegistry, DEFAULT_MATCH_THRESHOLD};
pub use report::build_report;
pub use sampler::FrameSampler;
pub use smooth::smooth_detections;

//! Capability seams for the external face detector and embedder.
//!
//! The pipeline does not care which backend fills these traits; the
//! built-in engines live in [`crate::engine`], and tests wire mocks.

use ftrack_models::{BoundingBox, RgbFrame};

/// Tunable detector parameters.
#[derive(Debug, Clone)]
pub struct DetectorParams {
    /// Search scale step; the built-in engine uses it as the mask
    /// downsampling stride
    pub scale_factor: f64,
    /// Minimum neighbor count a candidate cell must have to survive
    /// denoising
    pub min_neighbors: u32,
    /// Minimum face box side length in pixels
    pub min_size: u32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 5,
            min_size: 30,
        }
    }
}

/// Domain interface for face detection.
///
/// Implementations may be stateful (e.g., tracking across frames),
/// hence `&mut self`. No ordering guarantee across returned boxes.
pub trait FaceDetector {
    fn detect(&mut self, frame: &RgbFrame, params: &DetectorParams) -> Vec<BoundingBox>;
}

/// Domain interface for face embedding extraction.
///
/// Returns a fixed-length vector for the face region, or `None` when the
/// region is unusable. Implementations must not panic on malformed or
/// degenerate input; that maps to `None`.
pub trait FaceEmbedder {
    fn embed(&self, frame: &RgbFrame, region: &BoundingBox) -> Option<Vec<f32>>;
}

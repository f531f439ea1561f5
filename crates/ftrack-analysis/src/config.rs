//! Analysis run configuration.

use crate::adapters::DetectorParams;
use crate::identity::DEFAULT_MATCH_THRESHOLD;

/// Configuration for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Target sampling interval in seconds
    pub sample_interval: f64,
    /// Embedding distance below which two faces are the same speaker
    pub match_threshold: f32,
    /// Emit a progress log line every this many processed frames
    pub progress_every: u64,
    /// Parameters handed to the face detector
    pub detector: DetectorParams,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_interval: 0.5,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            progress_every: 10,
            detector: DetectorParams::default(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Average face center position across a speaker's appearances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvgPosition {
    pub x: f64,
    pub y: f64,
}

/// Derived per-speaker appearance statistics, recomputed per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSummary {
    /// Stable speaker identity label
    pub id: String,
    /// Number of detections attributed to this speaker
    pub appearances: u64,
    /// Arithmetic mean of detection confidences
    pub avg_confidence: f64,
    /// Earliest detection timestamp in seconds
    pub first_seen: f64,
    /// Latest detection timestamp in seconds
    pub last_seen: f64,
    /// `last_seen - first_seen` (elapsed span, not total visible time)
    pub screen_time: f64,
    /// Mean face center position
    pub avg_position: AvgPosition,
}

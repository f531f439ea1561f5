use serde::{Deserialize, Serialize};

use crate::detection::Detection;
use crate::speaker::SpeakerSummary;

/// Run-level processing metadata, carried for observability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingInfo {
    /// Source video frame rate
    pub fps: f64,
    /// Number of sampled frames actually processed
    pub frames_processed: u64,
    /// Sampling step in source frames (one sampled frame every `frame_skip`)
    pub frame_skip: u64,
}

/// The final face-track report, built once at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceTrackReport {
    /// Video duration in seconds
    pub video_duration: f64,
    /// Total number of face detections in `faces`
    pub total_faces_detected: u64,
    /// Per-speaker summaries, ranked by screen time descending
    pub speakers: Vec<SpeakerSummary>,
    /// All detections, ordered by timestamp ascending
    pub faces: Vec<Detection>,
    /// Run metadata
    pub processing_info: ProcessingInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_format_keys() {
        let report = FaceTrackReport {
            video_duration: 10.0,
            total_faces_detected: 0,
            speakers: Vec::new(),
            faces: Vec::new(),
            processing_info: ProcessingInfo {
                fps: 30.0,
                frames_processed: 0,
                frame_skip: 15,
            },
        };
        let json = serde_json::to_string(&report).unwrap();
        for key in [
            "\"video_duration\"",
            "\"total_faces_detected\"",
            "\"speakers\"",
            "\"faces\"",
            "\"processing_info\"",
            "\"frame_skip\"",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = FaceTrackReport {
            video_duration: 1.0,
            total_faces_detected: 1,
            speakers: vec![SpeakerSummary {
                id: "speaker_1".to_string(),
                appearances: 1,
                avg_confidence: 42.0,
                first_seen: 0.0,
                last_seen: 0.0,
                screen_time: 0.0,
                avg_position: crate::AvgPosition { x: 10.0, y: 20.0 },
            }],
            faces: vec![Detection::new(
                0.0,
                crate::BoundingBox::new(0, 0, 20, 20),
                42.0,
                "speaker_1".to_string(),
            )],
            processing_info: ProcessingInfo {
                fps: 10.0,
                frames_processed: 1,
                frame_skip: 5,
            },
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: FaceTrackReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}

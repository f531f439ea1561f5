//! Final report assembly.

use ftrack_models::{Detection, FaceTrackReport, ProcessingInfo};

use crate::aggregate::summarize_speakers;
use crate::smooth::smooth_detections;

/// Compose the final report from the raw detection set.
///
/// Smooths the detections, aggregates the smoothed set into ranked
/// speaker summaries, and assembles the immutable report document.
pub fn build_report(
    video_duration: f64,
    detections: Vec<Detection>,
    processing_info: ProcessingInfo,
) -> FaceTrackReport {
    let faces = smooth_detections(detections);
    let speakers = summarize_speakers(&faces);

    FaceTrackReport {
        video_duration,
        total_faces_detected: faces.len() as u64,
        speakers,
        faces,
        processing_info,
    }
}

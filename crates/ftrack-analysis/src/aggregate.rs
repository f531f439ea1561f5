//! Per-speaker screen-time aggregation and ranking.

use std::cmp::Ordering;

use ftrack_models::{AvgPosition, Detection, SpeakerSummary};

#[derive(Debug)]
struct SpeakerAccumulator {
    id: String,
    appearances: u64,
    confidence_sum: f64,
    first_seen: f64,
    last_seen: f64,
    center_x_sum: f64,
    center_y_sum: f64,
}

/// Compute per-speaker appearance statistics from the detection set.
///
/// Speakers accumulate in first-seen order; the result is sorted by
/// screen time descending with a stable sort, so speakers with equal
/// screen time keep their first-seen relative order.
pub fn summarize_speakers(detections: &[Detection]) -> Vec<SpeakerSummary> {
    let mut accumulators: Vec<SpeakerAccumulator> = Vec::new();

    for detection in detections {
        let pos = match accumulators
            .iter()
            .position(|acc| acc.id == detection.speaker_id)
        {
            Some(pos) => pos,
            None => {
                accumulators.push(SpeakerAccumulator {
                    id: detection.speaker_id.clone(),
                    appearances: 0,
                    confidence_sum: 0.0,
                    first_seen: f64::INFINITY,
                    last_seen: 0.0,
                    center_x_sum: 0.0,
                    center_y_sum: 0.0,
                });
                accumulators.len() - 1
            }
        };
        let acc = &mut accumulators[pos];

        acc.appearances += 1;
        acc.confidence_sum += detection.confidence;
        acc.first_seen = acc.first_seen.min(detection.timestamp);
        acc.last_seen = acc.last_seen.max(detection.timestamp);
        acc.center_x_sum += detection.center_x as f64;
        acc.center_y_sum += detection.center_y as f64;
    }

    let mut speakers: Vec<SpeakerSummary> = accumulators
        .into_iter()
        .map(|acc| {
            let n = acc.appearances as f64;
            SpeakerSummary {
                id: acc.id,
                appearances: acc.appearances,
                avg_confidence: acc.confidence_sum / n,
                first_seen: acc.first_seen,
                last_seen: acc.last_seen,
                screen_time: acc.last_seen - acc.first_seen,
                avg_position: AvgPosition {
                    x: acc.center_x_sum / n,
                    y: acc.center_y_sum / n,
                },
            }
        })
        .collect();

    // Most prominent speakers first; stable sort preserves first-seen
    // order on ties.
    speakers.sort_by(|a, b| {
        b.screen_time
            .partial_cmp(&a.screen_time)
            .unwrap_or(Ordering::Equal)
    });

    speakers
}

//! Temporal smoothing of per-speaker trajectories.

use std::cmp::Ordering;

use ftrack_models::Detection;

/// Damp positional jitter with a fixed 3-point box filter per speaker.
///
/// Detections are grouped by speaker (groups keep first-seen order) and
/// each group is stably sorted by timestamp. The first and last
/// detections of a group pass through unchanged; every interior
/// detection is replaced by a copy whose x and y are the truncating
/// integer average of itself and its two unsmoothed temporal neighbors.
/// Width, height, confidence, identity and timestamp are untouched;
/// centers are re-derived. Groups of length two or less are returned
/// as-is. The full set is then re-sorted by timestamp to restore global
/// chronological order across speakers.
pub fn smooth_detections(detections: Vec<Detection>) -> Vec<Detection> {
    let mut groups: Vec<(String, Vec<Detection>)> = Vec::new();
    for detection in detections {
        match groups.iter_mut().find(|(id, _)| *id == detection.speaker_id) {
            Some((_, group)) => group.push(detection),
            None => groups.push((detection.speaker_id.clone(), vec![detection])),
        }
    }

    let mut smoothed = Vec::new();
    for (_, mut group) in groups {
        group.sort_by(|a, b| {
            a.timestamp
                .partial_cmp(&b.timestamp)
                .unwrap_or(Ordering::Equal)
        });

        if group.len() <= 2 {
            smoothed.extend(group);
            continue;
        }

        for i in 0..group.len() {
            if i == 0 || i == group.len() - 1 {
                smoothed.push(group[i].clone());
                continue;
            }
            // Neighbors are the unsmoothed originals.
            let (prev, cur, next) = (&group[i - 1], &group[i], &group[i + 1]);
            let x = ((prev.x as u64 + cur.x as u64 + next.x as u64) / 3) as u32;
            let y = ((prev.y as u64 + cur.y as u64 + next.y as u64) / 3) as u32;
            smoothed.push(cur.repositioned(x, y));
        }
    }

    smoothed.sort_by(|a, b| {
        a.timestamp
            .partial_cmp(&b.timestamp)
            .unwrap_or(Ordering::Equal)
    });
    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftrack_models::BoundingBox;

    fn det(timestamp: f64, x: u32, y: u32, speaker: &str) -> Detection {
        Detection::new(
            timestamp,
            BoundingBox::new(x, y, 40, 40),
            50.0,
            speaker.to_string(),
        )
    }

    #[test]
    fn test_groups_of_two_or_less_pass_through() {
        let one = vec![det(0.0, 10, 10, "speaker_1")];
        assert_eq!(smooth_detections(one.clone()), one);

        let two = vec![det(0.0, 10, 10, "speaker_1"), det(1.0, 30, 30, "speaker_1")];
        assert_eq!(smooth_detections(two.clone()), two);
    }

    #[test]
    fn test_three_point_window() {
        let input = vec![
            det(0.0, 10, 10, "speaker_1"),
            det(1.0, 20, 20, "speaker_1"),
            det(2.0, 30, 30, "speaker_1"),
        ];
        let smoothed = smooth_detections(input.clone());
        assert_eq!(smoothed[0], input[0]);
        assert_eq!(smoothed[1].x, 20); // (10 + 20 + 30) / 3
        assert_eq!(smoothed[1].y, 20);
        assert_eq!(smoothed[2], input[2]);
    }

    #[test]
    fn test_average_truncates_instead_of_rounding() {
        let input = vec![
            det(0.0, 10, 0, "speaker_1"),
            det(1.0, 20, 0, "speaker_1"),
            det(2.0, 31, 0, "speaker_1"),
        ];
        let smoothed = smooth_detections(input);
        // (10 + 20 + 31) / 3 = 61 / 3 = 20 with truncation, not 20.33 rounded
        assert_eq!(smoothed[1].x, 20);
    }

    #[test]
    fn test_smoothing_preserves_everything_but_position() {
        let input = vec![
            det(0.0, 0, 0, "speaker_1"),
            det(1.0, 90, 90, "speaker_1"),
            det(2.0, 0, 0, "speaker_1"),
        ];
        let smoothed = smooth_detections(input.clone());
        let interior = &smoothed[1];
        assert_eq!(interior.timestamp, 1.0);
        assert_eq!(interior.width, 40);
        assert_eq!(interior.height, 40);
        assert_eq!(interior.confidence, 50.0);
        assert_eq!(interior.speaker_id, "speaker_1");
        assert_eq!(interior.x, 30);
        // Centers are recomputed from the smoothed position
        assert_eq!(interior.center_x, 30 + 20);
    }

    #[test]
    fn test_speakers_are_smoothed_independently_and_resorted() {
        let input = vec![
            det(0.0, 0, 0, "speaker_1"),
            det(0.5, 100, 0, "speaker_2"),
            det(1.0, 30, 0, "speaker_1"),
            det(1.5, 100, 0, "speaker_2"),
            det(2.0, 60, 0, "speaker_1"),
        ];
        let smoothed = smooth_detections(input);

        // Global chronological order restored across speakers
        let timestamps: Vec<f64> = smoothed.iter().map(|d| d.timestamp).collect();
        assert_eq!(timestamps, vec![0.0, 0.5, 1.0, 1.5, 2.0]);

        // speaker_1 interior at t=1.0 smoothed over its own neighbors only
        assert_eq!(smoothed[2].speaker_id, "speaker_1");
        assert_eq!(smoothed[2].x, 30); // (0 + 30 + 60) / 3
        // speaker_2 has only two detections, untouched
        assert_eq!(smoothed[1].x, 100);
        assert_eq!(smoothed[3].x, 100);
    }

    #[test]
    fn test_idempotent_on_stationary_track() {
        let input = vec![
            det(0.0, 50, 50, "speaker_1"),
            det(1.0, 50, 50, "speaker_1"),
            det(2.0, 50, 50, "speaker_1"),
        ];
        assert_eq!(smooth_detections(input.clone()), input);
    }
}

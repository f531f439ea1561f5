//! Detection confidence scoring.

use ftrack_models::BoundingBox;

/// Score a detection from its size and centeredness in the frame.
///
/// `size_factor` is the box area as a fraction of the frame area;
/// `position_factor` is one minus the distance between the box center
/// and the frame center, with both coordinates normalized by frame
/// width and height independently. The result is
/// `clamp(0, 100, (0.7 * size + 0.3 * position) * 100)`.
///
/// Deterministic and side-effect free. A box covering the full frame,
/// centered exactly at the frame center, scores 100.
pub fn confidence_score(bbox: &BoundingBox, frame_width: u32, frame_height: u32) -> f64 {
    if frame_width == 0 || frame_height == 0 {
        return 0.0;
    }

    let frame_area = frame_width as f64 * frame_height as f64;
    let size_factor = bbox.area() as f64 / frame_area;

    // Centers use integer division, matching the assembled detections.
    let dx = (bbox.center_x() as f64 - (frame_width / 2) as f64) / frame_width as f64;
    let dy = (bbox.center_y() as f64 - (frame_height / 2) as f64) / frame_height as f64;
    let position_factor = 1.0 - (dx * dx + dy * dy).sqrt();

    ((size_factor * 0.7 + position_factor * 0.3) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_frame_centered_box_scores_100() {
        let bbox = BoundingBox::new(0, 0, 1920, 1080);
        assert_eq!(confidence_score(&bbox, 1920, 1080), 100.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let cases = [
            BoundingBox::new(0, 0, 1, 1),
            BoundingBox::new(1910, 1070, 10, 10),
            BoundingBox::new(0, 0, 0, 0),
            BoundingBox::new(500, 300, 400, 400),
        ];
        for bbox in cases {
            let score = confidence_score(&bbox, 1920, 1080);
            assert!((0.0..=100.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_centered_box_beats_corner_box_of_same_size() {
        let centered = BoundingBox::new(910, 490, 100, 100);
        let corner = BoundingBox::new(0, 0, 100, 100);
        assert!(
            confidence_score(&centered, 1920, 1080) > confidence_score(&corner, 1920, 1080)
        );
    }

    #[test]
    fn test_larger_box_scores_higher_at_same_center() {
        let small = BoundingBox::new(930, 510, 60, 60);
        let large = BoundingBox::new(860, 440, 200, 200);
        assert!(confidence_score(&large, 1920, 1080) > confidence_score(&small, 1920, 1080));
    }

    #[test]
    fn test_zero_area_frame_scores_zero() {
        let bbox = BoundingBox::new(0, 0, 10, 10);
        assert_eq!(confidence_score(&bbox, 0, 100), 0.0);
    }
}

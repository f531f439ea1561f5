use serde::{Deserialize, Serialize};

use crate::rect::BoundingBox;

/// One observed face instance at one sampled timestamp.
///
/// Immutable once assembled; the temporal smoother replaces interior
/// detections with smoothed copies rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Timestamp in seconds from the start of the video
    pub timestamp: f64,
    /// Left edge x-coordinate in pixels
    pub x: u32,
    /// Top edge y-coordinate in pixels
    pub y: u32,
    /// Face width in pixels
    pub width: u32,
    /// Face height in pixels
    pub height: u32,
    /// Detection confidence in [0, 100]
    pub confidence: f64,
    /// Stable speaker identity label (`speaker_1`, `speaker_2`, ...)
    #[serde(rename = "speakerId")]
    pub speaker_id: String,
    /// Face center x, derived from the box
    pub center_x: u32,
    /// Face center y, derived from the box
    pub center_y: u32,
}

impl Detection {
    /// Assemble a detection from its parts, deriving the center coordinates.
    pub fn new(timestamp: f64, bbox: BoundingBox, confidence: f64, speaker_id: String) -> Self {
        Self {
            timestamp,
            x: bbox.x,
            y: bbox.y,
            width: bbox.width,
            height: bbox.height,
            confidence,
            speaker_id,
            center_x: bbox.center_x(),
            center_y: bbox.center_y(),
        }
    }

    /// The detection's bounding box.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    /// Copy of this detection moved to a new top-left corner.
    ///
    /// Size, confidence, identity and timestamp are preserved; the center
    /// coordinates are re-derived from the new position.
    pub fn repositioned(&self, x: u32, y: u32) -> Self {
        let bbox = BoundingBox::new(x, y, self.width, self.height);
        Self {
            timestamp: self.timestamp,
            x,
            y,
            width: self.width,
            height: self.height,
            confidence: self.confidence,
            speaker_id: self.speaker_id.clone(),
            center_x: bbox.center_x(),
            center_y: bbox.center_y(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_derives_center() {
        let det = Detection::new(
            1.5,
            BoundingBox::new(100, 50, 81, 61),
            75.0,
            "speaker_1".to_string(),
        );
        assert_eq!(det.center_x, 140);
        assert_eq!(det.center_y, 80);
    }

    #[test]
    fn test_repositioned_recomputes_center() {
        let det = Detection::new(
            0.0,
            BoundingBox::new(0, 0, 40, 40),
            50.0,
            "speaker_1".to_string(),
        );
        let moved = det.repositioned(10, 20);
        assert_eq!(moved.center_x, 30);
        assert_eq!(moved.center_y, 40);
        assert_eq!(moved.timestamp, det.timestamp);
        assert_eq!(moved.confidence, det.confidence);
        assert_eq!(moved.speaker_id, det.speaker_id);
    }

    #[test]
    fn test_wire_format_keys() {
        let det = Detection::new(
            0.5,
            BoundingBox::new(1, 2, 3, 4),
            10.0,
            "speaker_1".to_string(),
        );
        let json = serde_json::to_string(&det).unwrap();
        assert!(json.contains("\"speakerId\""));
        assert!(json.contains("\"center_x\""));
        assert!(json.contains("\"center_y\""));
        assert!(json.contains("\"timestamp\""));
    }
}

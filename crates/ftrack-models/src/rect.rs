use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge x-coordinate
    pub x: u32,
    /// Top edge y-coordinate
    pub y: u32,
    /// Box width
    pub width: u32,
    /// Box height
    pub height: u32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Center x-coordinate. Integer division, matching the report format.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.x + self.width / 2
    }

    /// Center y-coordinate. Integer division, matching the report format.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.y + self.height / 2
    }

    /// Right edge x-coordinate (exclusive).
    #[inline]
    pub fn x2(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate (exclusive).
    #[inline]
    pub fn y2(&self) -> u32 {
        self.y + self.height
    }

    /// Box area in pixels.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the box has zero width or height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersect with a frame of the given dimensions.
    ///
    /// Returns `None` when the box lies entirely outside the frame.
    pub fn intersect_frame(&self, frame_width: u32, frame_height: u32) -> Option<BoundingBox> {
        if self.x >= frame_width || self.y >= frame_height || self.is_empty() {
            return None;
        }
        let width = self.width.min(frame_width - self.x);
        let height = self.height.min(frame_height - self.y);
        Some(BoundingBox::new(self.x, self.y, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_uses_integer_division() {
        let bbox = BoundingBox::new(10, 20, 31, 41);
        assert_eq!(bbox.center_x(), 10 + 15);
        assert_eq!(bbox.center_y(), 20 + 20);
    }

    #[test]
    fn test_intersect_frame() {
        let bbox = BoundingBox::new(100, 100, 200, 200);
        let clipped = bbox.intersect_frame(150, 150).unwrap();
        assert_eq!(clipped, BoundingBox::new(100, 100, 50, 50));

        // Fully outside
        assert!(bbox.intersect_frame(50, 50).is_none());

        // Degenerate
        assert!(BoundingBox::new(0, 0, 0, 10).intersect_frame(100, 100).is_none());
    }
}

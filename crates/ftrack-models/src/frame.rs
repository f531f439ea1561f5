/// A decoded video frame in row-major RGB24 layout.
///
/// `index` is the position of the frame in the source video, not in the
/// sampled subsequence, so `index / fps` is the frame's timestamp.
#[derive(Debug, Clone)]
pub struct RgbFrame {
    /// Source frame index
    pub index: u64,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// RGB24 pixel data, `width * height * 3` bytes
    pub data: Vec<u8>,
}

impl RgbFrame {
    /// Create a frame, checking that the buffer matches the dimensions.
    pub fn new(index: u64, width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 3);
        Self {
            index,
            width,
            height,
            data,
        }
    }

    /// RGB triple at pixel coordinates.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        (self.data[offset], self.data[offset + 1], self.data[offset + 2])
    }
}

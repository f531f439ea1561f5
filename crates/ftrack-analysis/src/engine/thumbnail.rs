//! Grayscale-thumbnail face embedder.
//!
//! Crops the face region, resizes it to a small square, and emits the
//! mean-centered, L2-normalized luma values as the embedding. Crude but
//! stable for fixed-camera footage; distances between unit vectors land
//! in [0, 2], which suits the default match threshold.

use image::imageops::{self, FilterType};
use image::RgbImage;

use ftrack_models::{BoundingBox, RgbFrame};

use crate::adapters::FaceEmbedder;

/// Thumbnail side length; the embedding has `SIDE * SIDE` dimensions.
const SIDE: u32 = 8;

/// Pure-Rust face embedder based on grayscale thumbnails.
#[derive(Debug, Default)]
pub struct GrayThumbnailEmbedder;

impl FaceEmbedder for GrayThumbnailEmbedder {
    fn embed(&self, frame: &RgbFrame, region: &BoundingBox) -> Option<Vec<f32>> {
        let region = region.intersect_frame(frame.width, frame.height)?;

        let crop = crop_region(frame, &region)?;
        let gray = imageops::grayscale(&crop);
        let thumb = imageops::resize(&gray, SIDE, SIDE, FilterType::Triangle);

        let mut values: Vec<f32> = thumb.pixels().map(|p| p.0[0] as f32).collect();
        let mean = values.iter().sum::<f32>() / values.len() as f32;
        for v in values.iter_mut() {
            *v -= mean;
        }

        let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm < 1e-6 {
            // Flat texture carries no identity signal
            return None;
        }
        for v in values.iter_mut() {
            *v /= norm;
        }
        Some(values)
    }
}

/// Copy the face region out of the frame into its own image.
fn crop_region(frame: &RgbFrame, region: &BoundingBox) -> Option<RgbImage> {
    let mut data = Vec::with_capacity(region.width as usize * region.height as usize * 3);
    for y in region.y..region.y2() {
        let row_start = (y as usize * frame.width as usize + region.x as usize) * 3;
        let row_end = row_start + region.width as usize * 3;
        data.extend_from_slice(&frame.data[row_start..row_end]);
    }
    RgbImage::from_raw(region.width, region.height, data)
}

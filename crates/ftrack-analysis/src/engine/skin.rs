//! Skin-chroma blob face detector.
//!
//! Classifies pixels with a fixed RGB skin rule, denoises the mask by
//! neighbor count, then turns 8-connected components into candidate
//! face boxes. `DetectorParams` map onto the engine as: `scale_factor`
//! is the mask sampling stride, `min_neighbors` is the denoising
//! threshold, `min_size` is the minimum box side in pixels.

use ftrack_models::{BoundingBox, RgbFrame};

use crate::adapters::{DetectorParams, FaceDetector};

/// Pure-Rust face detector based on skin-tone blobs.
#[derive(Debug, Default)]
pub struct SkinBlobDetector;

impl FaceDetector for SkinBlobDetector {
    fn detect(&mut self, frame: &RgbFrame, params: &DetectorParams) -> Vec<BoundingBox> {
        if frame.width == 0 || frame.height == 0 {
            return Vec::new();
        }

        let stride = params.scale_factor.round().max(1.0) as u32;
        let grid_w = (frame.width + stride - 1) / stride;
        let grid_h = (frame.height + stride - 1) / stride;

        let mask = skin_mask(frame, stride, grid_w, grid_h);
        let kept = denoise(&mask, grid_w, grid_h, params.min_neighbors);

        components(&kept, grid_w, grid_h)
            .into_iter()
            .filter_map(|cells| grid_bbox(&cells, grid_w, stride, frame.width, frame.height))
            .filter(|bbox| bbox.width >= params.min_size && bbox.height >= params.min_size)
            .collect()
    }
}

/// Skin classification rule for one RGB pixel (Peer et al. style).
fn is_skin(r: u8, g: u8, b: u8) -> bool {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    r > 95
        && g > 40
        && b > 20
        && max - min > 15
        && r > g
        && r > b
        && r.abs_diff(g) > 15
}

/// Sample the frame at the given stride into a boolean skin grid.
fn skin_mask(frame: &RgbFrame, stride: u32, grid_w: u32, grid_h: u32) -> Vec<bool> {
    let mut mask = vec![false; grid_w as usize * grid_h as usize];
    for gy in 0..grid_h {
        for gx in 0..grid_w {
            let (r, g, b) = frame.pixel(gx * stride, gy * stride);
            mask[(gy * grid_w + gx) as usize] = is_skin(r, g, b);
        }
    }
    mask
}

/// Keep skin cells with at least `min_neighbors` skin cells among their
/// eight neighbors.
fn denoise(mask: &[bool], grid_w: u32, grid_h: u32, min_neighbors: u32) -> Vec<bool> {
    let mut kept = vec![false; mask.len()];
    for gy in 0..grid_h as i64 {
        for gx in 0..grid_w as i64 {
            let idx = (gy * grid_w as i64 + gx) as usize;
            if !mask[idx] {
                continue;
            }
            let mut neighbors = 0u32;
            for dy in -1..=1i64 {
                for dx in -1..=1i64 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = (gx + dx, gy + dy);
                    if nx >= 0
                        && ny >= 0
                        && nx < grid_w as i64
                        && ny < grid_h as i64
                        && mask[(ny * grid_w as i64 + nx) as usize]
                    {
                        neighbors += 1;
                    }
                }
            }
            kept[idx] = neighbors >= min_neighbors;
        }
    }
    kept
}

/// 8-connected components over kept cells, as lists of cell indices.
fn components(kept: &[bool], grid_w: u32, grid_h: u32) -> Vec<Vec<u32>> {
    let mut visited = vec![false; kept.len()];
    let mut result = Vec::new();

    for start in 0..kept.len() {
        if !kept[start] || visited[start] {
            continue;
        }
        let mut cells = Vec::new();
        let mut queue = vec![start as u32];
        visited[start] = true;

        while let Some(idx) = queue.pop() {
            cells.push(idx);
            let gx = (idx % grid_w) as i64;
            let gy = (idx / grid_w) as i64;
            for dy in -1..=1i64 {
                for dx in -1..=1i64 {
                    let (nx, ny) = (gx + dx, gy + dy);
                    if nx < 0 || ny < 0 || nx >= grid_w as i64 || ny >= grid_h as i64 {
                        continue;
                    }
                    let nidx = (ny * grid_w as i64 + nx) as usize;
                    if kept[nidx] && !visited[nidx] {
                        visited[nidx] = true;
                        queue.push(nidx as u32);
                    }
                }
            }
        }
        result.push(cells);
    }

    result
}

/// Pixel bounding box of a component's grid cells, clipped to the frame.
fn grid_bbox(
    cells: &[u32],
    grid_w: u32,
    stride: u32,
    frame_width: u32,
    frame_height: u32,
) -> Option<BoundingBox> {
    let min_gx = cells.iter().map(|c| c % grid_w).min()?;
    let max_gx = cells.iter().map(|c| c % grid_w).max()?;
    let min_gy = cells.iter().map(|c| c / grid_w).min()?;
    let max_gy = cells.iter().map(|c| c / grid_w).max()?;

    let x = min_gx * stride;
    let y = min_gy * stride;
    let width = ((max_gx + 1) * stride).min(frame_width) - x;
    let height = ((max_gy + 1) * stride).min(frame_height) - y;
    Some(BoundingBox::new(x, y, width, height))
}

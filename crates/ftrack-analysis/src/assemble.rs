//! Per-frame detection assembly.
//!
//! Drives the detect → embed → resolve → score loop for each sampled
//! frame. Per-detection failures flow through [`DetectionOutcome`] as
//! values rather than unwound errors, so one bad face region never
//! aborts the frame or the run.

use tracing::{debug, info};

use ftrack_models::{BoundingBox, Detection, RgbFrame};

use crate::adapters::{FaceDetector, FaceEmbedder};
use crate::confidence::confidence_score;
use crate::config::AnalysisConfig;
use crate::identity::SpeakerRegistry;

/// Why a candidate face region produced no detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// The box has zero area or lies entirely outside the frame
    #[error("face region is empty or outside the frame")]
    EmptyRegion,
    /// The embedder produced no vector for the region
    #[error("no embedding for face region")]
    NoEmbedding,
}

/// Outcome of assembling one candidate face region.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionOutcome {
    Detected(Detection),
    Skipped(SkipReason),
}

/// Mutable per-run state, passed explicitly through the pipeline.
///
/// Holds the speaker registry and the run counters so that concurrent
/// analyses never share ambient state.
#[derive(Debug)]
pub struct RunContext {
    /// Growing registry of known speakers
    pub registry: SpeakerRegistry,
    /// Sampled frames processed so far
    pub frames_processed: u64,
    /// Detections emitted so far
    pub faces_detected: u64,
    /// Candidate regions skipped so far
    pub faces_skipped: u64,
}

impl RunContext {
    /// Create a fresh context with an empty registry.
    pub fn new(match_threshold: f32) -> Self {
        Self {
            registry: SpeakerRegistry::new(match_threshold),
            frames_processed: 0,
            faces_detected: 0,
            faces_skipped: 0,
        }
    }
}

/// Combines detector, embedder, identity resolution and confidence
/// scoring into one detection record per face per sampled frame.
pub struct DetectionAssembler<D, E> {
    detector: D,
    embedder: E,
    config: AnalysisConfig,
}

impl<D: FaceDetector, E: FaceEmbedder> DetectionAssembler<D, E> {
    /// Create an assembler over the given capability backends.
    pub fn new(detector: D, embedder: E, config: AnalysisConfig) -> Self {
        Self {
            detector,
            embedder,
            config,
        }
    }

    /// Process one sampled frame, returning its assembled detections.
    ///
    /// Embedding failures are skipped with a non-fatal log line and
    /// processing continues with the next candidate box. Progress is
    /// reported every `progress_every` processed frames.
    pub fn process_frame(
        &mut self,
        ctx: &mut RunContext,
        frame: &RgbFrame,
        fps: f64,
        total_frames: Option<u64>,
    ) -> Vec<Detection> {
        let timestamp = frame.index as f64 / fps;
        let boxes = self.detector.detect(frame, &self.config.detector);

        let mut detections = Vec::with_capacity(boxes.len());
        for bbox in boxes {
            match self.assemble_one(ctx, frame, timestamp, bbox) {
                DetectionOutcome::Detected(detection) => {
                    ctx.faces_detected += 1;
                    detections.push(detection);
                }
                DetectionOutcome::Skipped(reason) => {
                    ctx.faces_skipped += 1;
                    debug!(timestamp, %reason, "skipping face region");
                }
            }
        }

        ctx.frames_processed += 1;
        let cadence = self.config.progress_every.max(1);
        if ctx.frames_processed % cadence == 0 {
            match total_frames {
                Some(total) if total > 0 => {
                    let percent = frame.index as f64 / total as f64 * 100.0;
                    info!(
                        frames_processed = ctx.frames_processed,
                        faces_detected = ctx.faces_detected,
                        "Progress: {:.1}%",
                        percent
                    );
                }
                _ => {
                    info!(
                        frames_processed = ctx.frames_processed,
                        faces_detected = ctx.faces_detected,
                        "Progress"
                    );
                }
            }
        }

        detections
    }

    /// Assemble one candidate box into a detection, or a skip reason.
    fn assemble_one(
        &self,
        ctx: &mut RunContext,
        frame: &RgbFrame,
        timestamp: f64,
        bbox: BoundingBox,
    ) -> DetectionOutcome {
        let Some(region) = bbox.intersect_frame(frame.width, frame.height) else {
            return DetectionOutcome::Skipped(SkipReason::EmptyRegion);
        };

        // The resolver is never invoked when the embedder fails.
        let Some(embedding) = self.embedder.embed(frame, &region) else {
            return DetectionOutcome::Skipped(SkipReason::NoEmbedding);
        };

        let speaker_id = ctx.registry.resolve(&embedding);
        let confidence = confidence_score(&region, frame.width, frame.height);

        DetectionOutcome::Detected(Detection::new(timestamp, region, confidence, speaker_id))
    }
}

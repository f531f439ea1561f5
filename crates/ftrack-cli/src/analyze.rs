//! The analysis run: probe, stream frames, assemble, report.

use std::path::{Path, PathBuf};
use tracing::info;

use ftrack_analysis::engine::{GrayThumbnailEmbedder, SkinBlobDetector};
use ftrack_analysis::{
    build_report, AnalysisConfig, DetectionAssembler, FrameSampler, RunContext,
};
use ftrack_models::{Detection, FaceTrackReport, ProcessingInfo};
use ftrack_media::{probe_video, FrameStream};

use crate::error::AnalyzeError;

/// Options for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Input video path
    pub video: PathBuf,
    /// Report output path
    pub output: PathBuf,
    /// Target sampling interval in seconds
    pub interval: f64,
    /// Embedding match threshold
    pub match_threshold: f32,
    /// Progress log cadence in processed frames
    pub progress_every: u64,
}

/// Run the full pipeline over a local video and write the report.
///
/// The report is written once, after all analysis work, so a failed run
/// never leaves a partial document behind. The output directory is
/// created if absent.
pub async fn run_analyze(opts: &AnalyzeOptions) -> Result<FaceTrackReport, AnalyzeError> {
    if !opts.video.exists() {
        return Err(AnalyzeError::VideoNotFound(opts.video.clone()));
    }

    let video_info = probe_video(&opts.video).await?;
    info!(
        duration = video_info.duration,
        fps = video_info.fps,
        frames = video_info.total_frames,
        "Processing video"
    );

    let sampler = FrameSampler::new(video_info.fps, opts.interval);
    let config = AnalysisConfig {
        sample_interval: opts.interval,
        match_threshold: opts.match_threshold,
        progress_every: opts.progress_every,
        ..AnalysisConfig::default()
    };

    let mut stream = FrameStream::open(
        &opts.video,
        video_info.width,
        video_info.height,
        sampler.step(),
    )
    .await?;

    let mut assembler = DetectionAssembler::new(
        SkinBlobDetector::default(),
        GrayThumbnailEmbedder::default(),
        config,
    );
    let mut ctx = RunContext::new(opts.match_threshold);

    let mut detections: Vec<Detection> = Vec::new();
    while let Some(frame) = stream.next_frame().await? {
        detections.extend(assembler.process_frame(
            &mut ctx,
            &frame,
            video_info.fps,
            Some(video_info.total_frames),
        ));
    }

    let processing_info = ProcessingInfo {
        fps: video_info.fps,
        frames_processed: ctx.frames_processed,
        frame_skip: sampler.step(),
    };
    let report = build_report(video_info.duration, detections, processing_info);

    write_report(&report, &opts.output).await?;

    info!(
        speakers = report.speakers.len(),
        faces = report.faces.len(),
        skipped = ctx.faces_skipped,
        output = %opts.output.display(),
        "Face detection complete"
    );

    Ok(report)
}

/// Single bounded write of the finished report.
async fn write_report(report: &FaceTrackReport, output: &Path) -> Result<(), AnalyzeError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| AnalyzeError::ReportWrite {
                    path: output.to_path_buf(),
                    source,
                })?;
        }
    }

    let json = serde_json::to_vec_pretty(report)?;
    tokio::fs::write(output, json)
        .await
        .map_err(|source| AnalyzeError::ReportWrite {
            path: output.to_path_buf(),
            source,
        })
}

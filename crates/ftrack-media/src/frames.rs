//! Streaming sampled frames out of a video with FFmpeg.
//!
//! One FFmpeg pass decodes the video and drops everything but every
//! `step`-th frame, writing raw RGB24 over a pipe. Frames come back in
//! source order with their true source indices, so timestamps derive
//! directly from `index / fps`.

use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tracing::debug;

use ftrack_models::RgbFrame;

use crate::error::{MediaError, MediaResult};

/// Sequential reader of sampled video frames.
///
/// The decoder child is killed on drop, so the video source is released
/// exactly once on every exit path, including failures mid-scan.
#[derive(Debug)]
pub struct FrameStream {
    child: Child,
    stdout: BufReader<ChildStdout>,
    width: u32,
    height: u32,
    step: u64,
    frames_read: u64,
    finished: bool,
}

impl FrameStream {
    /// Open a video and start decoding every `step`-th frame.
    pub async fn open(
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        step: u64,
    ) -> MediaResult<FrameStream> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MediaError::FileNotFound(path.to_path_buf()));
        }
        if width == 0 || height == 0 {
            return Err(MediaError::InvalidVideo(
                "Zero frame dimensions".to_string(),
            ));
        }

        which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)?;

        let select = format!("select=not(mod(n\\,{}))", step.max(1));
        debug!(path = %path.display(), step, "Opening frame stream");

        let mut child = Command::new("ffmpeg")
            .arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(path)
            .arg("-vf")
            .arg(&select)
            .arg("-vsync")
            .arg("0")
            .arg("-f")
            .arg("rawvideo")
            .arg("-pix_fmt")
            .arg("rgb24")
            .arg("pipe:1")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| MediaError::ffmpeg_failed("Failed to capture FFmpeg stdout", None))?;

        Ok(FrameStream {
            child,
            stdout: BufReader::new(stdout),
            width,
            height,
            step: step.max(1),
            frames_read: 0,
            finished: false,
        })
    }

    /// Read the next sampled frame, or `None` at end of stream.
    ///
    /// A decoder failure surfaces as [`MediaError::FfmpegFailed`] once
    /// the stream drains.
    pub async fn next_frame(&mut self) -> MediaResult<Option<RgbFrame>> {
        if self.finished {
            return Ok(None);
        }

        let frame_bytes = self.width as usize * self.height as usize * 3;
        let mut data = vec![0u8; frame_bytes];

        match self.stdout.read_exact(&mut data).await {
            Ok(_) => {
                let index = self.frames_read * self.step;
                self.frames_read += 1;
                Ok(Some(RgbFrame::new(index, self.width, self.height, data)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                self.finished = true;
                let status = self.child.wait().await?;
                if status.success() {
                    debug!(frames = self.frames_read, "Frame stream drained");
                    Ok(None)
                } else {
                    Err(MediaError::ffmpeg_failed(
                        "FFmpeg decode failed",
                        status.code(),
                    ))
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Number of sampled frames read so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_fails_before_spawning() {
        let err = FrameStream::open("/nonexistent/video.mp4", 640, 360, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_zero_dimensions_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.mp4");
        tokio::fs::write(&path, b"not a video").await.unwrap();

        let err = FrameStream::open(&path, 0, 360, 5).await.unwrap_err();
        assert!(matches!(err, MediaError::InvalidVideo(_)));
    }
}

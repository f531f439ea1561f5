//! Video acquisition using yt-dlp.
//!
//! One fully-downloaded local file per source locator; no partial or
//! streaming delivery, no retries (those belong to the caller if
//! wanted).

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{MediaError, MediaResult};

/// Download a video from a URL into `output_dir`.
///
/// Returns the path of the downloaded file. The output directory is
/// created if absent. Fails with [`MediaError::YtDlpNotFound`] when the
/// binary is missing and [`MediaError::DownloadFailed`] carrying
/// yt-dlp's last stderr line otherwise.
pub async fn fetch_video(url: &str, output_dir: impl AsRef<Path>) -> MediaResult<PathBuf> {
    let output_dir = output_dir.as_ref();

    which::which("yt-dlp").map_err(|_| MediaError::YtDlpNotFound)?;
    tokio::fs::create_dir_all(output_dir).await?;

    info!(url = %url, dir = %output_dir.display(), "Downloading video");

    let template = output_dir.join("%(id)s.%(ext)s");
    let output = Command::new("yt-dlp")
        .args(download_args(url, &template))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("yt-dlp stderr: {}", stderr);
        let message = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("Unknown error");
        return Err(MediaError::download_failed(format!(
            "yt-dlp failed: {}",
            message
        )));
    }

    // `--print after_move:filepath` emits the final file path on stdout.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let path = stdout
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .map(|line| PathBuf::from(line.trim()))
        .ok_or_else(|| MediaError::download_failed("yt-dlp reported no output path"))?;

    if !path.exists() {
        return Err(MediaError::download_failed("Output file not created"));
    }

    let size = path.metadata()?.len();
    info!(
        output = %path.display(),
        size_mb = size as f64 / (1024.0 * 1024.0),
        "Downloaded video successfully"
    );

    Ok(path)
}

/// Argument list for a full-video download.
fn download_args(url: &str, template: &Path) -> Vec<String> {
    vec![
        "--no-playlist".to_string(),
        "--no-progress".to_string(),
        "--socket-timeout".to_string(),
        "15".to_string(),
        "-f".to_string(),
        "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best".to_string(),
        "--no-simulate".to_string(),
        "--print".to_string(),
        "after_move:filepath".to_string(),
        "-o".to_string(),
        template.to_string_lossy().into_owned(),
        url.to_string(),
    ]
}

/// Check if a URL is a supported video platform.
pub fn is_supported_url(url: &str) -> bool {
    let supported_domains = [
        "youtube.com",
        "youtu.be",
        "vimeo.com",
        "twitter.com",
        "x.com",
        "twitch.tv",
        "tiktok.com",
    ];

    supported_domains.iter().any(|domain| url.contains(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_url() {
        assert!(is_supported_url("https://youtube.com/watch?v=abc"));
        assert!(is_supported_url("https://youtu.be/abc"));
        assert!(is_supported_url("https://vimeo.com/123"));
        assert!(!is_supported_url("https://example.com/video"));
    }

    #[test]
    fn test_download_args_end_with_template_and_url() {
        let args = download_args("https://youtu.be/abc", Path::new("downloads/%(id)s.%(ext)s"));
        assert_eq!(args.last().unwrap(), "https://youtu.be/abc");
        assert!(args.contains(&"--no-playlist".to_string()));
        assert!(args.contains(&"after_move:filepath".to_string()));
        let o_pos = args.iter().position(|a| a == "-o").unwrap();
        assert_eq!(args[o_pos + 1], "downloads/%(id)s.%(ext)s");
    }
}

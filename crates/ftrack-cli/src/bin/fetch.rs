//! Video acquisition binary.
//!
//! Prints `VIDEO_PATH: <path>` on success; one `ERROR:` line and a
//! non-zero exit on failure.

use clap::Parser;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(author, version, about = "Download a source video for face-track analysis")]
struct Args {
    /// Video URL (YouTube, Vimeo, ...)
    url: String,
    /// Directory to store the downloaded file
    #[arg(long, default_value = "downloads")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    ftrack_cli::telemetry::init_tracing();

    let args = Args::parse();

    match ftrack_media::fetch_video(&args.url, &args.output_dir).await {
        Ok(path) => {
            println!("VIDEO_PATH: {}", path.display());
        }
        Err(e) => {
            error!("Download failed: {}", e);
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

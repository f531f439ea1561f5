//! Face-track analysis binary.
//!
//! Takes a local video path and an output path; writes the report
//! document as JSON, or exits non-zero with one `ERROR:` line.

use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use ftrack_cli::{run_analyze, AnalyzeOptions};

#[derive(Parser)]
#[command(author, version, about = "Build a face-track report from a video file")]
struct Args {
    /// Input video path
    video: PathBuf,
    /// Report output path (JSON)
    output: PathBuf,
    /// Target sampling interval in seconds
    #[arg(long, default_value_t = 0.5)]
    interval: f64,
    /// Embedding distance below which two faces are the same speaker
    #[arg(long, default_value_t = ftrack_analysis::DEFAULT_MATCH_THRESHOLD)]
    match_threshold: f32,
    /// Emit a progress line every this many processed frames
    #[arg(long, default_value_t = 10)]
    progress_every: u64,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    ftrack_cli::telemetry::init_tracing();

    let args = Args::parse();
    let opts = AnalyzeOptions {
        video: args.video,
        output: args.output,
        interval: args.interval,
        match_threshold: args.match_threshold,
        progress_every: args.progress_every,
    };

    match run_analyze(&opts).await {
        Ok(report) => {
            println!(
                "Found {} speakers, {} face instances; results saved to {}",
                report.speakers.len(),
                report.faces.len(),
                opts.output.display()
            );
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

use clap::{Args, Parser, Subcommand};
use clubber::config::PathsConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clubber")]
#[command(
    author,
    version,
    about = "Pair sorted video and audio files and mux each pair with ffmpeg"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mux every video/audio pair into the output directory
    Run {
        #[command(flatten)]
        paths: PathArgs,

        /// List the pairs without running ffmpeg
        #[arg(long)]
        dry_run: bool,
    },

    /// Show how files would be paired
    Plan {
        #[command(flatten)]
        paths: PathArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config or defaults if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

impl Commands {
    pub fn default_run() -> Self {
        Commands::Run {
            paths: PathArgs::default(),
            dry_run: false,
        }
    }
}

/// Directory overrides shared by `run` and `plan`.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Directory holding the audio files
    #[arg(long)]
    pub audio_dir: Option<PathBuf>,

    /// Directory holding the video files
    #[arg(long)]
    pub video_dir: Option<PathBuf>,

    /// Directory the muxed files are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl PathArgs {
    pub fn apply(&self, paths: &mut PathsConfig) {
        if let Some(ref dir) = self.audio_dir {
            paths.audio_dir = dir.clone();
        }
        if let Some(ref dir) = self.video_dir {
            paths.video_dir = dir.clone();
        }
        if let Some(ref dir) = self.output_dir {
            paths.output_dir = dir.clone();
        }
    }
}

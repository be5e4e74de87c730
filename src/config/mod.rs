mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Largest accepted distance from UTC for console timestamps.
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Parse configuration from TOML text without validating it
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Config files searched, in order, when no path is given.
const DEFAULT_CONFIG_PATHS: [&str; 3] = [
    "./clubber.toml",
    "~/.config/clubber/config.toml",
    "/etc/clubber/config.toml",
];

/// First existing file among the default config locations
pub fn find_config_file() -> Option<PathBuf> {
    DEFAULT_CONFIG_PATHS
        .iter()
        .map(|path_str| PathBuf::from(shellexpand::tilde(path_str).as_ref()))
        .find(|path| path.exists())
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    match find_config_file() {
        Some(path) => {
            tracing::debug!("Using config file {:?}", path);
            load_config(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if !has_usable_extension(&config.media.video_extensions) {
        anyhow::bail!("media.video_extensions must list at least one extension");
    }
    if !has_usable_extension(&config.media.audio_extensions) {
        anyhow::bail!("media.audio_extensions must list at least one extension");
    }

    if config.clock.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        anyhow::bail!(
            "clock.utc_offset_minutes must be within ±{} minutes, got {}",
            MAX_UTC_OFFSET_MINUTES,
            config.clock.utc_offset_minutes
        );
    }
    if config.clock.zone_label.trim().is_empty() {
        anyhow::bail!("clock.zone_label cannot be empty");
    }

    // Outputs are named after the video files, so this would clobber inputs
    if config.paths.output_dir == config.paths.video_dir {
        anyhow::bail!(
            "Output directory {:?} is the same as the video directory",
            config.paths.output_dir
        );
    }

    if let Some(ref ffmpeg) = config.tools.ffmpeg_path {
        if !ffmpeg.exists() {
            tracing::warn!("Configured ffmpeg path does not exist: {:?}", ffmpeg);
        }
    }

    Ok(())
}

fn has_usable_extension(extensions: &[String]) -> bool {
    extensions
        .iter()
        .any(|e| !e.trim().trim_start_matches('.').is_empty())
}

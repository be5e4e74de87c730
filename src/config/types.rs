use clubber_av::AudioCodec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub encode: EncodeConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Where inputs are read from and outputs written to.
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    #[serde(default = "default_video_dir")]
    pub video_dir: PathBuf,

    /// Created on demand, including missing parents.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("inputaudio")
}
fn default_video_dir() -> PathBuf {
    PathBuf::from("inputvideo")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            video_dir: default_video_dir(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Case-insensitive, with or without the leading dot
    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,

    #[serde(default = "default_audio_extensions")]
    pub audio_extensions: Vec<String>,
}

fn default_video_extensions() -> Vec<String> {
    clubber_common::paths::video_extensions()
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_audio_extensions() -> Vec<String> {
    clubber_common::paths::audio_extensions()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            video_extensions: default_video_extensions(),
            audio_extensions: default_audio_extensions(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EncodeConfig {
    /// Codec for the audio stream; video is always copied
    #[serde(default)]
    pub audio_codec: AudioCodec,

    /// Optional bitrate passed as `-b:a`, e.g. "192k"
    #[serde(default)]
    pub audio_bitrate: Option<String>,

    /// Replace existing outputs without asking (default: true)
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

fn default_overwrite() -> bool {
    true
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            audio_codec: AudioCodec::default(),
            audio_bitrate: None,
            overwrite: default_overwrite(),
        }
    }
}

/// Timestamp zone used for console lines.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClockConfig {
    /// Offset from UTC in minutes (default: 540, i.e. UTC+09:00)
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    #[serde(default = "default_zone_label")]
    pub zone_label: String,
}

fn default_utc_offset_minutes() -> i32 {
    9 * 60
}
fn default_zone_label() -> String {
    "JST".to_string()
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            zone_label: default_zone_label(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,
}

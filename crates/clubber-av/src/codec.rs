//! Audio codecs available for the muxed output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target audio codec for the output file.
///
/// The video stream is always copied; only the audio stream is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum AudioCodec {
    /// AAC (Advanced Audio Coding) - widely compatible, valid in MP4
    #[default]
    Aac,
    /// AC-3 (Dolby Digital)
    Ac3,
    /// E-AC-3 (Dolby Digital Plus)
    Eac3,
    /// FLAC (Free Lossless Audio Codec)
    Flac,
    /// Opus
    Opus,
    /// MPEG-1 Layer III
    Mp3,
}

impl AudioCodec {
    /// Get the ffmpeg encoder name.
    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            AudioCodec::Aac => "aac",
            AudioCodec::Ac3 => "ac3",
            AudioCodec::Eac3 => "eac3",
            AudioCodec::Flac => "flac",
            AudioCodec::Opus => "libopus",
            AudioCodec::Mp3 => "libmp3lame",
        }
    }

    /// Short lowercase name used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            AudioCodec::Aac => "aac",
            AudioCodec::Ac3 => "ac3",
            AudioCodec::Eac3 => "eac3",
            AudioCodec::Flac => "flac",
            AudioCodec::Opus => "opus",
            AudioCodec::Mp3 => "mp3",
        }
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AudioCodec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aac" => Ok(AudioCodec::Aac),
            "ac3" | "ac-3" => Ok(AudioCodec::Ac3),
            "eac3" | "e-ac-3" => Ok(AudioCodec::Eac3),
            "flac" => Ok(AudioCodec::Flac),
            "opus" | "libopus" => Ok(AudioCodec::Opus),
            "mp3" | "libmp3lame" => Ok(AudioCodec::Mp3),
            _ => Err(format!("Unsupported audio codec: {}", s)),
        }
    }
}

impl TryFrom<String> for AudioCodec {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AudioCodec> for String {
    fn from(codec: AudioCodec) -> Self {
        codec.name().to_string()
    }
}

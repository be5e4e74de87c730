//! Video + audio muxing.

use crate::{AudioCodec, Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Combines one video file and one audio file into a single output file.
///
/// Implementations block until the output is written or the attempt fails.
pub trait Muxer {
    fn mux(&self, video: &Path, audio: &Path, output: &Path) -> Result<()>;
}

impl<M: Muxer + ?Sized> Muxer for &M {
    fn mux(&self, video: &Path, audio: &Path, output: &Path) -> Result<()> {
        (**self).mux(video, audio, output)
    }
}

/// Muxer backed by the ffmpeg CLI.
///
/// The video stream is copied as-is, the audio stream is encoded to
/// [`AudioCodec`], and the output stops at the end of the shorter input.
#[derive(Debug, Clone)]
pub struct FfmpegMuxer {
    program: PathBuf,
    audio_codec: AudioCodec,
    audio_bitrate: Option<String>,
    overwrite: bool,
}

impl FfmpegMuxer {
    /// Create a muxer that runs `program` (usually `ffmpeg` or a full path).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            audio_codec: AudioCodec::default(),
            audio_bitrate: None,
            overwrite: true,
        }
    }

    pub fn with_audio_codec(mut self, codec: AudioCodec) -> Self {
        self.audio_codec = codec;
        self
    }

    /// Set an explicit audio bitrate such as `192k`.
    pub fn with_audio_bitrate(mut self, bitrate: Option<String>) -> Self {
        self.audio_bitrate = bitrate.filter(|b| !b.trim().is_empty());
        self
    }

    /// Whether existing outputs are replaced (`-y`).
    ///
    /// Without it ffmpeg asks on the terminal before overwriting.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn audio_codec(&self) -> AudioCodec {
        self.audio_codec
    }

    /// Build the argument list passed to ffmpeg for one pair.
    pub fn args(&self, video: &Path, audio: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(14);
        if self.overwrite {
            args.push("-y".into());
        }
        args.push("-i".into());
        args.push(video.into());
        args.push("-i".into());
        args.push(audio.into());
        args.push("-c:v".into());
        args.push("copy".into());
        args.push("-c:a".into());
        args.push(self.audio_codec.ffmpeg_name().into());
        if let Some(ref bitrate) = self.audio_bitrate {
            args.push("-b:a".into());
            args.push(bitrate.into());
        }
        args.push("-shortest".into());
        args.push(output.into());
        args
    }

    fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }
}

impl Default for FfmpegMuxer {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Muxer for FfmpegMuxer {
    fn mux(&self, video: &Path, audio: &Path, output: &Path) -> Result<()> {
        if output == video || output == audio {
            return Err(Error::InvalidInput(format!(
                "output {:?} would overwrite an input file",
                output
            )));
        }

        let args = self.args(video, audio, output);

        #[cfg(feature = "tracing")]
        tracing::debug!("Running {:?} {:?}", self.program, args);

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(self.tool_name())
                } else {
                    Error::Io(e)
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);

            #[cfg(feature = "tracing")]
            tracing::debug!("{} stderr:\n{}", self.tool_name(), stderr);

            let message = match last_line(&stderr) {
                Some(line) => format!("{}: {}", result.status, line),
                None => result.status.to_string(),
            };
            return Err(Error::tool_failed(self.tool_name(), message));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Mux complete: {:?}", output);

        Ok(())
    }
}

/// Last non-blank line of tool output; ffmpeg puts the actual error there.
fn last_line(text: &str) -> Option<&str> {
    text.lines().rev().map(str::trim).find(|l| !l.is_empty())
}

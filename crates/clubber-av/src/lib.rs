//! # clubber-av
//!
//! External media tool invocation for clubber.
//!
//! This crate provides:
//! - The [`Muxer`] seam: combine one video file and one audio file into a
//!   single output
//! - [`FfmpegMuxer`], the ffmpeg CLI implementation of that seam
//! - External tool detection
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use clubber_av::{AudioCodec, FfmpegMuxer, Muxer};
//! use std::path::Path;
//!
//! let muxer = FfmpegMuxer::new("ffmpeg").with_audio_codec(AudioCodec::Aac);
//! muxer.mux(
//!     Path::new("inputvideo/a.mp4"),
//!     Path::new("inputaudio/x.mp3"),
//!     Path::new("output/a.mp4"),
//! )?;
//! # Ok::<(), clubber_av::Error>(())
//! ```

mod codec;
mod error;
pub mod actions;
pub mod tools;

// Re-exports
pub use actions::{FfmpegMuxer, Muxer};
pub use codec::AudioCodec;
pub use error::{Error, Result};
pub use tools::{check_tool, check_tools, get_tool_path, require_tool, ToolInfo};

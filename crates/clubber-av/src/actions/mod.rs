//! Media processing actions.
//!
//! - Muxing a video stream with an external audio track

mod mux;

pub use mux::{FfmpegMuxer, Muxer};

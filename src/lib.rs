//! Clubber - batch muxing of paired video and audio files
//!
//! This library crate exposes the core functionality for integration testing.

pub mod batch;
pub mod clock;
pub mod config;
pub mod console;

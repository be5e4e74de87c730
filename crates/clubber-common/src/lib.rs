//! Clubber-Common: shared constants and helpers.
//!
//! - **Path Utilities**: recognized media extensions and case-insensitive
//!   filename matching used when listing input directories.
//!
//! # Examples
//!
//! ```
//! use clubber_common::paths::{has_extension, video_extensions};
//!
//! assert!(has_extension("clip.MP4", video_extensions()));
//! assert!(has_extension("take.wav", &["mp3", "wav"]));
//! ```

pub mod paths;

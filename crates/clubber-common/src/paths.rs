//! Filename utilities for detecting media files by extension.
//!
//! Matching works on the raw filename string rather than on
//! [`std::path::Path::extension`], so a name such as `.mp4` still counts as an
//! mp4 file. Comparison is case-insensitive.

/// Extensions accepted as video input.
const VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// Extensions accepted as audio input.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav"];

/// Check whether `name` ends in `.<ext>` for any of `extensions`.
///
/// Extensions may be given with or without a leading dot. Blank entries never
/// match.
///
/// # Examples
///
/// ```
/// use clubber_common::paths::has_extension;
///
/// assert!(has_extension("song.MP3", &["mp3"]));
/// assert!(has_extension("song.wav", &[".wav"]));
/// assert!(!has_extension("song.flac", &["mp3", "wav"]));
/// ```
pub fn has_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    let lowered = name.to_lowercase();
    extensions.iter().any(|ext| {
        let ext = ext.as_ref().trim().trim_start_matches('.');
        if ext.is_empty() {
            return false;
        }
        let suffix = format!(".{}", ext.to_lowercase());
        lowered.ends_with(&suffix)
    })
}

/// Get the list of video extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}

/// Get the list of audio extensions.
#[must_use]
pub fn audio_extensions() -> &'static [&'static str] {
    AUDIO_EXTENSIONS
}

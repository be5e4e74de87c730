//! Positional pairing of sorted video and audio lists.
//!
//! Pairing never looks at file contents or stems: the i-th video is paired
//! with the i-th audio file, and whatever is left over in the longer list is
//! not paired at all.

use super::discovery::list_media_files;
use crate::config::{MediaConfig, PathsConfig};
use anyhow::Result;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// One video file matched with one audio file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    /// 1-based position in the batch
    pub index: usize,
    #[serde(serialize_with = "serialize_lossy")]
    pub video: OsString,
    #[serde(serialize_with = "serialize_lossy")]
    pub audio: OsString,
}

impl Pair {
    /// Video file name for display; invalid UTF-8 is replaced.
    pub fn video_name(&self) -> Cow<'_, str> {
        self.video.to_string_lossy()
    }

    pub fn audio_name(&self) -> Cow<'_, str> {
        self.audio.to_string_lossy()
    }

    pub fn video_path(&self, paths: &PathsConfig) -> PathBuf {
        paths.video_dir.join(&self.video)
    }

    pub fn audio_path(&self, paths: &PathsConfig) -> PathBuf {
        paths.audio_dir.join(&self.audio)
    }

    /// The output always carries the video file's name.
    pub fn output_path(&self, paths: &PathsConfig) -> PathBuf {
        paths.output_dir.join(&self.video)
    }
}

/// Zip two sorted lists into pairs, stopping at the shorter one.
pub fn pair_files<'a>(
    videos: &'a [OsString],
    audios: &'a [OsString],
) -> impl Iterator<Item = Pair> + 'a {
    videos
        .iter()
        .zip(audios)
        .enumerate()
        .map(|(i, (video, audio))| Pair {
            index: i + 1,
            video: video.clone(),
            audio: audio.clone(),
        })
}

/// Sorted inputs for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPlan {
    videos: Vec<OsString>,
    audios: Vec<OsString>,
}

impl BatchPlan {
    /// Build a plan from two lists; both are sorted here.
    pub fn new(mut videos: Vec<OsString>, mut audios: Vec<OsString>) -> Self {
        videos.sort();
        audios.sort();
        Self { videos, audios }
    }

    /// List both input directories and build the plan.
    ///
    /// The audio directory is read first. Either listing failing aborts.
    pub fn discover(paths: &PathsConfig, media: &MediaConfig) -> Result<Self> {
        let audios = list_media_files(&paths.audio_dir, &media.audio_extensions)?;
        let videos = list_media_files(&paths.video_dir, &media.video_extensions)?;
        Ok(Self { videos, audios })
    }

    pub fn videos(&self) -> &[OsString] {
        &self.videos
    }

    pub fn audios(&self) -> &[OsString] {
        &self.audios
    }

    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        pair_files(&self.videos, &self.audios)
    }

    pub fn pair_count(&self) -> usize {
        self.videos.len().min(self.audios.len())
    }

    pub fn unpaired_videos(&self) -> &[OsString] {
        &self.videos[self.pair_count()..]
    }

    pub fn unpaired_audio(&self) -> &[OsString] {
        &self.audios[self.pair_count()..]
    }

    pub fn is_balanced(&self) -> bool {
        self.videos.len() == self.audios.len()
    }

    pub fn summary(&self, paths: &PathsConfig) -> PlanSummary {
        PlanSummary {
            video_dir: paths.video_dir.clone(),
            audio_dir: paths.audio_dir.clone(),
            output_dir: paths.output_dir.clone(),
            pairs: self
                .pairs()
                .map(|pair| PlannedPair {
                    output: pair.output_path(paths),
                    pair,
                })
                .collect(),
            unpaired_videos: lossy_names(self.unpaired_videos()),
            unpaired_audio: lossy_names(self.unpaired_audio()),
        }
    }
}

fn lossy_names(names: &[OsString]) -> Vec<String> {
    names
        .iter()
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}

fn serialize_lossy<S: Serializer>(name: &OsStr, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&name.to_string_lossy())
}

/// Serializable view of a plan, used by `plan --json`.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub video_dir: PathBuf,
    pub audio_dir: PathBuf,
    pub output_dir: PathBuf,
    pub pairs: Vec<PlannedPair>,
    pub unpaired_videos: Vec<String>,
    pub unpaired_audio: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedPair {
    #[serde(flatten)]
    pub pair: Pair,
    pub output: PathBuf,
}

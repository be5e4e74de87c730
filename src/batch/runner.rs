//! Sequential execution of a batch.

use super::pairing::{BatchPlan, Pair};
use crate::config::{MediaConfig, PathsConfig};
use anyhow::{Context, Result};
use clubber_av::Muxer;
use std::ffi::OsString;
use tracing::{debug, info, warn};

/// Progress notification emitted while a batch runs.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// About to invoke the muxer for `pair`.
    Processing { pair: &'a Pair },
    /// The muxer failed for `pair`; the batch continues.
    Failed { pair: &'a Pair, detail: &'a str },
    /// Every pair has been attempted.
    Completed { report: &'a BatchReport },
}

/// Event callback type
pub type EventCallback = Box<dyn Fn(&BatchEvent<'_>) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairStatus {
    Succeeded,
    Failed { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    pub pair: Pair,
    pub status: PairStatus,
}

impl PairOutcome {
    pub fn is_success(&self) -> bool {
        self.status == PairStatus::Succeeded
    }
}

/// Result of running a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<PairOutcome>,
    pub unpaired_videos: Vec<OsString>,
    pub unpaired_audio: Vec<OsString>,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &PairOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// Runs every pair of a batch through a [`Muxer`], one at a time.
pub struct BatchRunner<M> {
    muxer: M,
    paths: PathsConfig,
    event_callback: Option<EventCallback>,
}

impl<M: Muxer> BatchRunner<M> {
    pub fn new(muxer: M, paths: PathsConfig) -> Self {
        Self {
            muxer,
            paths,
            event_callback: None,
        }
    }

    pub fn with_event_callback(mut self, callback: EventCallback) -> Self {
        self.event_callback = Some(callback);
        self
    }

    fn emit(&self, event: BatchEvent<'_>) {
        if let Some(ref cb) = self.event_callback {
            cb(&event);
        }
    }

    /// Create the output directory, list the inputs and process every pair.
    ///
    /// # Errors
    ///
    /// Only setup fails: an output directory that cannot be created or an
    /// input directory that cannot be listed. Muxer failures end up in the
    /// returned report.
    pub fn run(&self, media: &MediaConfig) -> Result<BatchReport> {
        std::fs::create_dir_all(&self.paths.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {:?}",
                self.paths.output_dir
            )
        })?;

        let plan = BatchPlan::discover(&self.paths, media)?;
        Ok(self.execute(&plan))
    }

    /// Process every pair of an already listed plan.
    pub fn execute(&self, plan: &BatchPlan) -> BatchReport {
        if !plan.is_balanced() {
            warn!(
                "Found {} video and {} audio files; {} video and {} audio files will not be processed",
                plan.videos().len(),
                plan.audios().len(),
                plan.unpaired_videos().len(),
                plan.unpaired_audio().len()
            );
        }

        let mut report = BatchReport {
            outcomes: Vec::with_capacity(plan.pair_count()),
            unpaired_videos: plan.unpaired_videos().to_vec(),
            unpaired_audio: plan.unpaired_audio().to_vec(),
        };

        for pair in plan.pairs() {
            let status = self.process_pair(&pair);
            report.outcomes.push(PairOutcome { pair, status });
        }

        info!(
            "Batch finished: {} attempted, {} succeeded, {} failed",
            report.attempted(),
            report.succeeded(),
            report.failed()
        );

        self.emit(BatchEvent::Completed { report: &report });

        report
    }

    fn process_pair(&self, pair: &Pair) -> PairStatus {
        self.emit(BatchEvent::Processing { pair });

        let video = pair.video_path(&self.paths);
        let audio = pair.audio_path(&self.paths);
        let output = pair.output_path(&self.paths);
        debug!("Muxing {:?} + {:?} -> {:?}", video, audio, output);

        match self.muxer.mux(&video, &audio, &output) {
            Ok(()) => PairStatus::Succeeded,
            Err(e) => {
                let detail = e.to_string();
                debug!("Pair {} failed: {}", pair.index, detail);
                self.emit(BatchEvent::Failed {
                    pair,
                    detail: &detail,
                });
                PairStatus::Failed { detail }
            }
        }
    }
}

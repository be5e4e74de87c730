//! Batch pairing and muxing.
//!
//! A batch lists the video and audio input directories, sorts both lists,
//! pairs them by position and hands each pair to a [`clubber_av::Muxer`].
//! One failing pair never stops the rest of the batch.

pub mod discovery;
pub mod pairing;
pub mod runner;

pub use discovery::list_media_files;
pub use pairing::{pair_files, BatchPlan, Pair, PlanSummary, PlannedPair};
pub use runner::{BatchEvent, BatchReport, BatchRunner, EventCallback, PairOutcome, PairStatus};

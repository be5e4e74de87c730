//! Timestamped console lines for batch progress.

use crate::batch::BatchEvent;
use crate::clock::ZonedClock;
use chrono::{DateTime, Utc};

/// Renders [`BatchEvent`]s as `[<timestamp>] <message>` lines.
#[derive(Debug, Clone, Default)]
pub struct Console {
    clock: ZonedClock,
}

impl Console {
    pub fn new(clock: ZonedClock) -> Self {
        Self { clock }
    }

    /// Line for `event`, stamped with the current time.
    pub fn line(&self, event: &BatchEvent<'_>) -> String {
        self.line_at(Utc::now(), event)
    }

    pub fn line_at(&self, at: DateTime<Utc>, event: &BatchEvent<'_>) -> String {
        format!("[{}] {}", self.clock.format(at), message(event))
    }
}

/// Message text for `event`, without the timestamp.
pub fn message(event: &BatchEvent<'_>) -> String {
    match event {
        BatchEvent::Processing { pair } => format!(
            "Processing ({}): '{}' with audio '{}'",
            pair.index,
            pair.video_name(),
            pair.audio_name()
        ),
        BatchEvent::Failed { pair, detail } => format!(
            "Error processing {} with {}: {}",
            pair.video_name(),
            pair.audio_name(),
            detail
        ),
        BatchEvent::Completed { .. } => "Processing completed.".to_string(),
    }
}

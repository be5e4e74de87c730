//! Wall-clock timestamps in a fixed UTC offset.

use crate::config::ClockConfig;
use anyhow::Result;
use chrono::{DateTime, FixedOffset, Offset, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats instants as `YYYY-MM-DD HH:MM:SS <LABEL>` in one fixed zone.
#[derive(Debug, Clone)]
pub struct ZonedClock {
    offset: FixedOffset,
    label: String,
}

impl ZonedClock {
    pub fn new(offset: FixedOffset, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }

    pub fn from_config(config: &ClockConfig) -> Result<Self> {
        let offset = FixedOffset::east_opt(config.utc_offset_minutes * 60).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid UTC offset: {} minutes",
                config.utc_offset_minutes
            )
        })?;
        Ok(Self::new(offset, config.zone_label.trim()))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// Format `at` in this clock's zone.
    pub fn format(&self, at: DateTime<Utc>) -> String {
        format!(
            "{} {}",
            at.with_timezone(&self.offset).format(TIMESTAMP_FORMAT),
            self.label
        )
    }

    /// Current time, formatted.
    pub fn stamp(&self) -> String {
        self.format(Utc::now())
    }
}

impl Default for ZonedClock {
    fn default() -> Self {
        let config = ClockConfig::default();
        let offset =
            FixedOffset::east_opt(config.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix());
        Self::new(offset, config.zone_label)
    }
}

//! Source of "today" for the today view.

use chrono::{FixedOffset, Local, NaiveDate, Utc};
use opswall_core::config::WallConfig;
use tracing::warn;

/// Supplies the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock of the host, optionally pinned to a fixed UTC offset so the
/// facility's date is used regardless of where the process runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn local() -> Self {
        Self { offset: None }
    }

    /// `None` when the offset is not within ±24h.
    pub fn with_utc_offset_minutes(minutes: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(minutes.checked_mul(60)?)?;
        Some(Self { offset: Some(offset) })
    }

    pub fn from_config(config: &WallConfig) -> Self {
        match config.utc_offset_minutes {
            None => Self::local(),
            Some(minutes) => Self::with_utc_offset_minutes(minutes).unwrap_or_else(|| {
                warn!(minutes, "UTC offset out of range, using local time");
                Self::local()
            }),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

//! Configuration types shared by the orchestrator and the HTTP layer.

use core::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{PriorityTable, RadarError};

/// How much history to attach to each resolved indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMode {
    /// Latest value only.
    #[default]
    None,
    /// Trailing window sized by frequency (12 months, 4 quarters, 20 years).
    Mini,
    /// Everything the provider returned.
    Full,
}

impl FromStr for SeriesMode {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "mini" => Ok(Self::Mini),
            "full" => Ok(Self::Full),
            other => Err(RadarError::InvalidArg(format!(
                "series must be none, mini or full; got {other}"
            ))),
        }
    }
}

/// Per-request shaping of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportOptions {
    /// History attached to each resolved indicator.
    pub series: SeriesMode,
    /// Explicit history length; overrides the per-frequency window.
    pub keep: Option<usize>,
}

impl ReportOptions {
    /// Number of trailing observations to attach for a series of
    /// `frequency` holding `available` points, or `None` for no history.
    #[must_use]
    pub fn window(&self, frequency: crate::Frequency, available: usize) -> Option<usize> {
        match (self.series, self.keep) {
            (SeriesMode::None, None) => None,
            (_, Some(keep)) => Some(keep.min(available)),
            (SeriesMode::Mini, None) => Some(frequency.default_history_window().min(available)),
            (SeriesMode::Full, None) => Some(available),
        }
    }
}

/// Global configuration for the `Radar` orchestrator.
#[derive(Debug, Clone, Serialize)]
pub struct RadarConfig {
    /// Provider order per indicator.
    pub priority: PriorityTable,
    /// Timeout for a single provider call.
    pub provider_timeout: Duration,
    /// Optional deadline for a whole report. Indicators still resolving when
    /// it elapses are reported unavailable with reason `timeout`.
    pub request_timeout: Option<Duration>,
    /// Default report shaping when a caller passes none.
    pub report: ReportOptions,
    /// Debt ratios whose latest year is older than this are reported unavailable.
    pub debt_max_age_years: u32,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            priority: PriorityTable::standard(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: Some(Duration::from_secs(20)),
            report: ReportOptions::default(),
            debt_max_age_years: 5,
        }
    }
}

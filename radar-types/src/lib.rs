//! Shared data model and configuration primitives for the country-radar workspace.
#![warn(missing_docs)]

mod attempt;
mod config;
mod country;
mod error;
mod indicator;
mod period;
/// Per-indicator provider ordering.
pub mod priority;
mod provider;
mod report;
mod series;

pub use attempt::{Attempt, FailureReason};
pub use config::{RadarConfig, ReportOptions, SeriesMode};
pub use country::Country;
pub use error::RadarError;
pub use indicator::{Frequency, Indicator};
pub use period::Period;
pub use priority::PriorityTable;
pub use provider::ProviderKey;
pub use report::{CountryReport, DebtReport, Point, Resolution, ResolvedIndicator};
pub use series::{Observation, Series};

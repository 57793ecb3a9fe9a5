//! Radar resolves macroeconomic indicators for a country across several
//! statistical providers.
//!
//! Overview
//! - Each indicator has an ordered provider list (`PriorityTable`). The
//!   orchestrator walks it front to back and keeps the first non-empty series.
//! - Providers that cannot report the indicator, or cannot map the country,
//!   are skipped without a call and recorded as such.
//! - Network, parse and timeout failures are recorded as attempts; the next
//!   provider is tried. They never fail the report.
//! - Indicators resolve concurrently and independently, so the report is the
//!   same whatever order indicators are requested in.
//! - The debt report is the same chain restricted to the debt ratio, with a
//!   recency guard.
//!
//! Key behaviors and trade-offs
//! - Priority encodes trust: a higher-priority provider with annual data beats
//!   a lower-priority one with monthly data. Timeliness is never used to
//!   reorder. Each resolution carries `period` and `frequency` so callers can
//!   judge recency themselves; `is_more_timely` compares two series.
//! - Observations dated after the reference year (current year, or the
//!   `as_of_year` of a debt report) are projections and are dropped before a
//!   series can win.
//! - Each provider call is bounded by `provider_timeout`; the whole report is
//!   bounded by `request_timeout`. When the deadline fires, indicators still
//!   in flight are reported unavailable with a `timeout` attempt.
//! - `UnknownCountry` is returned only when the name does not resolve or no
//!   registered provider can map the country. Otherwise the answer is a
//!   report, possibly with every indicator unavailable.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use radar::{Indicator, Radar};
//!
//! let radar = Radar::builder()
//!     .with_provider(imf)
//!     .with_provider(world_bank)
//!     .provider_timeout(std::time::Duration::from_secs(3))
//!     .build()?;
//!
//! let report = radar.country_report("Germany", &Indicator::ALL, None).await?;
//! let debt = radar.debt_report("France", None).await?;
//! ```
#![warn(missing_docs)]

mod assemble;
pub(crate) mod core;
mod resolve;

pub use core::{Radar, RadarBuilder};

// Re-export the data model for convenience.
pub use radar_core::{
    Attempt, Country, CountryRegistry, CountryReport, DebtReport, FailureReason, Frequency,
    Indicator, Period, Point, PriorityTable, Provider, ProviderKey, RadarConfig, RadarError,
    ReportOptions, Resolution, ResolvedIndicator, Series, SeriesMode,
};
pub use radar_core::normalize::is_more_timely;

//! Frequency normalisation.
//!
//! Providers report at their native frequency and in their own label formats.
//! These helpers turn raw labels into [`Period`]s, derive year-over-year rates
//! from level series, compress daily observations to month-end values and
//! compare series by timeliness. All functions are pure.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::{Period, RadarError, Series};

/// A raw time label from an upstream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLabel {
    /// Monthly, quarterly or annual period.
    Period(Period),
    /// A calendar day (`YYYY-MM-DD`).
    Day(NaiveDate),
}

/// Parse an upstream time label.
///
/// # Errors
/// Returns `InvalidArg` for anything that is neither a period nor a day.
pub fn parse_label(label: &str) -> Result<TimeLabel, RadarError> {
    let trimmed = label.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(TimeLabel::Day(day));
    }
    trimmed.parse().map(TimeLabel::Period)
}

/// Round to two decimals, the precision every derived rate is reported at.
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Year-over-year percentage change of a level series.
///
/// Each output point compares a period with the same period one year earlier
/// (12 months back for monthly data, 4 quarters back for quarterly data).
/// Points without a prior-year value, or with a zero prior-year value, are
/// dropped.
#[must_use]
pub fn yoy_percent(points: &[(Period, f64)]) -> Vec<(Period, f64)> {
    let by_period: HashMap<Period, f64> = points.iter().copied().collect();
    let mut out: Vec<(Period, f64)> = points
        .iter()
        .filter_map(|(period, value)| {
            let prev = *by_period.get(&period.year_ago())?;
            if prev == 0.0 || !prev.is_finite() || !value.is_finite() {
                return None;
            }
            Some((*period, round2((value / prev - 1.0) * 100.0)))
        })
        .collect();
    out.sort_by_key(|(p, _)| *p);
    out.dedup_by_key(|(p, _)| *p);
    out
}

/// Compress daily observations to one value per month: the last observation
/// on or before the month's final day.
#[must_use]
pub fn daily_to_monthly<I>(days: I) -> Vec<(Period, f64)>
where
    I: IntoIterator<Item = (NaiveDate, f64)>,
{
    let mut last: BTreeMap<(i32, u32), (NaiveDate, f64)> = BTreeMap::new();
    for (day, value) in days {
        let key = (day.year(), day.month());
        match last.get(&key) {
            Some((seen, _)) if *seen > day => {}
            _ => {
                last.insert(key, (day, value));
            }
        }
    }
    last.into_iter()
        .filter_map(|((year, month), (_, value))| {
            let month = u8::try_from(month).ok()?;
            Some((Period::month(year, month).ok()?, value))
        })
        .collect()
}

/// Collapse mixed labels to periods, compressing days to month-end values.
///
/// A response that mixes days and periods keeps the periods and adds the
/// compressed days only for months not already present.
#[must_use]
pub fn labels_to_periods(points: Vec<(TimeLabel, f64)>) -> Vec<(Period, f64)> {
    let mut periods: BTreeMap<Period, f64> = BTreeMap::new();
    let mut days: Vec<(NaiveDate, f64)> = Vec::new();
    for (label, value) in points {
        match label {
            TimeLabel::Period(p) => {
                periods.insert(p, value);
            }
            TimeLabel::Day(d) => days.push((d, value)),
        }
    }
    for (p, v) in daily_to_monthly(days) {
        periods.entry(p).or_insert(v);
    }
    periods.into_iter().collect()
}

/// True when `a` is more timely than `b`: its latest observation ends later,
/// or ends on the same day at a finer frequency. An empty series is never
/// more timely.
///
/// Timeliness is informational; it never overrides priority order.
#[must_use]
pub fn is_more_timely(a: &Series, b: &Series) -> bool {
    let end = |s: &Series| s.latest().and_then(|o| o.period.end_date());
    match (end(a), end(b)) {
        (Some(ea), Some(eb)) if ea != eb => ea > eb,
        (Some(_), Some(_)) => a.frequency().is_finer_than(b.frequency()),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// True when `period` is no more than `max_age_years` calendar years before
/// `as_of_year`.
#[must_use]
pub fn is_recent(period: Period, as_of_year: i32, max_age_years: u32) -> bool {
    i64::from(as_of_year) - i64::from(period.year()) <= i64::from(max_age_years)
}

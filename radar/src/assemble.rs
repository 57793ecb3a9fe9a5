//! Response assembly: winning series plus provenance into report entries.

use std::collections::BTreeMap;

use radar_core::{
    Attempt, Country, CountryReport, Indicator, Point, ReportOptions, Resolution,
    ResolvedIndicator, Series,
};

/// Turn a chain outcome into a report entry.
///
/// An empty or missing series is unavailable; the attempt list is carried
/// either way.
pub(crate) fn resolved(
    series: Option<&Series>,
    attempts: Vec<Attempt>,
    opts: &ReportOptions,
) -> ResolvedIndicator {
    let Some((series, latest)) = series.and_then(|s| s.latest().map(|o| (s, o))) else {
        return ResolvedIndicator::Unavailable {
            attempted: attempts,
        };
    };
    let history = opts
        .window(series.frequency(), series.len())
        .map(|n| {
            series
                .tail(n)
                .iter()
                .map(|o| Point {
                    period: o.period,
                    value: o.value,
                })
                .collect()
        });
    ResolvedIndicator::Available(Resolution {
        value: latest.value,
        period: latest.period,
        frequency: series.frequency(),
        provider: series.provider(),
        attempts,
        series: history,
    })
}

/// Collect per-indicator entries into a report in display order.
pub(crate) fn country_report<I>(country: Country, entries: I) -> CountryReport
where
    I: IntoIterator<Item = (Indicator, ResolvedIndicator)>,
{
    CountryReport {
        country,
        indicators: entries.into_iter().collect::<BTreeMap<_, _>>(),
    }
}

use std::collections::BTreeSet;

use chrono::Datelike;
use radar_core::normalize::is_recent;
use radar_core::{
    Attempt, Country, CountryReport, DebtReport, FailureReason, Indicator, RadarError,
    ReportOptions, ResolvedIndicator, Series,
};
use tokio::time::Instant;

use crate::Radar;
use crate::assemble;

/// Result of walking one indicator's provider order.
pub(crate) struct ChainOutcome {
    /// First non-empty series, if any provider supplied one.
    pub series: Option<Series>,
    /// Providers considered before the winner (or all of them), in order.
    pub attempts: Vec<Attempt>,
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

impl Radar {
    /// Walk the priority order for `indicator` until a provider returns a
    /// non-empty series.
    ///
    /// Static capability misses are recorded without a call. Failures,
    /// timeouts and empty answers are recorded and the next provider is
    /// tried. Observations dated after `as_of_year` are projections and are
    /// dropped; a series left with none counts as empty. The request deadline
    /// ends the chain.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar::resolve::chain",
            skip(self, country, deadline),
            fields(country = %country.iso3, indicator = %indicator),
        )
    )]
    pub(crate) async fn resolve_chain(
        &self,
        country: &Country,
        indicator: Indicator,
        as_of_year: i32,
        deadline: Option<Instant>,
    ) -> ChainOutcome {
        let mut attempts: Vec<Attempt> = Vec::new();

        for &key in self.cfg.priority.order(indicator) {
            let Some(provider) = self.provider(key) else {
                continue;
            };
            if !provider.supports(indicator) {
                attempts.push(Attempt::new(key, FailureReason::UnsupportedIndicator));
                continue;
            }
            if provider.country_code(country).is_none() {
                attempts.push(Attempt::new(key, FailureReason::UnsupportedCountry));
                continue;
            }

            let res = Self::provider_call_with_timeout(
                provider.name(),
                indicator,
                self.cfg.provider_timeout,
                deadline,
                provider.fetch(country, indicator),
            )
            .await;

            match res {
                Ok(mut series) => {
                    let _projected = series.drop_after_year(as_of_year);
                    if !series.is_empty() {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            provider = %key,
                            points = series.len(),
                            projected = _projected,
                            "resolved"
                        );
                        return ChainOutcome {
                            series: Some(series),
                            attempts,
                        };
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        provider = %key,
                        projected = _projected,
                        "empty series; falling back"
                    );
                    attempts.push(Attempt::new(key, FailureReason::Empty));
                }
                Err(e @ RadarError::RequestTimeout { .. }) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(provider = %key, "request deadline reached");
                    attempts.push(Attempt::new(key, FailureReason::from_error(&e)));
                    break;
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    if e.is_recoverable() {
                        tracing::debug!(provider = %key, error = %e, "provider failed");
                    } else {
                        tracing::warn!(provider = %key, error = %e, "provider misbehaved");
                    }
                    attempts.push(Attempt::new(key, FailureReason::from_error(&e)));
                }
            }
        }

        ChainOutcome {
            series: None,
            attempts,
        }
    }

    /// Resolve one indicator for an already-resolved country.
    pub async fn resolve_indicator(
        &self,
        country: &Country,
        indicator: Indicator,
        opts: Option<ReportOptions>,
    ) -> ResolvedIndicator {
        let opts = opts.unwrap_or(self.cfg.report);
        let outcome = self
            .resolve_chain(country, indicator, current_year(), self.request_deadline())
            .await;
        assemble::resolved(outcome.series.as_ref(), outcome.attempts, &opts)
    }

    /// Resolve `indicators` for the country named by `query`.
    ///
    /// Indicators resolve concurrently and independently; duplicates
    /// collapse and the report is keyed in fixed display order, so request
    /// order never changes the result. Provider failures never fail the
    /// report: an indicator no provider could supply is marked unavailable
    /// with its attempt list.
    ///
    /// # Errors
    /// Returns `UnknownCountry` when the name does not resolve or no
    /// registered provider can map the country.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar::resolve::country_report",
            skip(self, indicators, opts),
            fields(query = %query, requested = indicators.len()),
        )
    )]
    pub async fn country_report(
        &self,
        query: &str,
        indicators: &[Indicator],
        opts: Option<ReportOptions>,
    ) -> Result<CountryReport, RadarError> {
        let country = self.resolve_country(query)?;
        let opts = opts.unwrap_or(self.cfg.report);
        let deadline = self.request_deadline();
        let as_of_year = current_year();
        let wanted: BTreeSet<Indicator> = indicators.iter().copied().collect();

        let country_ref = &country;
        let opts_ref = &opts;
        let tasks = wanted.into_iter().map(|indicator| async move {
            let outcome = self
                .resolve_chain(country_ref, indicator, as_of_year, deadline)
                .await;
            (
                indicator,
                assemble::resolved(outcome.series.as_ref(), outcome.attempts, opts_ref),
            )
        });
        let entries = futures::future::join_all(tasks).await;

        Ok(assemble::country_report(country, entries))
    }

    /// Resolve the government debt ratio for the country named by `query`,
    /// judging recency against the current calendar year.
    ///
    /// # Errors
    /// Returns `UnknownCountry` as [`country_report`](Self::country_report) does.
    pub async fn debt_report(
        &self,
        query: &str,
        opts: Option<ReportOptions>,
    ) -> Result<DebtReport, RadarError> {
        self.debt_report_as_of(query, opts, current_year()).await
    }

    /// Debt ratio resolution with an explicit reference year.
    ///
    /// Uses the debt entry of the priority table. Observations after
    /// `as_of_year` are projections and never reported. A winning series
    /// whose latest year is more than `debt_max_age_years` before
    /// `as_of_year` is reported unavailable, with the winner recorded as
    /// `stale`.
    ///
    /// # Errors
    /// Returns `UnknownCountry` as [`country_report`](Self::country_report) does.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar::resolve::debt_report",
            skip(self, opts),
            fields(query = %query, as_of_year = as_of_year),
        )
    )]
    pub async fn debt_report_as_of(
        &self,
        query: &str,
        opts: Option<ReportOptions>,
        as_of_year: i32,
    ) -> Result<DebtReport, RadarError> {
        let country = self.resolve_country(query)?;
        let opts = opts.unwrap_or(self.cfg.report);
        let ChainOutcome {
            series,
            mut attempts,
        } = self
            .resolve_chain(
                &country,
                Indicator::GovernmentDebtRatio,
                as_of_year,
                self.request_deadline(),
            )
            .await;

        let fresh = match series {
            Some(s) => match s.latest().map(|o| o.period) {
                Some(latest) if !is_recent(latest, as_of_year, self.cfg.debt_max_age_years) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(provider = %s.provider(), %latest, "debt ratio is stale");
                    attempts.push(Attempt::new(s.provider(), FailureReason::Stale { latest }));
                    None
                }
                _ => Some(s),
            },
            None => None,
        };

        let debt = assemble::resolved(fresh.as_ref(), attempts, &opts);
        Ok(DebtReport { country, debt })
    }
}

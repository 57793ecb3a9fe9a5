use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Frequency, Indicator, Period, ProviderKey, RadarError};

/// One data point for an (indicator, country) pair from one provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Indicator kind.
    pub indicator: Indicator,
    /// ISO3 code of the country.
    pub country: String,
    /// Calendar point; its encoding fixes the frequency.
    pub period: Period,
    /// Observed value.
    pub value: f64,
    /// Provider that reported the value.
    pub provider: ProviderKey,
}

impl Observation {
    /// Frequency implied by the period encoding.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.period.frequency()
    }
}

/// Period-ordered observations for one (indicator, country) pair sharing a
/// single frequency and a single provider.
///
/// An empty series is a valid provider answer meaning "not tracked here";
/// it is distinct from a transport or parse failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    indicator: Indicator,
    country: String,
    provider: ProviderKey,
    frequency: Frequency,
    observations: Vec<Observation>,
}

impl Series {
    /// Build a series from raw `(period, value)` points.
    ///
    /// Points are sorted by period; a repeated period keeps the last value seen.
    /// Non-finite values are dropped.
    ///
    /// # Errors
    /// Returns `Data` when a point's period does not match `frequency`.
    pub fn new<I>(
        indicator: Indicator,
        country: impl Into<String>,
        provider: ProviderKey,
        frequency: Frequency,
        points: I,
    ) -> Result<Self, RadarError>
    where
        I: IntoIterator<Item = (Period, f64)>,
    {
        let country = country.into();
        let mut by_period: BTreeMap<Period, f64> = BTreeMap::new();
        for (period, value) in points {
            if period.frequency() != frequency {
                return Err(RadarError::Data(format!(
                    "{provider}: period {period} is not {frequency}"
                )));
            }
            if value.is_finite() {
                by_period.insert(period, value);
            }
        }
        let observations = by_period
            .into_iter()
            .map(|(period, value)| Observation {
                indicator,
                country: country.clone(),
                period,
                value,
                provider,
            })
            .collect();
        Ok(Self {
            indicator,
            country,
            provider,
            frequency,
            observations,
        })
    }

    /// A series with no observations.
    pub fn empty(
        indicator: Indicator,
        country: impl Into<String>,
        provider: ProviderKey,
        frequency: Frequency,
    ) -> Self {
        Self {
            indicator,
            country: country.into(),
            provider,
            frequency,
            observations: Vec::new(),
        }
    }

    /// Indicator kind.
    #[must_use]
    pub const fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// ISO3 code of the country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Provider that produced the series.
    #[must_use]
    pub const fn provider(&self) -> ProviderKey {
        self.provider
    }

    /// Shared frequency of every observation.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Observations in ascending period order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when the provider reported nothing usable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Most recent observation.
    #[must_use]
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// The trailing `n` observations.
    #[must_use]
    pub fn tail(&self, n: usize) -> &[Observation] {
        let start = self.observations.len().saturating_sub(n);
        &self.observations[start..]
    }

    /// Drop everything but the trailing `n` observations.
    pub fn trim_to_last(&mut self, n: usize) {
        let start = self.observations.len().saturating_sub(n);
        self.observations.drain(..start);
    }

    /// Drop observations dated after `year` (projections). Returns how many
    /// were removed.
    pub fn drop_after_year(&mut self, year: i32) -> usize {
        let keep = self.observations.partition_point(|o| o.period.year() <= year);
        self.observations.drain(keep..).count()
    }
}

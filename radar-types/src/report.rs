//! Report envelopes produced by the orchestrator.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::{Attempt, Country, Frequency, Indicator, Period, ProviderKey};

/// One history point in a resolved indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Calendar point.
    pub period: Period,
    /// Value.
    pub value: f64,
}

/// A successfully resolved indicator with its provenance.
///
/// `period` and `frequency` are the recency surface: a winner may be older or
/// coarser than data a lower-priority provider holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// Latest value.
    pub value: f64,
    /// Period of the latest value.
    pub period: Period,
    /// Native frequency of the winning series.
    pub frequency: Frequency,
    /// Winning provider: the first in priority order with a non-empty series.
    #[serde(rename = "provider_source")]
    pub provider: ProviderKey,
    /// Higher-priority providers that were considered first and why they lost.
    #[serde(skip_serializing_if = "Vec::is_empty", rename = "attempted")]
    pub attempts: Vec<Attempt>,
    /// History window, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<Point>>,
}

/// Outcome for one (country, indicator) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedIndicator {
    /// A provider supplied data.
    Available(Resolution),
    /// Every provider in the order was exhausted.
    Unavailable {
        /// Every provider considered, in priority order.
        attempted: Vec<Attempt>,
    },
}

impl ResolvedIndicator {
    /// True when a provider supplied data.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The resolution when available.
    #[must_use]
    pub const fn resolution(&self) -> Option<&Resolution> {
        match self {
            Self::Available(r) => Some(r),
            Self::Unavailable { .. } => None,
        }
    }

    /// Winning provider, if any.
    #[must_use]
    pub fn provider(&self) -> Option<ProviderKey> {
        self.resolution().map(|r| r.provider)
    }

    /// Providers that did not win, in the order they were considered.
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            Self::Available(r) => &r.attempts,
            Self::Unavailable { attempted } => attempted,
        }
    }
}

impl Serialize for ResolvedIndicator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Available(r) => r.serialize(serializer),
            Self::Unavailable { attempted } => {
                let mut st = serializer.serialize_struct("Unavailable", 2)?;
                st.serialize_field("unavailable", &true)?;
                st.serialize_field("attempted", attempted)?;
                st.end()
            }
        }
    }
}

/// Every requested indicator for one country, in fixed display order.
///
/// Serialises as a JSON object keyed by indicator wire name.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryReport {
    /// Country the report was resolved for.
    pub country: Country,
    /// One entry per requested indicator.
    pub indicators: BTreeMap<Indicator, ResolvedIndicator>,
}

impl CountryReport {
    /// Entry for one indicator.
    #[must_use]
    pub fn get(&self, indicator: Indicator) -> Option<&ResolvedIndicator> {
        self.indicators.get(&indicator)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, &ResolvedIndicator)> {
        self.indicators.iter().map(|(k, v)| (*k, v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// True when no indicator was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Indicators marked unavailable.
    pub fn unavailable(&self) -> impl Iterator<Item = Indicator> + '_ {
        self.iter()
            .filter(|(_, r)| !r.is_available())
            .map(|(i, _)| i)
    }
}

impl Serialize for CountryReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.indicators.len()))?;
        for (indicator, resolved) in &self.indicators {
            map.serialize_entry(indicator.as_str(), resolved)?;
        }
        map.end()
    }
}

/// Debt-ratio-only report.
///
/// Serialises as the single resolved block.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtReport {
    /// Country the report was resolved for.
    pub country: Country,
    /// Government debt ratio outcome.
    pub debt: ResolvedIndicator,
}

impl Serialize for DebtReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.debt.serialize(serializer)
    }
}

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RadarError;

/// Macroeconomic indicator kinds reported by the engine.
///
/// Declaration order is the fixed display order used by reports, and the
/// derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    /// Consumer price inflation, percent year over year.
    #[serde(rename = "cpi_yoy")]
    CpiInflation,
    /// Exchange rate, local currency units per USD.
    #[serde(rename = "fx_rate_usd")]
    ExchangeRate,
    /// Total international reserves, USD.
    #[serde(rename = "reserves_usd")]
    Reserves,
    /// Unemployment rate, percent of the labour force.
    #[serde(rename = "unemployment_rate")]
    UnemploymentRate,
    /// Real GDP growth, percent year over year.
    #[serde(rename = "gdp_growth")]
    GdpGrowth,
    /// Central bank policy rate, percent.
    #[serde(rename = "policy_rate")]
    PolicyRate,
    /// General government gross debt, percent of GDP.
    #[serde(rename = "debt_to_gdp")]
    GovernmentDebtRatio,
    /// Current account balance, percent of GDP.
    #[serde(rename = "current_account_balance_pct_gdp")]
    CurrentAccountBalance,
    /// Worldwide Governance Indicators government effectiveness estimate.
    #[serde(rename = "government_effectiveness")]
    GovernmentEffectiveness,
}

impl Indicator {
    /// Every indicator, in display order.
    pub const ALL: [Self; 9] = [
        Self::CpiInflation,
        Self::ExchangeRate,
        Self::Reserves,
        Self::UnemploymentRate,
        Self::GdpGrowth,
        Self::PolicyRate,
        Self::GovernmentDebtRatio,
        Self::CurrentAccountBalance,
        Self::GovernmentEffectiveness,
    ];

    /// Stable wire name, used as the report key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CpiInflation => "cpi_yoy",
            Self::ExchangeRate => "fx_rate_usd",
            Self::Reserves => "reserves_usd",
            Self::UnemploymentRate => "unemployment_rate",
            Self::GdpGrowth => "gdp_growth",
            Self::PolicyRate => "policy_rate",
            Self::GovernmentDebtRatio => "debt_to_gdp",
            Self::CurrentAccountBalance => "current_account_balance_pct_gdp",
            Self::GovernmentEffectiveness => "government_effectiveness",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RadarError::InvalidArg(format!("unknown indicator: {needle}")))
    }
}

/// Native reporting granularity of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// One observation per calendar month.
    Monthly,
    /// One observation per calendar quarter.
    Quarterly,
    /// One observation per calendar year.
    Annual,
}

impl Frequency {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }

    /// Observations per year.
    #[must_use]
    pub const fn periods_per_year(self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Annual => 1,
        }
    }

    /// True when `self` is a finer granularity than `other`.
    #[must_use]
    pub const fn is_finer_than(self, other: Self) -> bool {
        self.periods_per_year() > other.periods_per_year()
    }

    /// Trailing history window used by the compact series view.
    #[must_use]
    pub const fn default_history_window(self) -> usize {
        match self {
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Annual => 20,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

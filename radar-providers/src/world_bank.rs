use std::sync::Arc;

use async_trait::async_trait;
use radar_core::provider::ensure_capable;
use radar_core::{Country, Frequency, Indicator, Period, Provider, ProviderKey, RadarError, Series};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::http::{HttpFetch, endpoint, parse_base};
use crate::{build_series, json_number};

/// Annual observations kept per series.
pub const MAX_YEARS: usize = 20;

/// World Bank World Development Indicators.
///
/// Global coverage by ISO3, annual only. The policy rate is not published
/// here, so it is declared unsupported and skipped without a call.
pub struct WorldBankProvider {
    http: Arc<dyn HttpFetch>,
    base: Url,
}

impl WorldBankProvider {
    /// Static provider key for priority configuration.
    pub const KEY: ProviderKey = ProviderKey::WORLD_BANK;

    /// Public API base.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.worldbank.org/v2";

    /// Build against the public endpoint.
    ///
    /// # Errors
    /// Returns `InvalidArg` only if the built-in URL is rejected.
    pub fn new(http: Arc<dyn HttpFetch>) -> Result<Self, RadarError> {
        Self::with_base_url(http, Self::DEFAULT_BASE_URL)
    }

    /// Build against a custom base URL.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `base` is not a usable base URL.
    pub fn with_base_url(http: Arc<dyn HttpFetch>, base: &str) -> Result<Self, RadarError> {
        Ok(Self {
            http,
            base: parse_base(Self::KEY.as_str(), base)?,
        })
    }

    /// WDI indicator code for `indicator`.
    #[must_use]
    pub const fn indicator_code(indicator: Indicator) -> Option<&'static str> {
        match indicator {
            Indicator::CpiInflation => Some("FP.CPI.TOTL.ZG"),
            Indicator::ExchangeRate => Some("PA.NUS.FCRF"),
            Indicator::Reserves => Some("FI.RES.TOTL.CD"),
            Indicator::UnemploymentRate => Some("SL.UEM.TOTL.ZS"),
            Indicator::GdpGrowth => Some("NY.GDP.MKTP.KD.ZG"),
            Indicator::GovernmentDebtRatio => Some("GC.DOD.TOTL.GD.ZS"),
            Indicator::CurrentAccountBalance => Some("BN.CAB.XOKA.GD.ZS"),
            Indicator::GovernmentEffectiveness => Some("GE.EST"),
            Indicator::PolicyRate => None,
        }
    }
}

#[derive(Deserialize)]
struct Row {
    date: String,
    #[serde(default)]
    value: Value,
}

/// Extract annual points from a `[meta, rows]` response.
///
/// A null or missing rows element means no data. An error envelope
/// (`[{"message": [...]}]`) is a parse failure.
pub(crate) fn parse_wdi(body: Value) -> Result<Vec<(Period, f64)>, RadarError> {
    let provider = WorldBankProvider::KEY.as_str();
    let Value::Array(mut parts) = body else {
        return Err(RadarError::parse(provider, "expected a top-level array"));
    };
    if let Some(message) = parts.first().and_then(|meta| meta.get("message")) {
        return Err(RadarError::parse(provider, format!("error envelope: {message}")));
    }
    let rows = match parts.get_mut(1).map(Value::take) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(rows) => rows,
    };
    let rows: Vec<Row> =
        serde_json::from_value(rows).map_err(|e| RadarError::parse(provider, e.to_string()))?;

    let mut points = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(value) = json_number(&row.value) else {
            continue;
        };
        let year: i32 = row
            .date
            .trim()
            .parse()
            .map_err(|_| RadarError::parse(provider, format!("bad year {}", row.date)))?;
        points.push((Period::Year(year), value));
    }
    Ok(points)
}

#[async_trait]
impl Provider for WorldBankProvider {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "World Bank"
    }

    fn native_frequency(&self, indicator: Indicator) -> Option<Frequency> {
        Self::indicator_code(indicator).map(|_| Frequency::Annual)
    }

    fn country_code(&self, country: &Country) -> Option<String> {
        Some(country.iso3.clone())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar_providers::world_bank::fetch",
            skip(self, country),
            fields(country = %country.iso3, indicator = %indicator),
        )
    )]
    async fn fetch(&self, country: &Country, indicator: Indicator) -> Result<Series, RadarError> {
        let (iso3, frequency) = ensure_capable(self, country, indicator)?;
        let code = Self::indicator_code(indicator)
            .ok_or_else(|| RadarError::unsupported_indicator(self.name(), indicator.as_str()))?;
        let url = endpoint(
            &self.base,
            &["country", iso3.as_str(), "indicator", code],
            &[("format", "json"), ("per_page", "200")],
        )?;
        let body = self.http.get_json(self.name(), url).await?;
        let mut series = build_series(Self::KEY, country, indicator, frequency, parse_wdi(body)?)?;
        series.trim_to_last(MAX_YEARS);
        Ok(series)
    }
}

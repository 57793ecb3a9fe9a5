use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use radar_core::country::is_eu_eea_uk;
use radar_core::provider::ensure_capable;
use radar_core::{Country, Frequency, Indicator, Period, Provider, ProviderKey, RadarError, Series};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::http::{HttpFetch, endpoint, parse_base};
use crate::{build_series, json_number};

/// Eurostat dissemination API (JSON-stat 2.0).
///
/// Filters pin every dimension except `time`, so each response carries a
/// single series. Coverage is limited to EU, EEA and UK members.
pub struct EurostatProvider {
    http: Arc<dyn HttpFetch>,
    base: Url,
}

impl EurostatProvider {
    /// Static provider key for priority configuration.
    pub const KEY: ProviderKey = ProviderKey::EUROSTAT;

    /// Public dissemination API base.
    pub const DEFAULT_BASE_URL: &'static str =
        "https://data-api.ec.europa.eu/api/v2/statistics/1.0/data";

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

    fn dataset(indicator: Indicator) -> Option<(&'static str, Filters)> {
        match indicator {
            Indicator::CpiInflation => Some(("prc_hicp_manr", HICP_FILTERS)),
            Indicator::UnemploymentRate => Some(("une_rt_m", UNEMPLOYMENT_FILTERS)),
            Indicator::GovernmentDebtRatio => Some(("gov_10dd_edpt1", DEBT_FILTERS)),
            _ => None,
        }
    }
}

type Filters = &'static [(&'static str, &'static str)];

const HICP_FILTERS: Filters = &[("coicop", "CP00")];
const UNEMPLOYMENT_FILTERS: Filters = &[
    ("s_adj", "SA"),
    ("sex", "T"),
    ("age", "Y15-74"),
    ("unit", "PC_ACT"),
];
const DEBT_FILTERS: Filters = &[("sector", "S13"), ("na_item", "GD"), ("unit", "PC_GDP")];

/// Eurostat's own geo code: ISO2 except Greece (`EL`) and the UK (`UK`).
fn geo_code(iso2: &str) -> &str {
    match iso2 {
        "GR" => "EL",
        "GB" => "UK",
        other => other,
    }
}

#[derive(Deserialize)]
struct Dataset {
    #[serde(default)]
    id: Vec<String>,
    #[serde(default)]
    size: Vec<usize>,
    #[serde(default)]
    value: Option<Value>,
    dimension: HashMap<String, Dimension>,
}

#[derive(Deserialize)]
struct Dimension {
    #[serde(default)]
    category: Category,
}

#[derive(Deserialize, Default)]
struct Category {
    #[serde(default)]
    index: HashMap<String, usize>,
}

/// Extract `(period, value)` points from a JSON-stat dataset.
///
/// `value` may be a sparse object keyed by flat observation index or a dense
/// array. A dataset without values is empty, not malformed.
pub(crate) fn parse_jsonstat(body: Value) -> Result<Vec<(Period, f64)>, RadarError> {
    let provider = EurostatProvider::KEY.as_str();
    let ds: Dataset =
        serde_json::from_value(body).map_err(|e| RadarError::parse(provider, e.to_string()))?;
    let time = ds
        .dimension
        .get("time")
        .or_else(|| ds.dimension.get("TIME"))
        .ok_or_else(|| RadarError::parse(provider, "dataset has no time dimension"))?;

    // Flat index = time index * product of the sizes of later dimensions.
    let stride: usize = ds
        .id
        .iter()
        .position(|d| d.eq_ignore_ascii_case("time"))
        .and_then(|pos| ds.size.get(pos + 1..))
        .map_or(1, |rest| rest.iter().product());

    let by_flat: HashMap<usize, &str> = time
        .category
        .index
        .iter()
        .map(|(label, idx)| (idx * stride, label.as_str()))
        .collect();

    let mut raw: Vec<(usize, &Value)> = Vec::new();
    match &ds.value {
        None | Some(Value::Null) => {}
        Some(Value::Object(map)) => {
            for (k, v) in map {
                let idx = k
                    .parse::<usize>()
                    .map_err(|_| RadarError::parse(provider, format!("bad observation key {k}")))?;
                raw.push((idx, v));
            }
        }
        Some(Value::Array(values)) => raw.extend(values.iter().enumerate()),
        Some(other) => {
            return Err(RadarError::parse(
                provider,
                format!("unexpected value block: {other}"),
            ));
        }
    }

    let mut points = Vec::with_capacity(raw.len());
    for (idx, v) in raw {
        let (Some(label), Some(value)) = (by_flat.get(&idx), json_number(v)) else {
            continue;
        };
        let period: Period = label
            .parse()
            .map_err(|_| RadarError::parse(provider, format!("bad time label {label}")))?;
        points.push((period, value));
    }
    points.sort_by_key(|(p, _)| *p);
    Ok(points)
}

#[async_trait]
impl Provider for EurostatProvider {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Eurostat"
    }

    fn native_frequency(&self, indicator: Indicator) -> Option<Frequency> {
        match indicator {
            Indicator::CpiInflation | Indicator::UnemploymentRate => Some(Frequency::Monthly),
            Indicator::GovernmentDebtRatio => Some(Frequency::Annual),
            _ => None,
        }
    }

    fn country_code(&self, country: &Country) -> Option<String> {
        is_eu_eea_uk(&country.iso2).then(|| geo_code(&country.iso2).to_string())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar_providers::eurostat::fetch",
            skip(self, country),
            fields(country = %country.iso3, indicator = %indicator),
        )
    )]
    async fn fetch(&self, country: &Country, indicator: Indicator) -> Result<Series, RadarError> {
        let (geo, frequency) = ensure_capable(self, country, indicator)?;
        let (dataset, filters) = Self::dataset(indicator)
            .ok_or_else(|| RadarError::unsupported_indicator(self.name(), indicator.as_str()))?;
        let mut query: Vec<(&str, &str)> =
            vec![("format", "JSON"), ("lang", "EN"), ("geo", geo.as_str())];
        query.extend_from_slice(filters);
        let url = endpoint(&self.base, &[dataset], &query)?;
        let body = self.http.get_json(self.name(), url).await?;
        build_series(Self::KEY, country, indicator, frequency, parse_jsonstat(body)?)
    }
}

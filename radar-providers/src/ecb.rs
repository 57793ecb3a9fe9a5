use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use radar_core::country::is_euro_area;
use radar_core::normalize::{TimeLabel, labels_to_periods, parse_label};
use radar_core::provider::ensure_capable;
use radar_core::{Country, Frequency, Indicator, Period, Provider, ProviderKey, RadarError, Series};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::http::{HttpFetch, endpoint, parse_base};
use crate::{build_series, json_number};

const MRO_SERIES: &str = "M.U2.EUR.4F.KR.MRR_FR.LEV";
const EURO_AREA_CODE: &str = "U2";

/// ECB data portal: the main refinancing operations rate.
///
/// One euro-area series answers for every member state. Daily labels are
/// compressed to the last value of each month.
pub struct EcbProvider {
    http: Arc<dyn HttpFetch>,
    base: Url,
}

impl EcbProvider {
    /// Static provider key for priority configuration.
    pub const KEY: ProviderKey = ProviderKey::ECB;

    /// Public data portal base.
    pub const DEFAULT_BASE_URL: &'static str = "https://data-api.ecb.europa.eu/service/data";

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
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Message {
    #[serde(default)]
    data_sets: Vec<DataSet>,
    structure: Structure,
}

#[derive(Deserialize)]
struct DataSet {
    #[serde(default)]
    series: HashMap<String, SeriesBlock>,
}

#[derive(Deserialize)]
struct SeriesBlock {
    #[serde(default)]
    observations: HashMap<String, Vec<Value>>,
}

#[derive(Deserialize)]
struct Structure {
    dimensions: Dimensions,
}

#[derive(Deserialize)]
struct Dimensions {
    #[serde(default)]
    observation: Vec<ObservationDimension>,
}

#[derive(Deserialize)]
struct ObservationDimension {
    #[serde(default)]
    values: Vec<DimensionValue>,
}

#[derive(Deserialize)]
struct DimensionValue {
    id: String,
}

/// Extract monthly points from an SDMX-JSON 1.0 message.
pub(crate) fn parse_sdmx(body: Value) -> Result<Vec<(Period, f64)>, RadarError> {
    let provider = EcbProvider::KEY.as_str();
    let msg: Message =
        serde_json::from_value(body).map_err(|e| RadarError::parse(provider, e.to_string()))?;
    let Some(data_set) = msg.data_sets.into_iter().next() else {
        return Ok(Vec::new());
    };
    let labels: &[DimensionValue] = msg
        .structure
        .dimensions
        .observation
        .first()
        .map_or(&[] as &[DimensionValue], |d| d.values.as_slice());

    let mut raw: Vec<(TimeLabel, f64)> = Vec::new();
    for block in data_set.series.into_values() {
        for (key, obs) in block.observations {
            let idx: usize = key
                .parse()
                .map_err(|_| RadarError::parse(provider, format!("bad observation key {key}")))?;
            let Some(value) = obs.first().and_then(json_number) else {
                continue;
            };
            let label = labels.get(idx).ok_or_else(|| {
                RadarError::parse(provider, format!("observation {idx} has no time label"))
            })?;
            let label = parse_label(&label.id)
                .map_err(|_| RadarError::parse(provider, format!("bad time label {}", label.id)))?;
            raw.push((label, value));
        }
    }
    Ok(labels_to_periods(raw))
}

#[async_trait]
impl Provider for EcbProvider {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "European Central Bank"
    }

    fn native_frequency(&self, indicator: Indicator) -> Option<Frequency> {
        (indicator == Indicator::PolicyRate).then_some(Frequency::Monthly)
    }

    fn country_code(&self, country: &Country) -> Option<String> {
        is_euro_area(&country.iso2).then(|| EURO_AREA_CODE.to_string())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar_providers::ecb::fetch",
            skip(self, country),
            fields(country = %country.iso3, indicator = %indicator),
        )
    )]
    async fn fetch(&self, country: &Country, indicator: Indicator) -> Result<Series, RadarError> {
        let (_, frequency) = ensure_capable(self, country, indicator)?;
        let url = endpoint(
            &self.base,
            &["FM", MRO_SERIES],
            &[("format", "jsondata"), ("startPeriod", "1999-01")],
        )?;
        let body = self.http.get_json(self.name(), url).await?;
        build_series(Self::KEY, country, indicator, frequency, parse_sdmx(body)?)
    }
}

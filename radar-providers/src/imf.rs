use std::sync::Arc;

use async_trait::async_trait;
use radar_core::normalize::yoy_percent;
use radar_core::provider::ensure_capable;
use radar_core::{Country, Frequency, Indicator, Period, Provider, ProviderKey, RadarError, Series};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::http::{HttpFetch, endpoint, parse_base};
use crate::{build_series, json_number};

/// What to request for one indicator and how to transform it.
struct SeriesSpec {
    dataset: &'static str,
    key: String,
    yoy: bool,
}

/// IMF International Financial Statistics via the DBnomics mirror.
///
/// CPI and real GDP arrive as levels and are converted to year-over-year
/// percentages; everything else is passed through at its native frequency.
/// The debt ratio comes from the World Economic Outlook.
pub struct ImfProvider {
    http: Arc<dyn HttpFetch>,
    base: Url,
}

impl ImfProvider {
    /// Static provider key for priority configuration.
    pub const KEY: ProviderKey = ProviderKey::IMF_IFS;

    /// Public DBnomics endpoint for IMF datasets.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.db.nomics.world/v22/series/IMF";

    /// Build against the public endpoint.
    ///
    /// # Errors
    /// Never fails for the built-in URL; shares the signature of
    /// [`with_base_url`](Self::with_base_url).
    pub fn new(http: Arc<dyn HttpFetch>) -> Result<Self, RadarError> {
        Self::with_base_url(http, Self::DEFAULT_BASE_URL)
    }

    /// Build against a custom base URL (mirrors, test servers).
    ///
    /// # Errors
    /// Returns `InvalidArg` when `base` is not a usable base URL.
    pub fn with_base_url(http: Arc<dyn HttpFetch>, base: &str) -> Result<Self, RadarError> {
        Ok(Self {
            http,
            base: parse_base(Self::KEY.as_str(), base)?,
        })
    }

    fn series_spec(indicator: Indicator, country: &Country) -> Option<SeriesSpec> {
        let iso2 = &country.iso2;
        let ifs = |code: &str| SeriesSpec {
            dataset: "IFS",
            key: format!("M.{iso2}.{code}"),
            yoy: false,
        };
        Some(match indicator {
            Indicator::CpiInflation => SeriesSpec {
                dataset: "CPI",
                key: format!("M.{iso2}.PCPI_IX"),
                yoy: true,
            },
            Indicator::ExchangeRate => ifs("ENDE_XDC_USD_RATE"),
            Indicator::Reserves => ifs("RAXG_USD"),
            Indicator::UnemploymentRate => ifs("LUR_PT"),
            Indicator::PolicyRate => ifs("FPOLM_PA"),
            Indicator::GdpGrowth => SeriesSpec {
                dataset: "IFS",
                key: format!("Q.{iso2}.NGDP_R_SA_XDC"),
                yoy: true,
            },
            Indicator::GovernmentDebtRatio => SeriesSpec {
                dataset: "WEO:latest",
                key: format!("{}.GGXWDG_NGDP.pcent_gdp", country.iso3),
                yoy: false,
            },
            Indicator::CurrentAccountBalance | Indicator::GovernmentEffectiveness => return None,
        })
    }
}

#[derive(Deserialize)]
struct Envelope {
    series: Docs,
}

#[derive(Deserialize)]
struct Docs {
    #[serde(default)]
    docs: Vec<Doc>,
}

#[derive(Deserialize)]
struct Doc {
    #[serde(default)]
    period: Vec<String>,
    #[serde(default)]
    value: Vec<Value>,
}

/// Extract `(period, value)` points from a DBnomics series response.
/// Missing values (`"NA"`, null) are skipped; an empty `docs` array yields
/// no points.
pub(crate) fn parse_dbnomics(body: Value) -> Result<Vec<(Period, f64)>, RadarError> {
    let provider = ImfProvider::KEY.as_str();
    let envelope: Envelope =
        serde_json::from_value(body).map_err(|e| RadarError::parse(provider, e.to_string()))?;
    let Some(doc) = envelope.series.docs.into_iter().next() else {
        return Ok(Vec::new());
    };
    if doc.period.len() != doc.value.len() {
        return Err(RadarError::parse(
            provider,
            format!(
                "{} periods but {} values",
                doc.period.len(),
                doc.value.len()
            ),
        ));
    }
    let mut points = Vec::with_capacity(doc.period.len());
    for (label, raw) in doc.period.iter().zip(&doc.value) {
        let Some(value) = json_number(raw) else {
            continue;
        };
        let period: Period = label
            .parse()
            .map_err(|_| RadarError::parse(provider, format!("bad period label {label}")))?;
        points.push((period, value));
    }
    Ok(points)
}

#[async_trait]
impl Provider for ImfProvider {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "International Monetary Fund"
    }

    fn native_frequency(&self, indicator: Indicator) -> Option<Frequency> {
        match indicator {
            Indicator::CpiInflation
            | Indicator::ExchangeRate
            | Indicator::Reserves
            | Indicator::UnemploymentRate
            | Indicator::PolicyRate => Some(Frequency::Monthly),
            Indicator::GdpGrowth => Some(Frequency::Quarterly),
            Indicator::GovernmentDebtRatio => Some(Frequency::Annual),
            Indicator::CurrentAccountBalance | Indicator::GovernmentEffectiveness => None,
        }
    }

    fn country_code(&self, country: &Country) -> Option<String> {
        Some(country.iso2.clone())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar_providers::imf::fetch",
            skip(self, country),
            fields(country = %country.iso3, indicator = %indicator),
        )
    )]
    async fn fetch(&self, country: &Country, indicator: Indicator) -> Result<Series, RadarError> {
        let (_, frequency) = ensure_capable(self, country, indicator)?;
        let spec = Self::series_spec(indicator, country)
            .ok_or_else(|| RadarError::unsupported_indicator(self.name(), indicator.as_str()))?;
        let url = endpoint(
            &self.base,
            &[spec.dataset, spec.key.as_str()],
            &[("observations", "1"), ("format", "json")],
        )?;
        let body = self.http.get_json(self.name(), url).await?;
        let mut points = parse_dbnomics(body)?;
        if spec.yoy {
            points = yoy_percent(&points);
        }
        build_series(Self::KEY, country, indicator, frequency, points)
    }
}

//! radar-providers
//!
//! Upstream adapters implementing `radar_core::Provider`:
//!
//! - [`ImfProvider`]: IMF International Financial Statistics (and the WEO
//!   debt ratio) through the DBnomics mirror.
//! - [`EurostatProvider`]: HICP, unemployment and the general government
//!   debt ratio for EU, EEA and UK members.
//! - [`EcbProvider`]: the main refinancing rate for euro-area members.
//! - [`WorldBankProvider`]: World Development Indicators, annual, global.
//!
//! Every adapter issues at most one GET per `fetch` through an injectable
//! [`HttpFetch`] transport, so tests can answer with canned JSON.
#![warn(missing_docs)]

/// ECB data portal adapter.
pub mod ecb;
/// Eurostat dissemination API adapter.
pub mod eurostat;
/// JSON transport shared by all adapters.
pub mod http;
/// IMF (DBnomics) adapter.
pub mod imf;
/// World Bank WDI adapter.
pub mod world_bank;

use std::sync::Arc;

use radar_core::{Country, Frequency, Indicator, Period, Provider, ProviderKey, RadarError, Series};

pub use ecb::EcbProvider;
pub use eurostat::EurostatProvider;
pub use http::{HttpFetch, ReqwestFetch};
pub use imf::ImfProvider;
pub use world_bank::WorldBankProvider;

/// Base URL overrides for the standard adapter set. `None` keeps the public
/// endpoint.
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    /// DBnomics base for the IMF adapter.
    pub imf: Option<String>,
    /// Eurostat dissemination API base.
    pub eurostat: Option<String>,
    /// ECB data portal base.
    pub ecb: Option<String>,
    /// World Bank API base.
    pub world_bank: Option<String>,
}

/// Build the four standard adapters over one shared transport.
///
/// # Errors
/// Returns `InvalidArg` when an override is not a usable base URL.
pub fn standard_providers(
    http: &Arc<dyn HttpFetch>,
    endpoints: &Endpoints,
) -> Result<Vec<Arc<dyn Provider>>, RadarError> {
    let base = |custom: &Option<String>, default: &'static str| {
        custom.clone().unwrap_or_else(|| default.to_string())
    };
    Ok(vec![
        Arc::new(ImfProvider::with_base_url(
            Arc::clone(http),
            &base(&endpoints.imf, ImfProvider::DEFAULT_BASE_URL),
        )?),
        Arc::new(EurostatProvider::with_base_url(
            Arc::clone(http),
            &base(&endpoints.eurostat, EurostatProvider::DEFAULT_BASE_URL),
        )?),
        Arc::new(EcbProvider::with_base_url(
            Arc::clone(http),
            &base(&endpoints.ecb, EcbProvider::DEFAULT_BASE_URL),
        )?),
        Arc::new(WorldBankProvider::with_base_url(
            Arc::clone(http),
            &base(&endpoints.world_bank, WorldBankProvider::DEFAULT_BASE_URL),
        )?),
    ])
}

/// Wrap parsed points into a series, reporting frequency mismatches as a
/// parse failure of `provider`.
pub(crate) fn build_series(
    provider: ProviderKey,
    country: &Country,
    indicator: Indicator,
    frequency: Frequency,
    points: Vec<(Period, f64)>,
) -> Result<Series, RadarError> {
    Series::new(indicator, &country.iso3, provider, frequency, points).map_err(|e| match e {
        RadarError::Data(msg) => RadarError::parse(provider.as_str(), msg),
        other => other,
    })
}

/// Parse a JSON number or numeric string; `"NA"`, empty strings and nulls are
/// missing values.
pub(crate) fn json_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

use async_trait::async_trait;

use crate::{Country, Frequency, Indicator, RadarError, Series};
pub use radar_types::ProviderKey;

/// One upstream statistical source.
///
/// Static capability methods (`native_frequency`, `supports`, `country_code`)
/// must be answerable without I/O; the orchestrator consults them to skip a
/// provider before issuing any call.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A stable identifier for priority tables (e.g. "imf-ifs").
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Native frequency this provider reports `indicator` at, or `None` when it
    /// never reports that indicator kind.
    fn native_frequency(&self, indicator: Indicator) -> Option<Frequency>;

    /// Whether this provider reports `indicator` at all.
    fn supports(&self, indicator: Indicator) -> bool {
        self.native_frequency(indicator).is_some()
    }

    /// The provider's own code for `country`, or `None` when it has no
    /// coverage for it.
    fn country_code(&self, country: &Country) -> Option<String>;

    /// Retrieve the series for `(country, indicator)`.
    ///
    /// At most one outbound request per call. A well-formed response with no
    /// usable observations is `Ok` with an empty series.
    ///
    /// # Errors
    /// `UnsupportedIndicator` and `UnsupportedCountry` are returned without any
    /// I/O; `Network` covers transport failures and non-2xx statuses, `Parse`
    /// covers unexpected response shapes.
    async fn fetch(&self, country: &Country, indicator: Indicator) -> Result<Series, RadarError>;
}

/// Shared guard for adapters: check static capabilities and return the
/// provider-specific country code and native frequency.
///
/// # Errors
/// Returns `UnsupportedIndicator` or `UnsupportedCountry` accordingly.
pub fn ensure_capable<P>(
    provider: &P,
    country: &Country,
    indicator: Indicator,
) -> Result<(String, Frequency), RadarError>
where
    P: Provider + ?Sized,
{
    let frequency = provider
        .native_frequency(indicator)
        .ok_or_else(|| RadarError::unsupported_indicator(provider.name(), indicator.as_str()))?;
    let code = provider
        .country_code(country)
        .ok_or_else(|| RadarError::unsupported_country(provider.name(), &country.name))?;
    Ok((code, frequency))
}

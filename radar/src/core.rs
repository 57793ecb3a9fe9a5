use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use radar_core::{
    Country, CountryRegistry, Indicator, PriorityTable, Provider, ProviderKey, RadarConfig,
    RadarError, ReportOptions, Series,
};
use tokio::time::Instant;

/// Orchestrator that resolves indicators across registered providers.
pub struct Radar {
    pub(crate) providers: Vec<Arc<dyn Provider>>,
    pub(crate) cfg: RadarConfig,
    pub(crate) registry: CountryRegistry,
}

/// Builder for constructing a `Radar` orchestrator with custom configuration.
pub struct RadarBuilder {
    providers: Vec<Arc<dyn Provider>>,
    cfg: RadarConfig,
    registry: CountryRegistry,
}

impl Default for RadarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RadarBuilder {
    /// Create a new builder with the standard priority table, a 5s provider
    /// timeout, a 20s request deadline and the built-in country registry.
    ///
    /// Starts with no providers; register at least one via
    /// [`with_provider`](Self::with_provider).
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: vec![],
            cfg: RadarConfig::default(),
            registry: CountryRegistry::builtin(),
        }
    }

    /// Register a provider.
    ///
    /// Registration order is irrelevant: the priority table alone decides the
    /// order in which providers are tried. Registering two providers with the
    /// same name keeps the first.
    #[must_use]
    pub fn with_provider(mut self, p: Arc<dyn Provider>) -> Self {
        self.providers.push(p);
        self
    }

    /// Replace the whole priority table.
    #[must_use]
    pub fn priority(mut self, table: PriorityTable) -> Self {
        self.cfg.priority = table;
        self
    }

    /// Override the provider order for a single indicator.
    #[must_use]
    pub fn prefer(mut self, indicator: Indicator, providers: &[ProviderKey]) -> Self {
        self.cfg.priority.set(indicator, providers);
        self
    }

    /// Set the per-provider call timeout. A timed-out call is recorded as a
    /// `timeout` attempt and the next provider is tried.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for one report. Indicators still resolving when
    /// it elapses are reported unavailable.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Remove the overall deadline; only per-provider timeouts apply.
    #[must_use]
    pub const fn no_request_timeout(mut self) -> Self {
        self.cfg.request_timeout = None;
        self
    }

    /// Default history shaping for reports that pass no options.
    #[must_use]
    pub const fn report_options(mut self, opts: ReportOptions) -> Self {
        self.cfg.report = opts;
        self
    }

    /// Maximum age, in calendar years, of a debt ratio before it is reported
    /// unavailable.
    #[must_use]
    pub const fn debt_max_age_years(mut self, years: u32) -> Self {
        self.cfg.debt_max_age_years = years;
        self
    }

    /// Use a custom country registry.
    #[must_use]
    pub fn registry(mut self, registry: CountryRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Build the `Radar` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no providers have been registered.
    pub fn build(mut self) -> Result<Radar, RadarError> {
        if self.providers.is_empty() {
            return Err(RadarError::InvalidArg(
                "no providers registered; add at least one via with_provider(...)".to_string(),
            ));
        }

        let mut seen: HashSet<&'static str> = HashSet::new();
        self.providers.retain(|p| seen.insert(p.name()));

        // Drop priority keys that no registered provider answers to.
        self.cfg.priority.retain(|k| seen.contains(k.as_str()));

        Ok(Radar {
            providers: self.providers,
            cfg: self.cfg,
            registry: self.registry,
        })
    }
}

impl Radar {
    /// Start building a new `Radar` instance.
    ///
    /// ```rust,ignore
    /// use radar::Radar;
    /// use radar_providers::{Endpoints, ReqwestFetch, standard_providers};
    ///
    /// let http = ReqwestFetch::new().shared();
    /// let mut builder = Radar::builder();
    /// for p in standard_providers(&http, &Endpoints::default())? {
    ///     builder = builder.with_provider(p);
    /// }
    /// let radar = builder.build()?;
    /// let report = radar.country_report("Germany", &Indicator::ALL, None).await?;
    /// ```
    #[must_use]
    pub fn builder() -> RadarBuilder {
        RadarBuilder::new()
    }

    /// Effective configuration after `build()` validation.
    #[must_use]
    pub const fn config(&self) -> &RadarConfig {
        &self.cfg
    }

    /// Registered provider for `key`.
    pub(crate) fn provider(&self, key: ProviderKey) -> Option<&Arc<dyn Provider>> {
        self.providers.iter().find(|p| p.name() == key.as_str())
    }

    /// Resolve free text to a country at least one registered provider can map.
    ///
    /// # Errors
    /// Returns `UnknownCountry` when the registry has no entry, or when no
    /// registered provider has a code for the country.
    pub fn resolve_country(&self, query: &str) -> Result<Country, RadarError> {
        let country = self
            .registry
            .resolve(query)
            .ok_or_else(|| RadarError::unknown_country(query))?;
        if self
            .providers
            .iter()
            .any(|p| p.country_code(&country).is_some())
        {
            Ok(country)
        } else {
            Err(RadarError::unknown_country(query))
        }
    }

    /// Deadline for a report starting now, if one is configured.
    pub(crate) fn request_deadline(&self) -> Option<Instant> {
        self.cfg.request_timeout.map(|t| Instant::now() + t)
    }

    /// Wrap a provider fetch with the per-provider timeout, clipped to the
    /// request deadline when one is set.
    ///
    /// Returns `RequestTimeout` when the request deadline fires first and
    /// `ProviderTimeout` when the provider's own budget runs out.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar::core::provider_call_with_timeout",
            skip(fut, deadline),
            fields(
                provider = provider_name,
                indicator = %indicator,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<Fut>(
        provider_name: &'static str,
        indicator: Indicator,
        timeout: Duration,
        deadline: Option<Instant>,
        fut: Fut,
    ) -> Result<Series, RadarError>
    where
        Fut: core::future::Future<Output = Result<Series, RadarError>>,
    {
        let own = Instant::now() + timeout;
        match deadline {
            Some(d) if d < own => tokio::time::timeout_at(d, fut)
                .await
                .unwrap_or_else(|_| Err(RadarError::request_timeout(indicator.as_str()))),
            _ => tokio::time::timeout_at(own, fut).await.unwrap_or_else(|_| {
                Err(RadarError::provider_timeout(provider_name, indicator.as_str()))
            }),
        }
    }
}

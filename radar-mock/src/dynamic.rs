use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use radar_core::provider::ensure_capable;
use radar_core::{Country, Frequency, Indicator, Period, Provider, RadarError, Series};

/// Instruction for how `fetch` should behave for a given input.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Return a series built from these points at the provider's native
    /// frequency for the indicator.
    Return(Vec<(Period, f64)>),
    /// Return a well-formed empty series.
    Empty,
    /// Fail immediately with the provided error.
    Fail(RadarError),
    /// Sleep, then return these points.
    Delay(Duration, Vec<(Period, f64)>),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<(String, Indicator), MockBehavior>,
    fallback_rules: HashMap<Indicator, MockBehavior>,
    calls: Vec<(String, Indicator)>,
}

/// Controller handle used by tests to drive the mock from the outside.
#[derive(Clone)]
pub struct MockController {
    state: Arc<Mutex<InternalState>>,
}

impl MockController {
    /// Set the behavior for one `(country ISO3, indicator)` pair.
    pub async fn set(&self, iso3: &str, indicator: Indicator, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard
            .rules
            .insert((iso3.to_ascii_uppercase(), indicator), behavior);
    }

    /// Set the behavior for `indicator` in every country without a specific rule.
    pub async fn set_for_all(&self, indicator: Indicator, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.fallback_rules.insert(indicator, behavior);
    }

    /// Number of `fetch` calls for `indicator`, across countries.
    pub async fn calls(&self, indicator: Indicator) -> usize {
        let guard = self.state.lock().await;
        guard.calls.iter().filter(|(_, i)| *i == indicator).count()
    }

    /// Number of `fetch` calls of any kind.
    pub async fn total_calls(&self) -> usize {
        self.state.lock().await.calls.len()
    }

    /// Copy of the call log as `(ISO3, indicator)` in call order.
    pub async fn call_log(&self) -> Vec<(String, Indicator)> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.fallback_rules.clear();
        guard.calls.clear();
    }
}

/// Builder for [`DynamicMockProvider`] capabilities.
#[must_use]
pub struct MockProviderBuilder {
    name: &'static str,
    frequencies: HashMap<Indicator, Frequency>,
    countries: Option<HashSet<String>>,
}

impl MockProviderBuilder {
    /// Declare `indicator` as reported at `frequency`.
    pub fn reports(mut self, indicator: Indicator, frequency: Frequency) -> Self {
        self.frequencies.insert(indicator, frequency);
        self
    }

    /// Declare every indicator as reported at `frequency`.
    pub fn reports_all(mut self, frequency: Frequency) -> Self {
        for indicator in Indicator::ALL {
            self.frequencies.insert(indicator, frequency);
        }
        self
    }

    /// Restrict coverage to these ISO2 codes. Without a call, every country
    /// is covered.
    pub fn covers(mut self, iso2: &[&str]) -> Self {
        self.countries = Some(iso2.iter().map(|c| c.to_ascii_uppercase()).collect());
        self
    }

    /// Finish, returning the provider and its controller.
    pub fn build(self) -> (Arc<dyn Provider>, MockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = MockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(DynamicMockProvider {
            name: self.name,
            frequencies: self.frequencies,
            countries: self.countries,
            state,
        });
        (me as Arc<dyn Provider>, controller)
    }
}

/// A provider that defers all behavior to an external controller.
///
/// Capabilities are fixed at build time; answers are scripted per
/// `(country, indicator)`. Without a matching rule the answer is an empty
/// series. Every `fetch` call is logged, including ones the static
/// capability checks reject.
pub struct DynamicMockProvider {
    name: &'static str,
    frequencies: HashMap<Indicator, Frequency>,
    countries: Option<HashSet<String>>,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockProvider {
    /// Start building a mock named `name` (its priority key).
    pub fn builder(name: &'static str) -> MockProviderBuilder {
        MockProviderBuilder {
            name,
            frequencies: HashMap::new(),
            countries: None,
        }
    }
}

#[async_trait]
impl Provider for DynamicMockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn native_frequency(&self, indicator: Indicator) -> Option<Frequency> {
        self.frequencies.get(&indicator).copied()
    }

    fn country_code(&self, country: &Country) -> Option<String> {
        match &self.countries {
            Some(set) if !set.contains(&country.iso2) => None,
            _ => Some(country.iso2.clone()),
        }
    }

    async fn fetch(&self, country: &Country, indicator: Indicator) -> Result<Series, RadarError> {
        // Snapshot the rule without holding the lock across await points.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push((country.iso3.clone(), indicator));
            guard
                .rules
                .get(&(country.iso3.clone(), indicator))
                .or_else(|| guard.fallback_rules.get(&indicator))
                .cloned()
        };
        let (_, frequency) = ensure_capable(self, country, indicator)?;
        let build = |points: Vec<(Period, f64)>| {
            Series::new(indicator, &country.iso3, self.key(), frequency, points)
        };

        match behavior {
            Some(MockBehavior::Return(points)) => build(points),
            Some(MockBehavior::Delay(after, points)) => {
                tokio::time::sleep(after).await;
                build(points)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            Some(MockBehavior::Empty) | None => Ok(Series::empty(
                indicator,
                &country.iso3,
                self.key(),
                frequency,
            )),
        }
    }
}

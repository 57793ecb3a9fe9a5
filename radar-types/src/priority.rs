//! Per-indicator provider ordering.
//!
//! The table is plain data: an immutable mapping from [`Indicator`] to an
//! ordered, de-duplicated list of [`ProviderKey`]s. Orchestration walks the
//! list front to back; nothing about provider choice lives in branching code.
//!
//! Notes:
//! - Order encodes trust. A higher-priority provider wins even when a lower
//!   one reports at a finer frequency.
//! - Keys that do not match a registered provider are dropped when the
//!   orchestrator is built.
//! - An indicator without an entry resolves to `unavailable` with an empty
//!   attempt list.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::{Indicator, ProviderKey};

/// Ranked list of values with cached index positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankedList<T>
where
    T: Eq + std::hash::Hash,
{
    values: Vec<T>,
    ranks: HashMap<T, usize>,
}

impl<T> RankedList<T>
where
    T: Copy + Eq + std::hash::Hash,
{
    fn new(list: &[T]) -> Self {
        let mut values: Vec<T> = Vec::with_capacity(list.len());
        let mut seen: HashSet<T> = HashSet::new();
        for value in list.iter().copied() {
            if seen.insert(value) {
                values.push(value);
            }
        }
        let ranks = values.iter().copied().enumerate().map(|(i, v)| (v, i)).collect();
        Self { values, ranks }
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn rank(&self, value: &T) -> Option<usize> {
        self.ranks.get(value).copied()
    }

    fn retain(&mut self, keep: impl Fn(&T) -> bool) {
        let kept: Vec<T> = self.values.iter().copied().filter(|v| keep(v)).collect();
        *self = Self::new(&kept);
    }
}

/// Immutable per-indicator provider order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriorityTable {
    entries: BTreeMap<Indicator, RankedList<ProviderKey>>,
}

impl PriorityTable {
    /// An empty table; every indicator resolves to `unavailable`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard precedence: IMF-IFS first for the monthly macro set,
    /// Eurostat second for EU-relevant indicators and first for the debt
    /// ratio, ECB for the euro-area policy rate, World Bank last everywhere.
    #[must_use]
    pub fn standard() -> Self {
        use Indicator as I;
        use ProviderKey as P;
        Self::new()
            .with(I::CpiInflation, &[P::IMF_IFS, P::EUROSTAT, P::WORLD_BANK])
            .with(I::ExchangeRate, &[P::IMF_IFS, P::WORLD_BANK])
            .with(I::Reserves, &[P::IMF_IFS, P::WORLD_BANK])
            .with(I::UnemploymentRate, &[P::IMF_IFS, P::EUROSTAT, P::WORLD_BANK])
            .with(I::GdpGrowth, &[P::IMF_IFS, P::WORLD_BANK])
            .with(I::PolicyRate, &[P::IMF_IFS, P::ECB, P::WORLD_BANK])
            .with(I::GovernmentDebtRatio, &[P::EUROSTAT, P::IMF_IFS, P::WORLD_BANK])
            .with(I::CurrentAccountBalance, &[P::WORLD_BANK])
            .with(I::GovernmentEffectiveness, &[P::WORLD_BANK])
    }

    /// Replace the order for one indicator, keeping the first occurrence of
    /// each key.
    pub fn set(&mut self, indicator: Indicator, providers: &[ProviderKey]) {
        self.entries.insert(indicator, RankedList::new(providers));
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, indicator: Indicator, providers: &[ProviderKey]) -> Self {
        self.set(indicator, providers);
        self
    }

    /// Providers to try for `indicator`, highest priority first.
    #[must_use]
    pub fn order(&self, indicator: Indicator) -> &[ProviderKey] {
        self.entries
            .get(&indicator)
            .map_or(&[] as &[ProviderKey], RankedList::values)
    }

    /// Zero-based position of `provider` in the order for `indicator`.
    #[must_use]
    pub fn rank(&self, indicator: Indicator, provider: ProviderKey) -> Option<usize> {
        self.entries.get(&indicator)?.rank(&provider)
    }

    /// Drop keys rejected by `keep` from every entry.
    pub fn retain(&mut self, keep: impl Fn(ProviderKey) -> bool) {
        for list in self.entries.values_mut() {
            list.retain(|k| keep(*k));
        }
    }
}

impl Serialize for PriorityTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (indicator, list) in &self.entries {
            map.serialize_entry(indicator.as_str(), list.values())?;
        }
        map.end()
    }
}

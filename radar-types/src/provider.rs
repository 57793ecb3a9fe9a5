//! Provider identity usable across crates.

use core::fmt;

use serde::{Serialize, Serializer};

/// Typed key identifying a provider in priority tables and provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderKey(pub &'static str);

impl ProviderKey {
    /// IMF International Financial Statistics.
    pub const IMF_IFS: Self = Self::new("imf-ifs");
    /// Eurostat dissemination API.
    pub const EUROSTAT: Self = Self::new("eurostat");
    /// ECB Statistical Data Warehouse.
    pub const ECB: Self = Self::new("ecb");
    /// World Bank World Development Indicators.
    pub const WORLD_BANK: Self = Self::new("world-bank-wdi");

    /// Construct a typed key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<ProviderKey> for &'static str {
    fn from(k: ProviderKey) -> Self {
        k.0
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for ProviderKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

use serde::{Deserialize, Serialize};

/// A resolved country with its canonical ISO codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    /// Display name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code, upper case.
    pub iso2: String,
    /// ISO 3166-1 alpha-3 code, upper case.
    pub iso3: String,
}

impl Country {
    /// Build a country from a display name and its two ISO codes.
    pub fn new(name: impl Into<String>, iso2: impl Into<String>, iso3: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iso2: iso2.into().to_ascii_uppercase(),
            iso3: iso3.into().to_ascii_uppercase(),
        }
    }
}

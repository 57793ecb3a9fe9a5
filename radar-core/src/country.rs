use std::collections::HashMap;

use crate::Country;
use crate::iso3166::{ISO_3166_1, ISO_FORMAL_NAMES};

/// (normalised alias, ISO2)
const ALIASES: &[(&str, &str)] = &[
    ("usa", "US"),
    ("us", "US"),
    ("united states of america", "US"),
    ("america", "US"),
    ("uk", "GB"),
    ("great britain", "GB"),
    ("britain", "GB"),
    ("czech republic", "CZ"),
    ("holland", "NL"),
    ("the netherlands", "NL"),
    ("south korea", "KR"),
    ("korea", "KR"),
    ("republic of korea", "KR"),
    ("russia", "RU"),
    ("turkey", "TR"),
    ("turkiye", "TR"),
    ("vietnam", "VN"),
    ("uae", "AE"),
    ("hellas", "GR"),
    ("ivory coast", "CI"),
    ("burma", "MM"),
    ("east timor", "TL"),
    ("swaziland", "SZ"),
    ("cape verde", "CV"),
    ("macedonia", "MK"),
];

/// EU, EEA and UK members as ISO2.
pub const EU_EEA_UK: &[&str] = &[
    "AT", "BE", "BG", "HR", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HU", "IE", "IT",
    "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK", "IS", "NO", "LI", "GB",
];

/// Euro area members as ISO2.
pub const EURO_AREA: &[&str] = &[
    "AT", "BE", "HR", "CY", "EE", "FI", "FR", "DE", "GR", "IE", "IT", "LV", "LT", "LU", "MT", "NL",
    "PT", "SK", "SI", "ES",
];

fn normalise(query: &str) -> String {
    let cleaned: String = query
        .chars()
        .filter(|c| *c != '.' && *c != '\u{200b}')
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect();
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolves free-text country names to [`Country`] values.
///
/// Covers every ISO 3166-1 entry. Lookup order: display name, ISO formal
/// name, alias, then a bare ISO2/ISO3 code. Codes are only accepted when they
/// belong to a registry entry.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    by_key: HashMap<String, usize>,
    entries: Vec<Country>,
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CountryRegistry {
    /// The full ISO 3166-1 table with formal names and common aliases.
    #[must_use]
    pub fn builtin() -> Self {
        let entries: Vec<Country> = ISO_3166_1
            .iter()
            .map(|(name, iso2, iso3)| Country::new(*name, *iso2, *iso3))
            .collect();
        let mut by_key = HashMap::new();
        for (idx, c) in entries.iter().enumerate() {
            by_key.insert(normalise(&c.name), idx);
        }
        let formal = ISO_FORMAL_NAMES
            .iter()
            .map(|(name, iso2)| (normalise(name), *iso2));
        let aliases = ALIASES.iter().map(|(alias, iso2)| ((*alias).to_string(), *iso2));
        for (key, iso2) in formal.chain(aliases) {
            if let Some(idx) = entries.iter().position(|c| c.iso2 == *iso2) {
                by_key.entry(key).or_insert(idx);
            }
        }
        Self { by_key, entries }
    }

    /// Resolve a free-text name, alias or ISO code.
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<Country> {
        let key = normalise(query);
        if key.is_empty() {
            return None;
        }
        if let Some(idx) = self.by_key.get(&key) {
            return self.entries.get(*idx).cloned();
        }
        let code = key.to_ascii_uppercase();
        if !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        let found = match code.len() {
            2 => self.entries.iter().find(|c| c.iso2 == code).cloned(),
            3 => self.entries.iter().find(|c| c.iso3 == code).cloned(),
            _ => None,
        };
        #[cfg(feature = "tracing")]
        if found.is_none() {
            tracing::debug!(query = %query, "country not in registry");
        }
        found
    }

    /// Every registered country.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.entries.iter()
    }
}

/// True when `iso2` is an EU, EEA or UK member.
#[must_use]
pub fn is_eu_eea_uk(iso2: &str) -> bool {
    EU_EEA_UK.contains(&iso2)
}

/// True when `iso2` is a euro area member.
#[must_use]
pub fn is_euro_area(iso2: &str) -> bool {
    EURO_AREA.contains(&iso2)
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the radar workspace.
///
/// Provider-local variants (`Network`, `Parse`, `UnsupportedCountry`,
/// `UnsupportedIndicator`, `ProviderTimeout`) drive fallback inside the
/// orchestrator and never reach callers. `UnknownCountry` is the only
/// condition that fails a whole report.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RadarError {
    /// Transport failure, connection error or non-2xx status from upstream.
    #[error("{provider} network error: {msg}")]
    Network {
        /// Provider that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The upstream response did not have the expected shape.
    #[error("{provider} parse error: {msg}")]
    Parse {
        /// Provider that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The provider has no code for this country in its own scheme.
    #[error("{provider} does not cover {country}")]
    UnsupportedCountry {
        /// Provider that rejected the country.
        provider: String,
        /// Country display name.
        country: String,
    },

    /// The provider never reports this indicator kind.
    #[error("{provider} does not report {indicator}")]
    UnsupportedIndicator {
        /// Provider that rejected the indicator.
        provider: String,
        /// Indicator wire name.
        indicator: String,
    },

    /// A single provider call exceeded the configured timeout.
    #[error("provider timed out: {indicator} via {provider}")]
    ProviderTimeout {
        /// Provider that timed out.
        provider: String,
        /// Indicator wire name.
        indicator: String,
    },

    /// The overall request exceeded its deadline.
    #[error("request timed out: {what}")]
    RequestTimeout {
        /// What was being resolved when the deadline hit.
        what: String,
    },

    /// No registry entry or no registered provider can map the country.
    #[error("unknown country: {query}")]
    UnknownCountry {
        /// Free-text query as received.
        query: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with assembled data (inconsistent frequencies etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl RadarError {
    /// Helper: build a `Network` error.
    pub fn network(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Network {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Parse` error.
    pub fn parse(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Parse {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `UnsupportedCountry` error.
    pub fn unsupported_country(provider: impl Into<String>, country: impl Into<String>) -> Self {
        Self::UnsupportedCountry {
            provider: provider.into(),
            country: country.into(),
        }
    }

    /// Helper: build an `UnsupportedIndicator` error.
    pub fn unsupported_indicator(
        provider: impl Into<String>,
        indicator: impl Into<String>,
    ) -> Self {
        Self::UnsupportedIndicator {
            provider: provider.into(),
            indicator: indicator.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(provider: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
            indicator: indicator.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(what: impl Into<String>) -> Self {
        Self::RequestTimeout { what: what.into() }
    }

    /// Helper: build an `UnknownCountry` error.
    #[must_use]
    pub fn unknown_country(query: impl Into<String>) -> Self {
        Self::UnknownCountry {
            query: query.into(),
        }
    }

    /// Returns true for provider-local failures that the orchestrator answers
    /// by moving to the next provider.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. }
                | Self::Parse { .. }
                | Self::UnsupportedCountry { .. }
                | Self::UnsupportedIndicator { .. }
                | Self::ProviderTimeout { .. }
        )
    }
}

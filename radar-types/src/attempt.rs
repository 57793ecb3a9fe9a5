//! Provenance records for provider attempts that did not win.

use serde::Serialize;

use crate::{Period, ProviderKey, RadarError};

/// Why a provider did not supply the resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FailureReason {
    /// Transport failure or non-2xx status.
    Network {
        /// Upstream error message.
        message: String,
    },
    /// Response shape was not understood.
    Parse {
        /// Parser error message.
        message: String,
    },
    /// The per-provider timeout elapsed, or the request deadline hit first.
    Timeout,
    /// The provider answered with no observations.
    Empty,
    /// Skipped without a call: the provider cannot map the country.
    UnsupportedCountry,
    /// Skipped without a call: the provider never reports the indicator.
    UnsupportedIndicator,
    /// The provider's latest observation is too old to report.
    Stale {
        /// Latest period the provider had.
        latest: Period,
    },
}

impl FailureReason {
    /// Classify a provider error.
    #[must_use]
    pub fn from_error(err: &RadarError) -> Self {
        match err {
            RadarError::Network { msg, .. } => Self::Network {
                message: msg.clone(),
            },
            RadarError::UnsupportedCountry { .. } => Self::UnsupportedCountry,
            RadarError::UnsupportedIndicator { .. } => Self::UnsupportedIndicator,
            RadarError::ProviderTimeout { .. } | RadarError::RequestTimeout { .. } => Self::Timeout,
            RadarError::Parse { msg, .. } => Self::Parse {
                message: msg.clone(),
            },
            other => Self::Parse {
                message: other.to_string(),
            },
        }
    }

    /// True when the provider was never called.
    #[must_use]
    pub const fn is_static_skip(&self) -> bool {
        matches!(self, Self::UnsupportedCountry | Self::UnsupportedIndicator)
    }
}

/// One provider that was considered for an indicator and did not win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    /// Provider considered.
    pub provider: ProviderKey,
    /// Outcome.
    #[serde(flatten)]
    pub reason: FailureReason,
}

impl Attempt {
    /// Record an attempt.
    #[must_use]
    pub const fn new(provider: ProviderKey, reason: FailureReason) -> Self {
        Self { provider, reason }
    }
}

use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use radar_providers::Endpoints;

/// Log output format for the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub provider_timeout: Duration,
    pub request_timeout: Duration,
    /// Outer bound applied by the HTTP layer, above the report deadline.
    pub http_timeout: Duration,
    pub log_format: LogFormat,
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            provider_timeout: Duration::from_millis(5_000),
            request_timeout: Duration::from_millis(20_000),
            http_timeout: Duration::from_millis(30_000),
            log_format: LogFormat::Text,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment, loading `.env` first.
    ///
    /// # Errors
    /// Fails when `RADAR_LISTEN_ADDR` is set but is not a socket address.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unparseable durations fall back to their defaults.
    ///
    /// # Errors
    /// Fails when `RADAR_LISTEN_ADDR` is set but is not a socket address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let listen_addr = match lookup("RADAR_LISTEN_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid RADAR_LISTEN_ADDR: {raw}"))?,
            None => defaults.listen_addr,
        };
        let millis = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map_or(fallback, Duration::from_millis)
        };
        let log_format = match lookup("RADAR_LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let url = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            listen_addr,
            provider_timeout: millis("RADAR_PROVIDER_TIMEOUT_MS", defaults.provider_timeout),
            request_timeout: millis("RADAR_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            http_timeout: millis("RADAR_HTTP_TIMEOUT_MS", defaults.http_timeout),
            log_format,
            endpoints: Endpoints {
                imf: url("RADAR_IMF_BASE_URL"),
                eurostat: url("RADAR_EUROSTAT_BASE_URL"),
                ecb: url("RADAR_ECB_BASE_URL"),
                world_bank: url("RADAR_WORLD_BANK_BASE_URL"),
            },
        })
    }
}

use std::sync::Arc;

use radar::{Radar, RadarBuilder};
use radar_providers::{ReqwestFetch, standard_providers};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub radar: Radar,
}

impl AppState {
    pub fn new(radar: Radar) -> Arc<Self> {
        Arc::new(Self { radar })
    }
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

/// Wire the real upstream adapters into an orchestrator.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let http = ReqwestFetch::new().shared();
    let radar = standard_providers(&http, &config.endpoints)?
        .into_iter()
        .fold(Radar::builder(), RadarBuilder::with_provider)
        .provider_timeout(config.provider_timeout)
        .request_timeout(config.request_timeout)
        .build()?;
    let millis = |d: std::time::Duration| u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        provider_timeout_ms = millis(config.provider_timeout),
        request_timeout_ms = millis(config.request_timeout),
        "providers registered"
    );
    Ok(AppState::new(radar))
}

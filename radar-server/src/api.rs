use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use radar::{CountryReport, DebtReport, Indicator, ReportOptions, SeriesMode};
use serde::Deserialize;
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub country: Option<String>,
    /// Comma-separated wire names; all indicators when absent.
    pub indicators: Option<String>,
    pub series: Option<String>,
    /// History points to keep; parsed here so bad values get a JSON 400.
    pub keep: Option<String>,
}

impl ReportQuery {
    fn country(&self) -> ApiResult<&str> {
        match self.country.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => Ok(c),
            _ => Err(ApiError::BadRequest(
                "query parameter `country` is required".to_string(),
            )),
        }
    }

    fn indicators(&self) -> ApiResult<Vec<Indicator>> {
        let Some(raw) = self.indicators.as_deref() else {
            return Ok(Indicator::ALL.to_vec());
        };
        let picked = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<Indicator>)
            .collect::<Result<Vec<_>, _>>()?;
        if picked.is_empty() {
            return Err(ApiError::BadRequest(
                "`indicators` must name at least one indicator".to_string(),
            ));
        }
        Ok(picked)
    }

    /// Per-request shaping; `None` keeps the server default.
    fn options(&self) -> ApiResult<Option<ReportOptions>> {
        if self.series.is_none() && self.keep.is_none() {
            return Ok(None);
        }
        let series = match self.series.as_deref() {
            Some(s) => s.parse::<SeriesMode>()?,
            None => SeriesMode::None,
        };
        Ok(Some(ReportOptions {
            series,
            keep: self.keep()?,
        }))
    }

    fn keep(&self) -> ApiResult<Option<usize>> {
        let Some(raw) = self.keep.as_deref() else {
            return Ok(None);
        };
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(ApiError::BadRequest(format!(
                "`keep` must be a positive integer, got `{raw}`"
            ))),
        }
    }
}

async fn country_data(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ReportQuery>,
) -> ApiResult<Json<CountryReport>> {
    let country = q.country()?;
    let indicators = q.indicators()?;
    let report = state
        .radar
        .country_report(country, &indicators, q.options()?)
        .await?;
    tracing::info!(
        country = %report.country.iso3,
        unavailable = report.unavailable().count(),
        "country report served"
    );
    Ok(Json(report))
}

async fn debt(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ReportQuery>,
) -> ApiResult<Json<DebtReport>> {
    let country = q.country()?;
    let report = state.radar.debt_report(country, q.options()?).await?;
    tracing::info!(
        country = %report.country.iso3,
        available = report.debt.is_available(),
        "debt report served"
    );
    Ok(Json(report))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/country-data", get(country_data))
        .route("/v1/debt", get(debt))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(config.http_timeout)),
        )
}

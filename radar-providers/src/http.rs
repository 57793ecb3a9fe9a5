use std::sync::Arc;

use async_trait::async_trait;
use radar_core::RadarError;
use serde_json::Value;
use url::Url;

/// JSON-over-HTTP transport (so tests can inject canned responses).
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET `url` and decode the body as JSON.
    ///
    /// # Errors
    /// `Network` for transport failures and non-2xx statuses, `Parse` for a
    /// body that is not JSON. Errors are tagged with `provider`.
    async fn get_json(&self, provider: &'static str, url: Url) -> Result<Value, RadarError>;
}

/// Production transport backed by `reqwest`.
///
/// `reqwest::Client` is `Clone + Send + Sync` and pools connections, so one
/// instance is shared by every adapter.
#[derive(Clone, Default)]
pub struct ReqwestFetch {
    client: reqwest::Client,
}

impl ReqwestFetch {
    /// Build with a fresh client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Convenience: box as the trait object adapters hold.
    #[must_use]
    pub fn shared(self) -> Arc<dyn HttpFetch> {
        Arc::new(self)
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "radar_providers::http::get_json",
            skip(self, url),
            fields(provider = provider, url = %url),
        )
    )]
    async fn get_json(&self, provider: &'static str, url: Url) -> Result<Value, RadarError> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| RadarError::network(provider, e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RadarError::network(provider, format!("status {status}")));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| RadarError::network(provider, e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| RadarError::parse(provider, e.to_string()))
    }
}

impl dyn HttpFetch {
    /// Build an `HttpFetch` from a closure (tests and offline fixtures).
    pub fn from_fn<F>(f: F) -> Arc<dyn HttpFetch>
    where
        F: Send + Sync + 'static + Fn(Url) -> Result<Value, RadarError>,
    {
        struct FnFetch<F>(F);
        #[async_trait]
        impl<F> HttpFetch for FnFetch<F>
        where
            F: Send + Sync + 'static + Fn(Url) -> Result<Value, RadarError>,
        {
            async fn get_json(
                &self,
                _provider: &'static str,
                url: Url,
            ) -> Result<Value, RadarError> {
                (self.0)(url)
            }
        }
        Arc::new(FnFetch(f))
    }
}

/// Parse a base URL, requiring it to accept path segments.
pub(crate) fn parse_base(provider: &'static str, base: &str) -> Result<Url, RadarError> {
    let url = Url::parse(base)
        .map_err(|e| RadarError::InvalidArg(format!("{provider} base url {base}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(RadarError::InvalidArg(format!(
            "{provider} base url {base} cannot carry a path"
        )));
    }
    Ok(url)
}

/// Append path segments and query pairs to `base`.
///
/// Segments are pushed individually so characters such as `:` in dataset ids
/// are never read as a scheme.
pub(crate) fn endpoint(
    base: &Url,
    segments: &[&str],
    query: &[(&str, &str)],
) -> Result<Url, RadarError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| RadarError::InvalidArg(format!("base url {base} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

//! Resolution API HTTP client.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use snapvid_models::{NormalizedTarget, ResolutionResult};

use crate::error::{ResolveError, ResolveResult};

const DEFAULT_ENDPOINT: &str = "https://snap-video3.p.rapidapi.com/download";
const DEFAULT_API_HOST: &str = "snap-video3.p.rapidapi.com";

/// Configuration for the resolver client.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Resolution endpoint URL
    pub endpoint: String,
    /// Service credential, sent as `X-RapidAPI-Key`
    pub api_key: String,
    /// Service host identifier, sent as `X-RapidAPI-Host`
    pub api_host: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create config from environment variables.
    ///
    /// An unset `RAPIDAPI_KEY` yields an empty credential; the upstream API
    /// rejects such requests itself, so there is no startup-time check.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("RESOLVER_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            api_key: std::env::var("RAPIDAPI_KEY").unwrap_or_default(),
            api_host: std::env::var("RESOLVER_API_HOST")
                .unwrap_or_else(|_| DEFAULT_API_HOST.to_string()),
        }
    }
}

/// Client for the external video-resolution API.
pub struct ResolverClient {
    http: Client,
    config: ResolverConfig,
}

impl ResolverClient {
    /// Create a new resolver client.
    pub fn new(config: ResolverConfig) -> ResolveResult<Self> {
        let http = Client::builder().build().map_err(transport_error)?;
        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ResolveResult<Self> {
        Self::new(ResolverConfig::from_env())
    }

    /// Resolve a validated URL into video metadata and download variants.
    ///
    /// Issues exactly one POST with a URL-encoded form body `url=<target>`.
    pub async fn resolve(&self, target: &NormalizedTarget) -> ResolveResult<ResolutionResult> {
        debug!(url = %target, endpoint = %self.config.endpoint, "requesting video resolution");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("X-RapidAPI-Key", self.config.api_key.as_str())
            .header("X-RapidAPI-Host", self.config.api_host.as_str())
            .form(&[("url", target.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(status = %status, "resolution response received");

        if !status.is_success() {
            let fallback = format!(
                "API Error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            );
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message.unwrap_or(fallback),
                Err(_) => fallback,
            };
            warn!("resolution request failed: {message}");
            return Err(ResolveError::ResolutionFailed(message));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| ResolveError::InvalidResponseShape)?;

        if !body.is_object() {
            return Err(ResolveError::InvalidResponseShape);
        }

        serde_json::from_value(body).map_err(|_| ResolveError::InvalidResponseShape)
    }
}

/// Error body shape the API uses for failures.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn transport_error(err: reqwest::Error) -> ResolveError {
    let message = err.to_string();
    if message.is_empty() {
        ResolveError::ResolutionFailed("Unknown error".to_string())
    } else {
        ResolveError::ResolutionFailed(message)
    }
}

//! Application state.

use std::sync::Arc;

use snapvid_resolver::{ResolverClient, ResolverConfig};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub resolver: Arc<ResolverClient>,
}

impl AppState {
    /// Create new application state with a resolver configured from the
    /// environment.
    pub fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let resolver = ResolverClient::new(ResolverConfig::from_env())?;
        Ok(Self {
            config,
            resolver: Arc::new(resolver),
        })
    }

    /// Create state around an already-built resolver.
    ///
    /// Lets tests point the client at a local mock server instead of
    /// mutating process environment.
    pub fn with_resolver(config: ApiConfig, resolver: ResolverClient) -> Self {
        Self {
            config,
            resolver: Arc::new(resolver),
        }
    }
}

//! Oireachtas API client with file-backed caching
//!
//! Each fetch first consults the on-disk cache. A fresh entry recorded for
//! the same URL is served directly; anything else triggers exactly one live
//! request whose response replaces the cache entry.

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::ResourceId;
use crate::cache::{CacheEntry, CacheManager};
use crate::config::FetchConfig;

/// Errors that can occur when fetching a resource
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested resource name is not known
    #[error("Invalid resource: '{0}'. Valid resources: members, legislation")]
    InvalidResource(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body was not JSON
    #[error("Failed to parse response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Client for fetching Oireachtas resources through the local cache
#[derive(Debug, Clone)]
pub struct OireachtasClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Cache manager for persisting responses
    cache: CacheManager,
    /// Endpoints, cache location and timings
    config: FetchConfig,
}

impl OireachtasClient {
    /// Creates a client for the given configuration
    ///
    /// # Errors
    /// Returns `FetchError::Client` if the HTTP client cannot be built.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http_client,
            cache: CacheManager::with_dir(config.cache_dir.clone()),
            config,
        })
    }

    /// Fetches a resource by name
    ///
    /// # Errors
    /// Returns `FetchError::InvalidResource` if `name` is not a known
    /// resource. Network failures are not errors here; they yield `Ok(None)`.
    pub async fn fetch_named(&self, name: &str) -> Result<Option<Value>, FetchError> {
        let resource = match name.parse::<ResourceId>() {
            Ok(resource) => resource,
            Err(e) => {
                error!(resource = name, "invalid resource requested");
                return Err(e);
            }
        };

        Ok(self.fetch(resource).await)
    }

    /// Fetches a resource payload
    ///
    /// # Returns
    /// * `Some(payload)` from a valid cache entry or a successful request
    /// * `None` if the cache could not be used and the request failed
    ///
    /// # Behavior
    /// - Serves the cached payload when it was fetched from the configured
    ///   URL less than the configured TTL ago
    /// - Otherwise issues a single request, with no retry
    /// - A successful response is written to the cache before returning; a
    ///   failed cache write is logged and the payload still returned
    pub async fn fetch(&self, resource: ResourceId) -> Option<Value> {
        let url = self.config.url_for(resource);

        if let Some(data) = self.read_fresh(resource, url) {
            return Some(data);
        }

        match self.fetch_from_api(resource, url).await {
            Ok(data) => {
                let entry = CacheEntry::new(url, data);
                if let Err(e) = self.cache.write(resource.cache_key(), &entry) {
                    warn!(%resource, error = %e, "failed to write cache");
                }
                Some(entry.data)
            }
            Err(e) => {
                error!(%resource, error = %e, "failed to fetch data");
                None
            }
        }
    }

    /// Returns the cached payload for `resource` if it may still be served
    ///
    /// Missing, stale, mismatched and unreadable entries all count as a miss.
    fn read_fresh(&self, resource: ResourceId, url: &str) -> Option<Value> {
        let entry = match self.cache.read(resource.cache_key()) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                info!(%resource, "no cached data");
                return None;
            }
            Err(e) => {
                warn!(%resource, error = %e, "ignoring unreadable cache file");
                return None;
            }
        };

        debug!(%resource, current_url = url, cached_url = %entry.url, "comparing cache URL");

        if entry.is_valid(url, Utc::now(), self.config.cache_ttl) {
            info!(%resource, "using cached data");
            Some(entry.data)
        } else {
            info!(%resource, "cache is expired or URL has changed");
            None
        }
    }

    /// Issues a single GET request and parses the body as JSON
    async fn fetch_from_api(&self, resource: ResourceId, url: &str) -> Result<Value, FetchError> {
        info!(%resource, url, "fetching data from API");

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(FetchError::Body)
    }
}

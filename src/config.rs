//! Fetch configuration
//!
//! Holds the endpoint URLs, cache location and timing knobs used by the
//! fetcher. Defaults point at the public Oireachtas API.

use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::data::ResourceId;

/// Default lifetime of a cache entry
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Default timeout for a single outbound request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for fetching and caching API resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Endpoint for the members resource
    pub members_url: String,
    /// Endpoint for the legislation resource
    pub legislation_url: String,
    /// Directory holding the cache files
    pub cache_dir: PathBuf,
    /// How long a cache entry stays fresh
    pub cache_ttl: Duration,
    /// Timeout applied to each outbound request
    pub request_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            members_url: ResourceId::Members.default_url().to_string(),
            legislation_url: ResourceId::Legislation.default_url().to_string(),
            cache_dir: default_cache_dir(),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Default configuration with the cache stored in `cache_dir`
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::default()
        }
    }

    /// Builds a configuration from parsed CLI arguments, falling back to
    /// defaults for anything not given.
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            members_url: cli.members_url.clone().unwrap_or(defaults.members_url),
            legislation_url: cli
                .legislation_url
                .clone()
                .unwrap_or(defaults.legislation_url),
            cache_dir: cli.cache_dir.clone().unwrap_or(defaults.cache_dir),
            cache_ttl: cli
                .cache_ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            request_timeout: cli
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// The configured URL for a resource
    pub fn url_for(&self, resource: ResourceId) -> &str {
        match resource {
            ResourceId::Members => &self.members_url,
            ResourceId::Legislation => &self.legislation_url,
        }
    }
}

/// XDG cache directory (`~/.cache/oireachtas/` on Linux), or the working
/// directory when no home directory can be determined.
pub fn default_cache_dir() -> PathBuf {
    ProjectDirs::from("", "", "oireachtas")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

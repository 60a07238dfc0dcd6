//! Remote resources served by the Oireachtas API

use std::fmt;
use std::str::FromStr;

use super::FetchError;

/// A resource collection that can be fetched and cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Members,
    Legislation,
}

impl ResourceId {
    /// All known resources
    pub const ALL: [ResourceId; 2] = [ResourceId::Members, ResourceId::Legislation];

    /// Name used on the command line and in logs
    pub fn name(self) -> &'static str {
        match self {
            ResourceId::Members => "members",
            ResourceId::Legislation => "legislation",
        }
    }

    /// Default endpoint for this resource
    pub fn default_url(self) -> &'static str {
        match self {
            ResourceId::Members => "https://api.oireachtas.ie/v1/members",
            ResourceId::Legislation => "https://api.oireachtas.ie/v1/legislation",
        }
    }

    /// Cache key; the cache file is `<key>.json`
    pub fn cache_key(self) -> &'static str {
        match self {
            ResourceId::Members => "api_cache_members",
            ResourceId::Legislation => "api_cache_legislation",
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceId {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceId::ALL
            .into_iter()
            .find(|resource| resource.name() == s)
            .ok_or_else(|| FetchError::InvalidResource(s.to_string()))
    }
}

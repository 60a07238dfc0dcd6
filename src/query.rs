//! Bill queries
//!
//! Ties the cached fetcher to the payload decoders and filters. Payloads are
//! fetched fresh for every query and passed along explicitly; nothing decoded
//! is kept between calls.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::FetchConfig;
use crate::data::{
    build_member_index, filter_by_last_updated, filter_by_sponsor, parse_bills, today,
    validate_date_range, Bill, FetchError, OireachtasClient, PayloadError, RangeError, ResourceId,
};

/// Errors that abort a query
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Runs bill queries against the Oireachtas API
#[derive(Debug, Clone)]
pub struct BillQuery {
    client: OireachtasClient,
}

impl BillQuery {
    pub fn new(client: OireachtasClient) -> Self {
        Self { client }
    }

    /// Creates a query runner with its own client
    ///
    /// # Errors
    /// Returns `FetchError::Client` if the HTTP client cannot be built.
    pub fn from_config(config: FetchConfig) -> Result<Self, FetchError> {
        OireachtasClient::new(config).map(Self::new)
    }

    /// Bills sponsored by the member with identifier `pid`
    ///
    /// An unknown `pid`, or a resource that cannot be fetched, yields an
    /// empty list.
    ///
    /// # Errors
    /// Returns `QueryError::Payload` if either payload is malformed.
    pub async fn sponsored_by(&self, pid: &str) -> Result<Vec<Bill>, QueryError> {
        let Some(members) = self.client.fetch(ResourceId::Members).await else {
            warn!("members data unavailable, returning no bills");
            return Ok(Vec::new());
        };
        let Some(legislation) = self.client.fetch(ResourceId::Legislation).await else {
            warn!("legislation data unavailable, returning no bills");
            return Ok(Vec::new());
        };

        let index = build_member_index(&members)?;
        let bills = parse_bills(&legislation)?;

        if !index.contains_key(pid) {
            warn!(pid, "no member with given pId");
            return Ok(Vec::new());
        }

        let sponsored: Vec<Bill> = filter_by_sponsor(pid, &bills, &index)
            .into_iter()
            .cloned()
            .collect();
        info!(pid, count = sponsored.len(), "bills sponsored by member fetched");
        Ok(sponsored)
    }

    /// Bills last updated between `since` and `until`, both inclusive
    ///
    /// When `until` is `None` today's date is used, so repeated calls may
    /// return different results. The range is validated before anything is
    /// fetched.
    ///
    /// # Errors
    /// Returns `QueryError::Range` unless `since` is strictly before `until`,
    /// and `QueryError::Payload` if the payload or any bill date is malformed.
    pub async fn updated_between(
        &self,
        since: NaiveDate,
        until: Option<NaiveDate>,
    ) -> Result<Vec<Bill>, QueryError> {
        let until = until.unwrap_or_else(today);
        let range = validate_date_range(since, until).map_err(|e| {
            warn!(error = %e, "rejected date range");
            e
        })?;

        let Some(legislation) = self.client.fetch(ResourceId::Legislation).await else {
            warn!("legislation data unavailable, returning no bills");
            return Ok(Vec::new());
        };

        let bills = parse_bills(&legislation)?;
        let updated: Vec<Bill> = filter_by_last_updated(&range, &bills)?
            .into_iter()
            .cloned()
            .collect();
        info!(%since, %until, count = updated.len(), "bills in date range fetched");
        Ok(updated)
    }
}

//! Core data models for the Oireachtas bills CLI
//!
//! This module contains the typed records decoded from the members and
//! legislation payloads, together with the clients and filters that operate
//! on them.

pub mod client;
pub mod date_range;
pub mod legislation;
pub mod members;
pub mod resource;

pub use client::{FetchError, OireachtasClient};
pub use date_range::{parse_calendar_date, today, validate_date_range, DateRange, RangeError};
pub use legislation::{filter_by_last_updated, filter_by_sponsor, parse_bills};
pub use members::build_member_index;
pub use resource::ResourceId;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Mapping from member identifier (`pId`) to display name (`fullName`)
pub type MemberIndex = HashMap<String, String>;

/// Errors raised when a payload does not have the expected shape
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The members payload is missing `results` or a required member field
    #[error("Malformed members payload: {0}")]
    Members(#[source] serde_json::Error),

    /// The legislation payload is missing `results` or a required bill field
    #[error("Malformed legislation payload: {0}")]
    Legislation(#[source] serde_json::Error),

    /// A bill's `lastUpdated` value is not a recognizable date
    #[error("Bill {bill_no} has malformed lastUpdated value '{value}'")]
    LastUpdated { bill_no: String, value: String },
}

/// A member of the Oireachtas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable unique identifier, e.g. "MickBarry"
    #[serde(rename = "pId")]
    pub p_id: String,
    /// Display name, not guaranteed unique
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// A bill record from the legislation resource
///
/// Fields other than the three used for filtering are kept verbatim in
/// `details` so the full record can be printed back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Bill number, e.g. "2019/42"
    #[serde(rename = "billNo")]
    pub bill_no: String,
    /// Last modification date as sent by the API
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    /// Sponsors in upstream order
    #[serde(default)]
    pub sponsors: Vec<SponsorEntry>,
    /// Remaining upstream fields
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Bill {
    /// Display names of all sponsors that have one
    pub fn sponsor_names(&self) -> impl Iterator<Item = &str> {
        self.sponsors
            .iter()
            .filter_map(|entry| entry.sponsor.by.show_as.as_deref())
    }
}

/// Wrapper object around each sponsor in a bill's `sponsors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorEntry {
    pub sponsor: Sponsor,
}

/// A bill sponsor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    /// Who sponsored the bill
    pub by: SponsorRef,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Reference to the sponsoring member
///
/// `showAs` is null for sponsors that are not individual members
/// (e.g. a government department).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorRef {
    #[serde(rename = "showAs", default)]
    pub show_as: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

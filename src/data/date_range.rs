//! Validated calendar date ranges

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Errors raised when constructing a date range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `since` is not strictly before `until`
    #[error("Invalid date range: 'since' date {since} must be before 'until' date {until}")]
    Inverted { since: NaiveDate, until: NaiveDate },
}

/// An inclusive `[since, until]` range of calendar dates with `since < until`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    since: NaiveDate,
    until: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting equal or inverted bounds
    pub fn new(since: NaiveDate, until: NaiveDate) -> Result<Self, RangeError> {
        if since >= until {
            return Err(RangeError::Inverted { since, until });
        }
        Ok(Self { since, until })
    }

    pub fn since(&self) -> NaiveDate {
        self.since
    }

    pub fn until(&self) -> NaiveDate {
        self.until
    }

    /// Whether `date` falls inside the range, both ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.since <= date && date <= self.until
    }
}

/// Checks that `since` is strictly before `until`
pub fn validate_date_range(since: NaiveDate, until: NaiveDate) -> Result<DateRange, RangeError> {
    DateRange::new(since, until)
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses an ISO-8601 date or datetime into a calendar date
///
/// Accepts `2019-01-01`, RFC 3339 datetimes such as `2019-01-01T10:00:00Z`,
/// and naive datetimes such as `2019-01-01T10:00:00`. Any time of day is
/// discarded.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

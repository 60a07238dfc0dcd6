//! Command-line interface parsing for the Oireachtas bills CLI
//!
//! This module handles parsing of CLI arguments using clap. Date arguments
//! are kept as text by clap and validated here so that a bad date reports a
//! readable error instead of a usage dump.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use crate::data::parse_calendar_date;

/// Error types for CLI argument parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The date text could not be parsed
    #[error("Invalid date: '{0}'. Expected format YYYY-MM-DD")]
    InvalidDate(String),
}

/// Oireachtas bills - query bills by sponsor or last-updated date
#[derive(Parser, Debug)]
#[command(name = "oireachtas")]
#[command(about = "Query Oireachtas bills by sponsoring member or last-updated date")]
#[command(version)]
pub struct Cli {
    /// Directory for cached API responses
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// How long cached responses stay fresh, in seconds [default: 3600]
    #[arg(long, global = true, value_name = "SECS")]
    pub cache_ttl_secs: Option<u64>,

    /// HTTP request timeout, in seconds [default: 30]
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Override the members endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub members_url: Option<String>,

    /// Override the legislation endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub legislation_url: Option<String>,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print full bill records as JSON instead of bill numbers
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available queries
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List bills sponsored by a member
    ///
    /// Example:
    ///   oireachtas sponsored MickBarry
    Sponsored {
        /// Member identifier (pId), e.g. "MickBarry" or "CatherineArdagh"
        pid: String,
    },
    /// List bills last updated within a date range (inclusive)
    ///
    /// Example:
    ///   oireachtas updated --since 2018-12-01 --until 2019-01-01
    Updated {
        /// Start date, YYYY-MM-DD
        #[arg(long, value_name = "DATE")]
        since: String,
        /// End date, YYYY-MM-DD; empty or omitted means today
        #[arg(long, value_name = "DATE")]
        until: Option<String>,
    },
}

/// A query with all arguments validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Sponsored {
        pid: String,
    },
    Updated {
        since: NaiveDate,
        until: Option<NaiveDate>,
    },
}

/// Parses a date argument.
///
/// # Arguments
/// * `s` - The date string from CLI
///
/// # Returns
/// * `Ok(NaiveDate)` for an ISO-8601 date or datetime (time is discarded)
/// * `Err(CliError::InvalidDate)` otherwise
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, CliError> {
    parse_calendar_date(s).ok_or_else(|| CliError::InvalidDate(s.to_string()))
}

/// Parses an optional date argument, treating blank text as absent.
pub fn parse_optional_date_arg(s: Option<&str>) -> Result<Option<NaiveDate>, CliError> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_date_arg(text).map(Some),
    }
}

impl Query {
    /// Creates a Query from a parsed subcommand.
    ///
    /// # Returns
    /// * `Ok(Query)` with dates parsed
    /// * `Err(CliError)` if a date could not be parsed
    pub fn from_command(command: &Command) -> Result<Self, CliError> {
        match command {
            Command::Sponsored { pid } => Ok(Query::Sponsored {
                pid: pid.trim().to_string(),
            }),
            Command::Updated { since, until } => Ok(Query::Updated {
                since: parse_date_arg(since)?,
                until: parse_optional_date_arg(until.as_deref())?,
            }),
        }
    }
}

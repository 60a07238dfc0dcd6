//! Oireachtas Bills CLI Library
//!
//! Fetches members and bills from the Oireachtas API through a local file
//! cache and filters bills by sponsor or last-updated date.

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod query;

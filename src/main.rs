//! Oireachtas Bills CLI - query bills from the Oireachtas API
//!
//! Lists bills sponsored by a member, or bills last updated within a date
//! range, using a local cache to avoid refetching within the cache lifetime.

use std::error::Error;
use std::process;

use clap::Parser;

use oireachtas::cli::{Cli, Query};
use oireachtas::config::FetchConfig;
use oireachtas::data::Bill;
use oireachtas::logging;
use oireachtas::query::BillQuery;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_file.as_deref()) {
        eprintln!("Warning: could not open log file, logging to stderr: {}", e);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(error = %e, "query failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Runs the requested query and prints the matching bills
async fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let query = Query::from_command(&cli.command)?;
    let bills = BillQuery::from_config(FetchConfig::from_cli(cli))?;

    match query {
        Query::Sponsored { pid } => {
            let results = bills.sponsored_by(&pid).await?;
            print_bills(
                &format!("Bills sponsored by the member '{}' are:", pid),
                &results,
                cli.json,
            )?;
        }
        Query::Updated { since, until } => {
            let results = bills.updated_between(since, until).await?;
            print_bills("Bills in the range are:", &results, cli.json)?;
        }
    }

    Ok(())
}

/// Prints bill numbers under `header`, or the full records as JSON
fn print_bills(header: &str, bills: &[Bill], json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(bills)?);
        return Ok(());
    }

    if bills.is_empty() {
        println!("No bills found.");
        return Ok(());
    }

    println!("{}", header);
    for bill in bills {
        println!("{}", bill.bill_no);
    }
    Ok(())
}

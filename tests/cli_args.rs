//! Integration tests for CLI argument handling
//!
//! Runs the binary to check help output, date validation and full queries
//! against a stubbed API.

use std::fs;
use std::process::Command;

use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_oireachtas"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute oireachtas")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("oireachtas"), "Help should mention oireachtas");
    assert!(stdout.contains("sponsored"), "Help should list sponsored");
    assert!(stdout.contains("updated"), "Help should list updated");
}

#[test]
fn test_missing_subcommand_fails() {
    let output = run_cli(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_date_prints_error_and_exits() {
    let temp_dir = TempDir::new().unwrap();
    let cache_dir = temp_dir.path().to_str().unwrap();
    let output = run_cli(&["--cache-dir", cache_dir, "updated", "--since", "01/12/2018"]);
    assert!(!output.status.success(), "Expected invalid date to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid date"),
        "Should print error message about invalid date: {}",
        stderr
    );
}

#[test]
fn test_inverted_range_prints_error_without_fetching() {
    let temp_dir = TempDir::new().unwrap();
    let cache_dir = temp_dir.path().to_str().unwrap();
    let output = run_cli(&[
        "--cache-dir",
        cache_dir,
        "--legislation-url",
        "http://127.0.0.1:9/legislation",
        "updated",
        "--since",
        "2023-11-04",
        "--until",
        "2023-11-03",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid date range"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("api_cache_legislation.json").exists());
}

/// Starts a stub API serving one known member and two bills
async fn start_api() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"member": {"pId": "MickBarry", "fullName": "Mick Barry"}}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/legislation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"bill": {"billNo": "77", "lastUpdated": "2019-01-01",
                          "shortTitleEn": "Housing Bill",
                          "sponsors": [{"sponsor": {"by": {"showAs": "Mick Barry"}}}]}},
                {"bill": {"billNo": "78", "lastUpdated": "2019-01-01",
                          "sponsors": [{"sponsor": {"by": {"showAs": "Someone Else"}}}]}}
            ]
        })))
        .mount(&server)
        .await;
    server
}

/// Runs the CLI against `server` with a cache in `temp_dir`
fn run_against(server: &MockServer, temp_dir: &TempDir, args: &[&str]) -> std::process::Output {
    let members_url = format!("{}/v1/members", server.uri());
    let legislation_url = format!("{}/v1/legislation", server.uri());
    let mut full_args = vec![
        "--cache-dir",
        temp_dir.path().to_str().unwrap(),
        "--members-url",
        &members_url,
        "--legislation-url",
        &legislation_url,
    ];
    full_args.extend_from_slice(args);
    run_cli(&full_args)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sponsored_prints_bill_numbers() {
    let server = start_api().await;
    let temp_dir = TempDir::new().unwrap();

    let output = run_against(&server, &temp_dir, &["sponsored", "MickBarry"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bills sponsored by the member 'MickBarry' are:"));
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.contains(&"77"));
    assert!(!lines.contains(&"78"));
    assert!(temp_dir.path().join("api_cache_members.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_keeps_full_bill_records() {
    let server = start_api().await;
    let temp_dir = TempDir::new().unwrap();

    let output = run_against(&server, &temp_dir, &["--json", "sponsored", "MickBarry"]);

    assert!(output.status.success());
    let bills: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let bills = bills.as_array().expect("stdout should be a JSON array");
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0]["billNo"], "77");
    assert_eq!(bills[0]["lastUpdated"], "2019-01-01");
    assert_eq!(bills[0]["shortTitleEn"], "Housing Bill");
    assert_eq!(bills[0]["sponsors"][0]["sponsor"]["by"]["showAs"], "Mick Barry");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_pid_prints_no_bills_found() {
    let server = start_api().await;
    let temp_dir = TempDir::new().unwrap();

    let output = run_against(&server, &temp_dir, &["sponsored", "NoSuchMember"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "No bills found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_log_file_records_fetch_event() {
    let server = start_api().await;
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("oireachtas.log");

    let output = run_against(
        &server,
        &temp_dir,
        &["--log-file", log_path.to_str().unwrap(), "sponsored", "MickBarry"],
    );

    assert!(output.status.success());
    let log = fs::read_to_string(&log_path).expect("log file should exist");
    assert!(log.contains("fetching data from API"), "log: {}", log);
    assert!(log.contains("/v1/members"), "log: {}", log);
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use chrono::NaiveDate;
    use clap::Parser;
    use oireachtas::cli::{parse_date_arg, Cli, Command, Query};

    #[test]
    fn test_cli_updated_with_both_dates() {
        let cli = Cli::parse_from([
            "oireachtas",
            "updated",
            "--since",
            "2018-12-01",
            "--until",
            "2019-01-01",
        ]);
        let query = Query::from_command(&cli.command).unwrap();
        assert_eq!(
            query,
            Query::Updated {
                since: NaiveDate::from_ymd_opt(2018, 12, 1).unwrap(),
                until: NaiveDate::from_ymd_opt(2019, 1, 1)
            }
        );
    }

    #[test]
    fn test_cli_empty_until_means_today() {
        let cli = Cli::parse_from(["oireachtas", "updated", "--since", "2018-12-01", "--until", ""]);
        let query = Query::from_command(&cli.command).unwrap();
        assert!(matches!(query, Query::Updated { until: None, .. }));
    }

    #[test]
    fn test_cli_sponsored_takes_pid() {
        let cli = Cli::parse_from(["oireachtas", "sponsored", "CatherineArdagh"]);
        assert_eq!(
            cli.command,
            Command::Sponsored {
                pid: "CatherineArdagh".to_string()
            }
        );
    }

    #[test]
    fn test_parse_date_arg_invalid_returns_error() {
        assert!(parse_date_arg("2019-02-30").is_err());
    }
}

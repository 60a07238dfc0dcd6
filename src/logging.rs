//! Log output setup

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise logs go to stderr at `warn`, or
/// are appended to `log_file` at `info` when one is given. If the file cannot
/// be opened, stderr logging is installed and the open error returned.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let file = log_file
        .map(|path| OpenOptions::new().create(true).append(true).open(path))
        .transpose();

    match file {
        Ok(Some(file)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(true))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
            Ok(())
        }
        Ok(None) => {
            init_stderr();
            Ok(())
        }
        Err(e) => {
            init_stderr();
            Err(e)
        }
    }
}

fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(false))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn env_filter(to_file: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(to_file)))
}

fn default_level(to_file: bool) -> &'static str {
    if to_file {
        "info"
    } else {
        "warn"
    }
}

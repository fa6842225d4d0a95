//! File-only tracing setup.

use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Env var naming the log file. Logging stays off when unset.
pub const LOG_ENV_VAR: &str = "BEER_TRACKER_LOG";

/// Install a file subscriber when `BEER_TRACKER_LOG` is set.
///
/// The terminal belongs to the UI, so nothing goes to stdout. Level comes
/// from `RUST_LOG` (default `info`). Returns the file actually written.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;
    let path = log_file_path(Path::new(&base), Utc::now(), std::process::id());

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry().with(filter).with(layer).init();
    Some(path)
}

/// `<base>.<unix seconds>.<pid>`: one file per process.
fn log_file_path(base: &Path, started: DateTime<Utc>, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", started.timestamp(), pid));
    PathBuf::from(name)
}

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Unset means no logging.
pub const LOG_ENV: &str = "TALLY_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default because stdout belongs to the TUI.
/// Set `TALLY_LOG` to a file path to enable it; `RUST_LOG` controls the
/// filter and defaults to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_ENV) else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = unique_log_path(&log_path, timestamp, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{path}.{timestamp}.{pid}`, so concurrent instances never share a file.
pub fn unique_log_path(base: &str, timestamp: u64, pid: u32) -> String {
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        assert_eq!(
            unique_log_path("/tmp/tally.log", 1700000000, 42),
            "/tmp/tally.log.1700000000.42"
        );
    }
}

use crate::common::constants::{LOG_DIR, LOG_FILE_NAME};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber: a human-readable console layer plus a
/// daily-rolling JSON file under `logs/`. `RUST_LOG` overrides the filter.
///
/// The returned guard flushes the file writer when dropped, so the binary
/// holds it for the whole run.
pub fn init_logging() -> WorkerGuard {
    if let Err(e) = std::fs::create_dir_all(LOG_DIR) {
        eprintln!("cannot create {LOG_DIR}/ ({e}); file logging may be lost");
    }

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_writer(file_writer);
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

/// Warnings from dependencies, info from this crate
fn default_filter() -> EnvFilter {
    let filter = EnvFilter::new("warn");
    match format!("{}=info", env!("CARGO_CRATE_NAME")).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_raises_this_crate_to_info() {
        let rendered = default_filter().to_string();
        assert!(rendered.contains("live_scores=info"), "{rendered}");
        assert!(rendered.contains("warn"), "{rendered}");
    }
}

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file.
pub const LOG_FILE_ENV: &str = "BUSSTOPS_LOG";

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Output goes to
/// stderr unless `BUSSTOPS_LOG` names a file, in which case events are
/// appended there without ANSI colors.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = std::env::var(LOG_FILE_ENV).ok();
    let file = log_path.as_deref().and_then(|path| {
        let opened = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path);
        match opened {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("Warning: Failed to open log file {}: {}", path, err);
                None
            }
        }
    });

    let registry = tracing_subscriber::registry().with(filter);

    match file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            )
            .init(),
        None => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            )
            .init(),
    }
}

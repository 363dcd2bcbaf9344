use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the non-blocking file writer alive; drop it only at process exit.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn file_logging_enabled() -> bool {
    flag_enabled(std::env::var("ENABLE_FILE_LOGS").ok().as_deref())
}

fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("true" | "1"))
}

/// Installs the global subscriber for `vocab-session`.
///
/// Console output goes to stderr: stdout is reserved for the session summary
/// JSON so it can be piped into other tools. With `ENABLE_FILE_LOGS` set, a
/// daily-rolling `vocab-session.log` under `LOG_DIR` (default `./logs`) gets
/// the same events without ANSI colors; the returned guard must outlive the
/// session or buffered lines are lost.
pub fn init_tracing(log_level: &str) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    if file_logging_enabled() {
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
        if let Err(err) = std::fs::create_dir_all(&log_dir) {
            eprintln!("failed to create log directory {log_dir}: {err}");
        } else {
            let file_appender =
                RollingFileAppender::new(Rotation::DAILY, &log_dir, "vocab-session.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .init();

            return Some(FileLogGuard { _guard: guard });
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();

    None
}

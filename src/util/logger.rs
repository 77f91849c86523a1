use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Holds the non-blocking writer guards; dropping them stops the background
/// flush threads, so the instance must live as long as the process.
pub struct Logger {
    pub guards: Vec<WorkerGuard>,
}

impl Logger {
    /// Install the global subscriber. Never fails: when the log directory
    /// cannot be created the service falls back to console-only logging.
    pub fn new() -> Self {
        let guards = Self::setup_logging();
        Logger { guards }
    }

    fn console_filter() -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,homefix_backend=debug"))
    }

    fn setup_logging() -> Vec<WorkerGuard> {
        let dirs = ["logs", "logs/error", "logs/json", "logs/error/json"];
        if let Err(e) = dirs.iter().try_for_each(std::fs::create_dir_all) {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_ansi(true)
                        .with_filter(Self::console_filter()),
                )
                .init();
            tracing::warn!("⚠️ Could not create log directories: {} (console logging only)", e);
            return Vec::new();
        }

        let file_log_level =
            std::env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
        let error_file_log_level =
            std::env::var("ERROR_FILE_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let general_file = rolling::daily("logs", "homefix-backend.log");
        let (non_blocking_general, general_guard) = non_blocking(general_file);

        let error_file = rolling::daily("logs/error", "homefix-backend-error.log");
        let (non_blocking_error, error_guard) = non_blocking(error_file);

        let json_file = rolling::daily("logs/json", "homefix-backend.json");
        let (non_blocking_json, json_guard) = non_blocking(json_file);

        let error_json_file = rolling::daily("logs/error/json", "homefix-backend-error.json");
        let (non_blocking_error_json, error_json_guard) = non_blocking(error_json_file);

        tracing_subscriber::registry()
            .with(
                // Console output - pretty format for development
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(true)
                    .with_filter(Self::console_filter()),
            )
            .with(
                // General log file - all logs
                fmt::layer()
                    .with_writer(non_blocking_general)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(file_log_level.clone())),
            )
            .with(
                // Error log file
                fmt::layer()
                    .with_writer(non_blocking_error)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(error_file_log_level.clone())),
            )
            .with(
                // Structured copy of the general log for ingestion
                fmt::layer()
                    .json()
                    .with_writer(non_blocking_json)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(file_log_level)),
            )
            .with(
                // Structured copy of the error log
                fmt::layer()
                    .json()
                    .with_writer(non_blocking_error_json)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(error_file_log_level)),
            )
            .init();

        vec![general_guard, error_guard, json_guard, error_json_guard]
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

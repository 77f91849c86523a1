pub mod app_conf;
pub mod email_conf;
pub mod facebook_conf;
pub mod notify_conf;
pub mod sync_conf;

pub use app_conf::AppConfig;
pub use email_conf::EmailConfig;
pub use facebook_conf::FacebookConfig;
pub use notify_conf::NotificationConfig;
pub use sync_conf::SyncConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

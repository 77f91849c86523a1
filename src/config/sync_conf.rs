use std::env;
use tracing::debug;

/// Schedule for the background Facebook review sync.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Seconds between sync runs (default: 4 hours)
    pub interval_secs: u64,
    /// Whether the background sync runs at all
    pub enabled: bool,
}

impl SyncConfig {
    /// Create SyncConfig from environment variables
    pub fn from_env() -> Self {
        let interval_secs = env::var("FACEBOOK_SYNC_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(14400);

        let enabled = env::var("FACEBOOK_SYNC_ENABLED")
            .map(|s| !s.eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        debug!("Review sync: enabled={}, interval={}s", enabled, interval_secs);

        SyncConfig {
            interval_secs,
            enabled,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            interval_secs: 14400,
            enabled: true,
        }
    }
}

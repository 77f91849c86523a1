use std::env;
use tracing::debug;

use crate::config::ConfigError;

/// Recipient addresses for the intake notification emails.
///
/// These always resolve: the company inboxes are the defaults, so a bare
/// deployment still routes quote and contact alerts somewhere sensible.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Inbox for new quote and contact form submissions
    pub team_email: String,
    /// Inbox for testimonial approval alerts
    pub admin_email: String,
}

impl NotificationConfig {
    /// Create NotificationConfig from environment variables
    pub fn from_env() -> Self {
        let team_email = env::var("TEAM_NOTIFICATION_EMAIL")
            .unwrap_or_else(|_| "quotes@homefixandbuild.org".to_string());
        let admin_email = env::var("ADMIN_NOTIFICATION_EMAIL")
            .unwrap_or_else(|_| "info@homefixandbuild.org".to_string());
        debug!("Notification recipients: team={}, admin={}", team_email, admin_email);

        NotificationConfig {
            team_email,
            admin_email,
        }
    }

    /// Create NotificationConfig for testing
    pub fn from_test_env() -> Self {
        NotificationConfig {
            team_email: "team@homefixandbuild.org".to_string(),
            admin_email: "admin@homefixandbuild.org".to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.team_email.contains('@') {
            return Err(ConfigError::ValidationError(
                "Team notification email is not a valid address".to_string(),
            ));
        }
        if !self.admin_email.contains('@') {
            return Err(ConfigError::ValidationError(
                "Admin notification email is not a valid address".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            team_email: "quotes@homefixandbuild.org".to_string(),
            admin_email: "info@homefixandbuild.org".to_string(),
        }
    }
}

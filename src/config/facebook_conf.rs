use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Default Graph API root. Overridable for tests and API version bumps.
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com/v18.0";

/// Facebook Graph API settings for the review sync and page posting.
///
/// Both the page id and the page access token are required; when either is
/// missing the integration is disabled and the site serves curated and
/// website testimonials only.
#[derive(Debug, Clone)]
pub struct FacebookConfig {
    /// Facebook page id the reviews are read from and posts are written to
    pub page_id: String,
    /// Long-lived page access token
    pub access_token: String,
    /// Graph API base URL, including the version segment
    pub graph_base_url: String,
    /// Maximum number of ratings fetched per sync
    pub review_limit: u32,
    /// Whether new website testimonials are forwarded to the page feed
    pub auto_post: bool,
}

impl FacebookConfig {
    /// Create FacebookConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading Facebook configuration from environment variables");

        let page_id = env::var("FACEBOOK_PAGE_ID").map_err(|_| {
            warn!("FACEBOOK_PAGE_ID environment variable not found");
            ConfigError::EnvVarNotFound("FACEBOOK_PAGE_ID".to_string())
        })?;
        debug!("Facebook page id: {}", page_id);

        let access_token = env::var("FACEBOOK_PAGE_ACCESS_TOKEN").map_err(|_| {
            warn!("FACEBOOK_PAGE_ACCESS_TOKEN environment variable not found");
            ConfigError::EnvVarNotFound("FACEBOOK_PAGE_ACCESS_TOKEN".to_string())
        })?;
        debug!("Facebook page access token: [REDACTED]");

        let graph_base_url = env::var("FACEBOOK_GRAPH_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GRAPH_BASE_URL.to_string());
        debug!("Graph API base URL: {}", graph_base_url);

        let review_limit = env::var("FACEBOOK_REVIEW_LIMIT")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(50);

        let auto_post = env::var("FACEBOOK_AUTO_POST")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        debug!("Review limit: {}, auto-post: {}", review_limit, auto_post);

        let config = FacebookConfig {
            page_id,
            access_token,
            graph_base_url,
            review_limit,
            auto_post,
        };

        config.validate()?;
        info!("Facebook configuration loaded successfully");
        Ok(config)
    }

    /// Create FacebookConfig for testing
    pub fn from_test_env() -> Self {
        FacebookConfig {
            page_id: "1234567890".to_string(),
            access_token: "test-page-token".to_string(),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            review_limit: 50,
            auto_post: false,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_id.trim().is_empty() {
            error!("Facebook page id is empty");
            return Err(ConfigError::ValidationError(
                "Facebook page id cannot be empty".to_string(),
            ));
        }

        if self.access_token.trim().is_empty() {
            error!("Facebook access token is empty");
            return Err(ConfigError::ValidationError(
                "Facebook access token cannot be empty".to_string(),
            ));
        }

        if self.graph_base_url.trim().is_empty() {
            error!("Graph API base URL is empty");
            return Err(ConfigError::ValidationError(
                "Graph API base URL cannot be empty".to_string(),
            ));
        }

        // The Graph API caps ratings pagination at 100 entries per call.
        if self.review_limit == 0 || self.review_limit > 100 {
            error!("Invalid review limit: {}", self.review_limit);
            return Err(ConfigError::ValidationError(
                "Review limit must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

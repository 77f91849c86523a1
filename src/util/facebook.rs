use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::config::FacebookConfig;

/// Fields requested for every page rating.
const RATING_FIELDS: &str = "review_text,reviewer,rating,created_time";

/// Facebook Graph API errors
#[derive(Debug, thiserror::Error)]
pub enum FacebookError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Facebook API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response parse error: {0}")]
    Parse(String),
}

/// A page rating as returned by the Graph API `ratings` edge.
///
/// Every field except the rating itself is optional on the wire; reviews
/// that lack what the quality gate needs are dropped during normalization
/// rather than failing the whole fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub reviewer: Option<Reviewer>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub created_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reviewer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct RatingsEnvelope {
    #[serde(default)]
    data: Vec<RawReview>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorEnvelope {
    error: GraphErrorBody,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PostEnvelope {
    id: String,
}

/// Thin client for the two Graph API calls the site makes: reading page
/// ratings and publishing to the page feed. The access token travels only
/// in requests, never in logs.
pub struct FacebookClient {
    pub config: FacebookConfig,
    http: reqwest::Client,
}

impl FacebookClient {
    pub fn new(config: FacebookConfig) -> Result<Self, FacebookError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| FacebookError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Fetch the page's ratings, newest batch first.
    #[instrument(skip(self), fields(page_id = %self.config.page_id))]
    pub async fn fetch_ratings(&self) -> Result<Vec<RawReview>, FacebookError> {
        let url = format!(
            "{}/{}/ratings",
            self.config.graph_base_url, self.config.page_id
        );
        info!("Fetching Facebook reviews from {}", url);

        let limit = self.config.review_limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("access_token", self.config.access_token.as_str()),
                ("fields", RATING_FIELDS),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Facebook ratings request failed: {}", e);
                FacebookError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<GraphErrorEnvelope>()
                .await
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| "unrecognized Facebook API error".to_string());
            error!("Facebook API returned {}: {}", status, message);
            return Err(FacebookError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope = response
            .json::<RatingsEnvelope>()
            .await
            .map_err(|e| FacebookError::Parse(e.to_string()))?;
        debug!("Fetched {} raw Facebook reviews", envelope.data.len());

        Ok(envelope.data)
    }

    /// Publish a message to the page feed, returning the new post id.
    #[instrument(skip(self, message), fields(page_id = %self.config.page_id))]
    pub async fn publish_post(&self, message: &str) -> Result<String, FacebookError> {
        let url = format!("{}/{}/feed", self.config.graph_base_url, self.config.page_id);
        info!("Publishing post to Facebook page feed");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "message": message,
                "access_token": self.config.access_token,
            }))
            .send()
            .await
            .map_err(|e| {
                error!("Facebook feed request failed: {}", e);
                FacebookError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<GraphErrorEnvelope>()
                .await
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| "unrecognized Facebook API error".to_string());
            error!("Facebook API returned {}: {}", status, message);
            return Err(FacebookError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope = response
            .json::<PostEnvelope>()
            .await
            .map_err(|e| FacebookError::Parse(e.to_string()))?;
        info!("Published Facebook post {}", envelope.id);

        Ok(envelope.id)
    }
}

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, instrument};

use crate::config::SyncConfig;
use crate::model::testimonial::{Testimonial, TestimonialSource};
use crate::util::facebook::{FacebookClient, RawReview};

/// Reviews must say something: anything at or under this many trimmed
/// characters is dropped as too thin to display.
const MIN_REVIEW_CHARS: usize = 10;

/// Only clearly positive reviews make the site.
const MIN_REVIEW_RATING: u8 = 4;

/// Graph timestamps come as RFC 3339 or the older `+0000` offset form.
fn parse_created_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Turn one raw page rating into a displayable testimonial.
///
/// Returns None for anything failing the quality gate: absent or short
/// text, a rating under four stars, or a record missing the reviewer or
/// timestamp needed for a stable id. Dropping is filtering, not failure.
pub fn normalize_review(review: &RawReview) -> Option<Testimonial> {
    let text = review.review_text.as_deref()?.trim();
    if text.chars().count() <= MIN_REVIEW_CHARS {
        return None;
    }
    if review.rating < MIN_REVIEW_RATING {
        return None;
    }
    let reviewer = review.reviewer.as_ref()?;
    let created = parse_created_time(review.created_time.as_deref()?)?;

    Some(Testimonial {
        // Deterministic: the same review keeps the same id across syncs,
        // so downstream consumers can deduplicate by key.
        id: format!("facebook_{}_{}", reviewer.id, created.timestamp_millis()),
        quote: text.to_string(),
        name: reviewer.name.clone(),
        location: String::new(),
        source: TestimonialSource::Facebook,
        rating: Some(review.rating),
        submitted: Some(created),
        approved: true,
    })
}

pub fn normalize_reviews(reviews: &[RawReview]) -> Vec<Testimonial> {
    reviews.iter().filter_map(normalize_review).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyncOutcome {
    Synced,
    CredentialsMissing,
    FetchFailed,
}

/// What one sync run did, for the logs and the manual-sync endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    pub reviews_synced: usize,
    pub timestamp: DateTime<Utc>,
}

/// Periodically pulls page reviews so fresh Facebook feedback shows up on
/// the site without anyone touching the admin panel.
pub struct SyncService {
    config: SyncConfig,
    facebook: Option<Arc<FacebookClient>>,
}

impl SyncService {
    pub fn new(config: SyncConfig, facebook: Option<Arc<FacebookClient>>) -> Self {
        SyncService { config, facebook }
    }

    /// Spawn the background sync loop. Returns immediately; the loop runs
    /// for the life of the process.
    pub fn run(self: Arc<Self>) {
        if !self.config.enabled {
            info!("Facebook review sync disabled by configuration");
            return;
        }
        if self.facebook.is_none() {
            info!("Facebook review sync idle: credentials not configured");
        }

        info!(
            "⏰ Facebook review sync scheduled every {}s",
            self.config.interval_secs
        );

        tokio::spawn(async move {
            let mut timer = interval(Duration::from_secs(self.config.interval_secs));
            // A stalled run must not cause a burst of catch-up syncs.
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick fires immediately; consume it so the first
            // sync happens one full interval after startup.
            timer.tick().await;

            loop {
                timer.tick().await;
                let (report, _) = self.sync_once().await;
                debug!(
                    "Scheduled sync finished: {:?} ({} reviews)",
                    report.outcome, report.reviews_synced
                );
            }
        });
    }

    /// One sync pass. Shared by the timer and the manual HTTP endpoint;
    /// every outcome is reported, never thrown.
    #[instrument(skip(self))]
    pub async fn sync_once(&self) -> (SyncReport, Vec<Testimonial>) {
        info!("🔄 Starting Facebook review sync");

        let Some(client) = &self.facebook else {
            error!("❌ Facebook credentials not configured");
            return (
                SyncReport {
                    outcome: SyncOutcome::CredentialsMissing,
                    reviews_synced: 0,
                    timestamp: Utc::now(),
                },
                Vec::new(),
            );
        };

        match client.fetch_ratings().await {
            Ok(raw) => {
                let testimonials = normalize_reviews(&raw);
                info!(
                    "✅ Found {} quality Facebook reviews to sync ({} fetched)",
                    testimonials.len(),
                    raw.len()
                );
                for t in &testimonials {
                    debug!(
                        "📝 Review ready: {} ({}★) {}",
                        t.name,
                        t.rating.unwrap_or_default(),
                        t.quote.chars().take(50).collect::<String>()
                    );
                }
                (
                    SyncReport {
                        outcome: SyncOutcome::Synced,
                        reviews_synced: testimonials.len(),
                        timestamp: Utc::now(),
                    },
                    testimonials,
                )
            }
            Err(e) => {
                error!("❌ Facebook review sync failed: {e}");
                (
                    SyncReport {
                        outcome: SyncOutcome::FetchFailed,
                        reviews_synced: 0,
                        timestamp: Utc::now(),
                    },
                    Vec::new(),
                )
            }
        }
    }
}

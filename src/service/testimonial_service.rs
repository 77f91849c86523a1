use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::config::NotificationConfig;
use crate::dto::testimonial_dto::SubmitTestimonialRequest;
use crate::model::testimonial::{
    baseline_testimonials, sort_newest_first, Testimonial, TestimonialSource, TestimonialStats,
};
use crate::model::submission::SubmissionStamp;
use crate::repository::testimonial_repo::TestimonialRepository;
use crate::service::facebook_sync::normalize_reviews;
use crate::util::email::SmtpEmailService;
use crate::util::error::ServiceError;
use crate::util::facebook::FacebookClient;
use crate::util::validation::trimmed;

/// The message published to the page feed for a testimonial.
pub fn feed_post_message(name: &str, quote: &str, location: &str) -> String {
    let location_line = if location.is_empty() {
        String::new()
    } else {
        format!("📍 {}\n\n", location)
    };
    format!(
        "🌟 Amazing feedback from {name}!\n\n\"{quote}\"\n\n{location_line}\
         Thank you for trusting 3 Boys Handyman LLC with your project! 🏡✨\n\n\
         #CustomerTestimonial #3BoysHandyman #QualityCraftsmanship"
    )
}

#[async_trait]
pub trait TestimonialService: Send + Sync {
    /// The full feed: curated entries, live Facebook reviews and approved
    /// website submissions, newest first, plus per-source counts.
    async fn list_testimonials(
        &self,
    ) -> Result<(Vec<Testimonial>, TestimonialStats), ServiceError>;

    async fn submit_testimonial(
        &self,
        request: SubmitTestimonialRequest,
    ) -> Result<Testimonial, ServiceError>;

    /// Publish a testimonial to the Facebook page, returning the post id.
    async fn post_to_facebook(
        &self,
        name: &str,
        quote: &str,
        location: &str,
    ) -> Result<String, ServiceError>;
}

pub struct TestimonialServiceImpl {
    repo: Arc<dyn TestimonialRepository>,
    facebook: Option<Arc<FacebookClient>>,
    email: Option<Arc<SmtpEmailService>>,
    notify: NotificationConfig,
    auto_post: bool,
    stamp: SubmissionStamp,
}

impl TestimonialServiceImpl {
    pub fn new(
        repo: Arc<dyn TestimonialRepository>,
        facebook: Option<Arc<FacebookClient>>,
        email: Option<Arc<SmtpEmailService>>,
        notify: NotificationConfig,
    ) -> Self {
        let auto_post = facebook
            .as_ref()
            .map(|client| client.config.auto_post)
            .unwrap_or(false);
        TestimonialServiceImpl {
            repo,
            facebook,
            email,
            notify,
            auto_post,
            stamp: SubmissionStamp::new(),
        }
    }

    /// Live Facebook reviews, already quality-gated. A failed fetch serves
    /// the rest of the feed instead of an error page.
    async fn facebook_testimonials(&self) -> Vec<Testimonial> {
        let Some(client) = &self.facebook else {
            return Vec::new();
        };
        match client.fetch_ratings().await {
            Ok(raw) => normalize_reviews(&raw),
            Err(e) => {
                warn!("Facebook reviews unavailable, serving without them: {e}");
                Vec::new()
            }
        }
    }

    fn spawn_submission_side_effects(&self, testimonial: &Testimonial) {
        match &self.email {
            Some(email) => {
                let email = Arc::clone(email);
                let entry = testimonial.clone();
                let admin_to = self.notify.admin_email.clone();
                tokio::spawn(async move {
                    if let Err(e) = email.send_testimonial_alert(&entry, &admin_to).await {
                        error!("Failed to send testimonial alert for {}: {e}", entry.id);
                    }
                });
            }
            None => info!(
                "Email service not configured, testimonial {} logged only",
                testimonial.id
            ),
        }

        if self.auto_post {
            if let Some(client) = self.facebook.clone() {
                let message =
                    feed_post_message(&testimonial.name, &testimonial.quote, &testimonial.location);
                let id = testimonial.id.clone();
                tokio::spawn(async move {
                    match client.publish_post(&message).await {
                        Ok(post_id) => {
                            info!("Auto-posted testimonial {id} to Facebook as {post_id}")
                        }
                        Err(e) => error!("Failed to auto-post testimonial {id}: {e}"),
                    }
                });
            }
        }
    }
}

#[async_trait]
impl TestimonialService for TestimonialServiceImpl {
    #[instrument(skip(self))]
    async fn list_testimonials(
        &self,
    ) -> Result<(Vec<Testimonial>, TestimonialStats), ServiceError> {
        let mut items = baseline_testimonials();
        items.extend(self.facebook_testimonials().await);
        items.extend(self.repo.list_approved().await.map_err(ServiceError::from)?);

        sort_newest_first(&mut items);
        let stats = TestimonialStats::from_items(&items);

        info!(
            "Serving {} testimonials ({} external, {} website)",
            stats.total, stats.facebook, stats.website
        );
        Ok((items, stats))
    }

    #[instrument(skip(self, request))]
    async fn submit_testimonial(
        &self,
        request: SubmitTestimonialRequest,
    ) -> Result<Testimonial, ServiceError> {
        let quote = trimmed(request.quote.as_deref());
        let name = trimmed(request.name.as_deref());
        if quote.is_empty() || name.is_empty() {
            info!("Rejected testimonial submission without quote or name");
            return Err(ServiceError::InvalidInput(
                "Quote and name are required".to_string(),
            ));
        }

        let testimonial = Testimonial {
            id: format!("web_{}", self.stamp.next_millis()),
            quote,
            name,
            location: trimmed(request.location.as_deref()),
            source: TestimonialSource::Website,
            rating: None,
            submitted: Some(Utc::now()),
            // Submissions go live only after a human approves them.
            approved: false,
        };

        let stored = self
            .repo
            .append(testimonial)
            .await
            .map_err(ServiceError::from)?;

        info!("💬 New testimonial {} from {}", stored.id, stored.name);
        self.spawn_submission_side_effects(&stored);

        Ok(stored)
    }

    #[instrument(skip(self, quote), fields(name = %name))]
    async fn post_to_facebook(
        &self,
        name: &str,
        quote: &str,
        location: &str,
    ) -> Result<String, ServiceError> {
        let client = self.facebook.as_ref().ok_or_else(|| {
            warn!("Facebook posting requested without credentials");
            ServiceError::ConfigurationMissing("Facebook credentials not configured".to_string())
        })?;

        if name.trim().is_empty() || quote.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Testimonial name and quote are required".to_string(),
            ));
        }

        let message = feed_post_message(name.trim(), quote.trim(), location.trim());
        let post_id = client.publish_post(&message).await.map_err(|e| {
            error!("Failed to post testimonial to Facebook: {e}");
            ServiceError::Upstream("Failed to post testimonial to Facebook".to_string())
        })?;

        info!("Posted testimonial from {} to Facebook as {}", name, post_id);
        Ok(post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_post_message_with_location() {
        let message = feed_post_message("Sarah M.", "Great deck rebuild", "Somerville, MA");
        assert!(message.contains("Amazing feedback from Sarah M.!"));
        assert!(message.contains("\"Great deck rebuild\""));
        assert!(message.contains("📍 Somerville, MA"));
        assert!(message.contains("#CustomerTestimonial"));
    }

    #[test]
    fn test_feed_post_message_without_location() {
        let message = feed_post_message("Sarah M.", "Great deck rebuild", "");
        assert!(!message.contains("📍"));
        assert!(message.contains("Thank you for trusting 3 Boys Handyman LLC"));
    }
}

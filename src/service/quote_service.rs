use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument};

use crate::config::NotificationConfig;
use crate::dto::quote_dto::QuoteFormRequest;
use crate::model::submission::{QuoteRequest, SubmissionStamp};
use crate::util::email::SmtpEmailService;
use crate::util::error::ServiceError;
use crate::util::validation::{format_phone, trimmed, validate_fields, FormKind};

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn submit_quote(&self, form: QuoteFormRequest) -> Result<QuoteRequest, ServiceError>;
}

pub struct QuoteServiceImpl {
    email: Option<Arc<SmtpEmailService>>,
    notify: NotificationConfig,
    stamp: SubmissionStamp,
}

impl QuoteServiceImpl {
    pub fn new(email: Option<Arc<SmtpEmailService>>, notify: NotificationConfig) -> Self {
        QuoteServiceImpl {
            email,
            notify,
            stamp: SubmissionStamp::new(),
        }
    }

    /// Emails run detached: the customer's response never waits on SMTP,
    /// and a mailer outage only shows up in the logs.
    fn spawn_notifications(&self, record: &QuoteRequest) {
        let Some(email) = self.email.clone() else {
            info!(
                "Email service not configured, skipping notifications for {}",
                record.project_id
            );
            return;
        };
        let record = record.clone();
        let team_to = self.notify.team_email.clone();
        tokio::spawn(async move {
            if let Err(e) = email.send_quote_confirmation(&record).await {
                error!("Failed to send quote confirmation for {}: {e}", record.project_id);
            }
            if let Err(e) = email.send_quote_team_notification(&record, &team_to).await {
                error!("Failed to notify team about {}: {e}", record.project_id);
            }
        });
    }
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, form))]
    async fn submit_quote(&self, form: QuoteFormRequest) -> Result<QuoteRequest, ServiceError> {
        if let Err(report) = validate_fields(FormKind::Quote, &form.fields()) {
            info!(
                "Rejected quote request: {} missing, {} invalid",
                report.missing_fields.len(),
                report.field_errors.len()
            );
            return Err(ServiceError::Validation(report));
        }

        let record = QuoteRequest {
            project_id: format!("PROJECT-{}", self.stamp.next_millis()),
            customer_name: trimmed(form.customer_name.as_deref()),
            email: trimmed(form.email.as_deref()),
            phone: format_phone(&trimmed(form.phone.as_deref())),
            address: trimmed(form.address.as_deref()),
            project_type: trimmed(form.project_type.as_deref()),
            project_details: trimmed(form.project_details.as_deref()),
            timeframe: form.timeframe.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(String::from),
            estimated_budget: form
                .estimated_budget
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            received_at: Utc::now(),
        };

        info!(
            "🏗️ New quote request {} ({}) from {}",
            record.project_id, record.project_type, record.customer_name
        );

        self.spawn_notifications(&record);

        Ok(record)
    }
}

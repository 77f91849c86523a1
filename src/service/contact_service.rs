use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument};

use crate::config::NotificationConfig;
use crate::dto::contact_dto::ContactFormRequest;
use crate::model::submission::{ContactMessage, SubmissionStamp};
use crate::util::email::SmtpEmailService;
use crate::util::error::ServiceError;
use crate::util::validation::{format_phone, trimmed, validate_fields, FormKind};

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit_message(&self, form: ContactFormRequest)
        -> Result<ContactMessage, ServiceError>;
}

pub struct ContactServiceImpl {
    email: Option<Arc<SmtpEmailService>>,
    notify: NotificationConfig,
    stamp: SubmissionStamp,
}

impl ContactServiceImpl {
    pub fn new(email: Option<Arc<SmtpEmailService>>, notify: NotificationConfig) -> Self {
        ContactServiceImpl {
            email,
            notify,
            stamp: SubmissionStamp::new(),
        }
    }

    fn spawn_notification(&self, record: &ContactMessage) {
        let Some(email) = self.email.clone() else {
            info!(
                "Email service not configured, logging contact submission {} only",
                record.submission_id
            );
            return;
        };
        let record = record.clone();
        let team_to = self.notify.team_email.clone();
        tokio::spawn(async move {
            if let Err(e) = email.send_contact_notification(&record, &team_to).await {
                error!(
                    "Failed to forward contact submission {}: {e}",
                    record.submission_id
                );
            }
        });
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, form))]
    async fn submit_message(
        &self,
        form: ContactFormRequest,
    ) -> Result<ContactMessage, ServiceError> {
        if let Err(report) = validate_fields(FormKind::Contact, &form.fields()) {
            info!(
                "Rejected contact submission: {} missing, {} invalid",
                report.missing_fields.len(),
                report.field_errors.len()
            );
            return Err(ServiceError::Validation(report));
        }

        let record = ContactMessage {
            submission_id: format!("CONTACT-{}", self.stamp.next_millis()),
            first_name: trimmed(form.first_name.as_deref()),
            last_name: trimmed(form.last_name.as_deref()),
            email: trimmed(form.email.as_deref()),
            phone: format_phone(&trimmed(form.phone.as_deref())),
            service: trimmed(form.service.as_deref()),
            project_details: trimmed(form.project_details.as_deref()),
            received_at: Utc::now(),
        };

        info!(
            "📬 New contact message {} from {} {} ({})",
            record.submission_id, record.first_name, record.last_name, record.service
        );

        self.spawn_notification(&record);

        Ok(record)
    }
}

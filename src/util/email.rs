use crate::config::{ConfigError, EmailConfig};
use crate::model::submission::{ContactMessage, QuoteRequest};
use crate::model::testimonial::Testimonial;
use crate::util::validation::is_valid_email;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info, instrument};

/// Email service errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("SMTP error: {0}")]
    SmtpError(String),

    #[error("Message building error: {0}")]
    MessageError(String),

    #[error("Address error: {0}")]
    AddressError(String),
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// Email message builder
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
}

impl EmailMessage {
    pub fn new(to: String, subject: String) -> Self {
        Self {
            to,
            subject,
            text_body: None,
            html_body: None,
        }
    }

    pub fn with_text_body(mut self, body: String) -> Self {
        self.text_body = Some(body);
        self
    }

    pub fn with_html_body(mut self, body: String) -> Self {
        self.html_body = Some(body);
        self
    }
}

/// SMTP transport plus the intake notification templates.
///
/// The service is optional everywhere it is injected: without SMTP
/// credentials the site still accepts submissions and only the emails are
/// skipped.
pub struct SmtpEmailService {
    pub config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    /// Create a new SMTP email service
    #[instrument(skip(config), fields(host = %config.smtp_host, port = config.smtp_port))]
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        info!("Initializing SMTP email service");

        config.validate().map_err(EmailError::from)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(std::time::Duration::from_secs(
                    config.connection_timeout_secs,
                )));

        if config.use_tls {
            let tls_parameters = TlsParameters::new(config.smtp_host.clone())
                .map_err(|e| EmailError::ConfigError(format!("TLS configuration error: {}", e)))?;

            if config.use_starttls {
                transport_builder = transport_builder.tls(Tls::Required(tls_parameters));
            } else {
                transport_builder = transport_builder.tls(Tls::Wrapper(tls_parameters));
            }
        } else {
            transport_builder = transport_builder.tls(Tls::None);
        }

        if !config.smtp_username.is_empty() && !config.smtp_password.is_empty() {
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            transport_builder = transport_builder.credentials(credentials);
        }

        let transport = transport_builder.build();

        info!("SMTP email service initialized successfully");
        Ok(Self { config, transport })
    }

    /// Send an email message
    #[instrument(skip(self, message), fields(to = %message.to, subject = %message.subject))]
    pub async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!("Sending email to: {}", message.to);

        self.validate_email_address(&message.to)?;

        let email_message = self.build_message(message)?;

        self.transport.send(email_message).await.map_err(|e| {
            error!("Failed to send email: {}", e);
            EmailError::SmtpError(format!("Failed to send email: {}", e))
        })?;

        info!("Email sent successfully");
        Ok(())
    }

    /// Confirmation sent to the customer after a quote request.
    #[instrument(skip(self, quote), fields(to = %quote.email, project_id = %quote.project_id))]
    pub async fn send_quote_confirmation(&self, quote: &QuoteRequest) -> Result<(), EmailError> {
        let message = EmailMessage::new(
            quote.email.clone(),
            format!("Quote Request Received - {}", quote.project_type),
        )
        .with_text_body(self.quote_confirmation_text(quote))
        .with_html_body(self.quote_confirmation_html(quote));

        self.send_email(message).await
    }

    /// Heads-up to the crew inbox about a new quote request.
    #[instrument(skip(self, quote), fields(to = %to, project_id = %quote.project_id))]
    pub async fn send_quote_team_notification(
        &self,
        quote: &QuoteRequest,
        to: &str,
    ) -> Result<(), EmailError> {
        let message = EmailMessage::new(
            to.to_string(),
            format!("🔨 New Quote Request: {}", quote.project_type),
        )
        .with_text_body(self.quote_team_text(quote))
        .with_html_body(self.quote_team_html(quote));

        self.send_email(message).await
    }

    /// Forward a contact form message to the team inbox.
    #[instrument(skip(self, contact), fields(to = %to, submission_id = %contact.submission_id))]
    pub async fn send_contact_notification(
        &self,
        contact: &ContactMessage,
        to: &str,
    ) -> Result<(), EmailError> {
        let message = EmailMessage::new(
            to.to_string(),
            format!(
                "New Contact Form Submission from {} {}",
                contact.first_name, contact.last_name
            ),
        )
        .with_text_body(self.contact_notification_text(contact));

        self.send_email(message).await
    }

    /// Alert the admin inbox that a testimonial awaits approval.
    #[instrument(skip(self, testimonial), fields(to = %to, id = %testimonial.id))]
    pub async fn send_testimonial_alert(
        &self,
        testimonial: &Testimonial,
        to: &str,
    ) -> Result<(), EmailError> {
        let message = EmailMessage::new(
            to.to_string(),
            "New Testimonial Awaiting Approval".to_string(),
        )
        .with_text_body(self.testimonial_alert_text(testimonial));

        self.send_email(message).await
    }

    pub fn quote_confirmation_text(&self, quote: &QuoteRequest) -> String {
        format!(
            r#"Hi {customer_name},

Thank you for requesting a quote for your {project_type} project! We have received your request and our team is already reviewing the details.

Your Project Details:
- Project Type: {project_type}
- Location: {address}
- Timeline: {timeframe}
- Budget Range: {budget}
- Project ID: {project_id}

What Happens Next:
1. Review: Our team reviews your project requirements
2. Site Visit: We schedule a consultation at your location
3. Quote: You receive a detailed quote within 24-48 hours
4. Discussion: We walk through the quote and answer your questions

Questions about your quote?
Call us: (857) 207-2145
Email us: quotes@homefixandbuild.org

3 Boys Handyman LLC
Professional Construction & Renovation Services
Licensed - Bonded - Insured"#,
            customer_name = quote.customer_name,
            project_type = quote.project_type,
            address = quote.address,
            timeframe = quote.timeframe.as_deref().unwrap_or("To be discussed"),
            budget = quote.estimated_budget.as_deref().unwrap_or("To be determined"),
            project_id = quote.project_id,
        )
    }

    pub fn quote_confirmation_html(&self, quote: &QuoteRequest) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Quote Request Received</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
        }}
        .header {{
            background-color: #2c5f2d;
            color: #ffffff;
            padding: 20px;
            text-align: center;
            border-radius: 8px 8px 0 0;
        }}
        .content {{
            background-color: #ffffff;
            padding: 30px;
            border: 1px solid #dee2e6;
        }}
        .details {{
            background-color: #f8f9fa;
            padding: 15px;
            border-radius: 4px;
            margin: 20px 0;
        }}
        .footer {{
            background-color: #f8f9fa;
            padding: 15px;
            text-align: center;
            font-size: 12px;
            color: #6c757d;
            border-radius: 0 0 8px 8px;
        }}
    </style>
</head>
<body>
    <div class="header">
        <h1>3 Boys Handyman LLC</h1>
        <h2>Your Quote Request Was Received</h2>
    </div>

    <div class="content">
        <p>Hi {customer_name},</p>

        <p>Thank you for requesting a quote for your <strong>{project_type}</strong> project!
        Our team is already reviewing the details.</p>

        <div class="details">
            <strong>Your Project Details</strong>
            <ul>
                <li>Project Type: {project_type}</li>
                <li>Location: {address}</li>
                <li>Timeline: {timeframe}</li>
                <li>Budget Range: {budget}</li>
                <li>Project ID: {project_id}</li>
            </ul>
        </div>

        <p><strong>What happens next:</strong></p>
        <ol>
            <li>Our team reviews your project requirements</li>
            <li>We schedule an on-site consultation</li>
            <li>You receive a detailed quote within 24-48 hours</li>
            <li>We walk through the quote and answer your questions</li>
        </ol>

        <p>Questions about your quote? Call us at <strong>(857) 207-2145</strong>
        or reply to this email.</p>
    </div>

    <div class="footer">
        <p>3 Boys Handyman LLC · Professional Construction &amp; Renovation Services</p>
        <p>Licensed · Bonded · Insured · homefixandbuild.org</p>
    </div>
</body>
</html>"#,
            customer_name = html_escape::encode_text(&quote.customer_name),
            project_type = html_escape::encode_text(&quote.project_type),
            address = html_escape::encode_text(&quote.address),
            timeframe = html_escape::encode_text(
                quote.timeframe.as_deref().unwrap_or("To be discussed")
            ),
            budget = html_escape::encode_text(
                quote.estimated_budget.as_deref().unwrap_or("To be determined")
            ),
            project_id = html_escape::encode_text(&quote.project_id),
        )
    }

    pub fn quote_team_text(&self, quote: &QuoteRequest) -> String {
        format!(
            r#"New quote request received.

Customer:
- Name: {customer_name}
- Email: {email}
- Phone: {phone}
- Address: {address}

Project:
- Type: {project_type}
- Timeline: {timeframe}
- Budget Range: {budget}
- Details: {details}

System:
- Project ID: {project_id}
- Received: {received_at}"#,
            customer_name = quote.customer_name,
            email = quote.email,
            phone = quote.phone,
            address = quote.address,
            project_type = quote.project_type,
            timeframe = quote.timeframe.as_deref().unwrap_or("Not specified"),
            budget = quote.estimated_budget.as_deref().unwrap_or("Not specified"),
            details = quote.project_details,
            project_id = quote.project_id,
            received_at = quote.received_at.format("%Y-%m-%d %H:%M UTC"),
        )
    }

    pub fn quote_team_html(&self, quote: &QuoteRequest) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>New Quote Request</title>
</head>
<body style="font-family: Arial, sans-serif; color: #333; max-width: 600px; margin: 0 auto;">
    <h2 style="background-color: #2c5f2d; color: #fff; padding: 12px;">🔨 New Quote Request</h2>

    <h3>Customer</h3>
    <ul>
        <li><strong>Name:</strong> {customer_name}</li>
        <li><strong>Email:</strong> {email}</li>
        <li><strong>Phone:</strong> {phone}</li>
        <li><strong>Address:</strong> {address}</li>
    </ul>

    <h3>Project</h3>
    <ul>
        <li><strong>Type:</strong> {project_type}</li>
        <li><strong>Timeline:</strong> {timeframe}</li>
        <li><strong>Budget Range:</strong> {budget}</li>
    </ul>
    <p style="background-color: #f8f9fa; padding: 10px; border-radius: 4px;">{details}</p>

    <p style="font-size: 12px; color: #6c757d;">
        Project ID: {project_id} · Received: {received_at}
    </p>
</body>
</html>"#,
            customer_name = html_escape::encode_text(&quote.customer_name),
            email = html_escape::encode_text(&quote.email),
            phone = html_escape::encode_text(&quote.phone),
            address = html_escape::encode_text(&quote.address),
            project_type = html_escape::encode_text(&quote.project_type),
            timeframe = html_escape::encode_text(
                quote.timeframe.as_deref().unwrap_or("Not specified")
            ),
            budget = html_escape::encode_text(
                quote.estimated_budget.as_deref().unwrap_or("Not specified")
            ),
            details = html_escape::encode_text(&quote.project_details),
            project_id = html_escape::encode_text(&quote.project_id),
            received_at = quote.received_at.format("%Y-%m-%d %H:%M UTC"),
        )
    }

    pub fn contact_notification_text(&self, contact: &ContactMessage) -> String {
        format!(
            r#"New contact form submission from the 3 Boys Handyman website.

Customer Information:
- Name: {first_name} {last_name}
- Email: {email}
- Phone: {phone}
- Service Requested: {service}

Project Details:
{details}

---
Submission ID: {submission_id}
Received: {received_at}"#,
            first_name = contact.first_name,
            last_name = contact.last_name,
            email = contact.email,
            phone = contact.phone,
            service = contact.service,
            details = contact.project_details,
            submission_id = contact.submission_id,
            received_at = contact.received_at.format("%Y-%m-%d %H:%M UTC"),
        )
    }

    pub fn testimonial_alert_text(&self, testimonial: &Testimonial) -> String {
        let location = if testimonial.location.is_empty() {
            "Not provided"
        } else {
            testimonial.location.as_str()
        };
        let submitted = testimonial
            .submitted
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        format!(
            r#"New testimonial submission - 3 Boys Handyman LLC

Customer: {name}
Location: {location}
Submitted: {submitted}

Testimonial:
"{quote}"

---
To publish this testimonial, approve it in the admin panel."#,
            name = testimonial.name,
            location = location,
            submitted = submitted,
            quote = testimonial.quote,
        )
    }

    /// Build a lettre Message from EmailMessage
    fn build_message(&self, email_message: EmailMessage) -> Result<Message, EmailError> {
        let from_mailbox: Mailbox =
            format!("{} <{}>", self.config.from_name, self.config.from_email)
                .parse()
                .map_err(|e| EmailError::AddressError(format!("Invalid from address: {}", e)))?;

        let to_mailbox: Mailbox = email_message
            .to
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid to address: {}", e)))?;

        let message_builder = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(&email_message.subject);

        match (email_message.text_body, email_message.html_body) {
            (Some(text), Some(html)) => message_builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(text),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(html),
                        ),
                )
                .map_err(|e| {
                    EmailError::MessageError(format!("Failed to build multipart message: {}", e))
                }),
            (Some(text), None) => message_builder
                .body(text)
                .map_err(|e| EmailError::MessageError(format!("Failed to build text message: {}", e))),
            (None, Some(html)) => message_builder
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html),
                )
                .map_err(|e| EmailError::MessageError(format!("Failed to build HTML message: {}", e))),
            (None, None) => Err(EmailError::MessageError(
                "No message body provided".to_string(),
            )),
        }
    }

    /// Validate email address format
    fn validate_email_address(&self, email: &str) -> Result<(), EmailError> {
        if email.is_empty() {
            return Err(EmailError::AddressError(
                "Email address cannot be empty".to_string(),
            ));
        }

        if !is_valid_email(email) {
            return Err(EmailError::AddressError("Invalid email format".to_string()));
        }

        Ok(())
    }
}

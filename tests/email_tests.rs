use chrono::{TimeZone, Utc};
use homefix_backend::config::EmailConfig;
use homefix_backend::model::submission::{ContactMessage, QuoteRequest};
use homefix_backend::model::testimonial::{Testimonial, TestimonialSource};
use homefix_backend::util::email::{EmailError, EmailMessage, SmtpEmailService};

/// Initialize tracing for tests
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
}

fn create_test_config() -> EmailConfig {
    EmailConfig::from_test_env()
}

fn create_test_service() -> SmtpEmailService {
    SmtpEmailService::new(create_test_config()).expect("Failed to create test email service")
}

fn sample_quote() -> QuoteRequest {
    QuoteRequest {
        project_id: "PROJECT-1700000000000".to_string(),
        customer_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "(857) 207-2145".to_string(),
        address: "12 Maple St, Somerville MA".to_string(),
        project_type: "Deck repair".to_string(),
        project_details: "Rebuild the rear deck railing and replace rotten boards".to_string(),
        timeframe: Some("Next month".to_string()),
        estimated_budget: None,
        received_at: Utc.with_ymd_and_hms(2024, 5, 10, 14, 30, 0).unwrap(),
    }
}

fn sample_contact() -> ContactMessage {
    ContactMessage {
        submission_id: "CONTACT-1700000000001".to_string(),
        first_name: "Sam".to_string(),
        last_name: "Rivera".to_string(),
        email: "sam@example.com".to_string(),
        phone: "(617) 555-0123".to_string(),
        service: "Gutter cleaning".to_string(),
        project_details: "Two-story house, gutters overflowing at the back".to_string(),
        received_at: Utc.with_ymd_and_hms(2024, 5, 11, 9, 0, 0).unwrap(),
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[tokio::test]
    async fn test_email_service_creation() {
        init_tracing();
        let service = create_test_service();
        assert_eq!(service.config.smtp_host, "localhost");
        assert_eq!(service.config.smtp_port, 1025);
    }

    #[test]
    fn test_email_message_creation() {
        let message = EmailMessage::new(
            "test@example.com".to_string(),
            "Test Subject".to_string(),
        );

        assert_eq!(message.to, "test@example.com");
        assert_eq!(message.subject, "Test Subject");
        assert!(message.text_body.is_none());
        assert!(message.html_body.is_none());
    }

    #[test]
    fn test_email_message_with_bodies() {
        let message = EmailMessage::new(
            "test@example.com".to_string(),
            "Test Subject".to_string(),
        )
        .with_text_body("Text body content".to_string())
        .with_html_body("<h1>HTML body content</h1>".to_string());

        assert_eq!(message.text_body.unwrap(), "Text body content");
        assert_eq!(message.html_body.unwrap(), "<h1>HTML body content</h1>");
    }
}

#[cfg(test)]
mod template_tests {
    use super::*;

    #[tokio::test]
    async fn test_quote_confirmation_text_content() {
        let service = create_test_service();
        let text = service.quote_confirmation_text(&sample_quote());

        assert!(text.contains("Hi Jane Doe,"));
        assert!(text.contains("Deck repair"));
        assert!(text.contains("Project ID: PROJECT-1700000000000"));
        assert!(text.contains("Timeline: Next month"));
        // Unset budget falls back to the placeholder.
        assert!(text.contains("Budget Range: To be determined"));
        assert!(text.contains("(857) 207-2145"));
    }

    #[tokio::test]
    async fn test_quote_confirmation_html_escapes_user_input() {
        let service = create_test_service();
        let mut quote = sample_quote();
        quote.customer_name = "Jane <script>alert(1)</script>".to_string();
        let html = service.quote_confirmation_html(&quote);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("3 Boys Handyman LLC"));
    }

    #[tokio::test]
    async fn test_team_notification_lists_contact_details() {
        let service = create_test_service();
        let quote = sample_quote();
        let text = service.quote_team_text(&quote);

        assert!(text.contains("Name: Jane Doe"));
        assert!(text.contains("Email: jane@example.com"));
        assert!(text.contains("Phone: (857) 207-2145"));
        assert!(text.contains("Project ID: PROJECT-1700000000000"));
        assert!(text.contains("Received: 2024-05-10 14:30 UTC"));
    }

    #[tokio::test]
    async fn test_contact_notification_content() {
        let service = create_test_service();
        let text = service.contact_notification_text(&sample_contact());

        assert!(text.contains("Name: Sam Rivera"));
        assert!(text.contains("Service Requested: Gutter cleaning"));
        assert!(text.contains("Submission ID: CONTACT-1700000000001"));
        assert!(text.contains("gutters overflowing"));
    }

    #[tokio::test]
    async fn test_testimonial_alert_content() {
        let service = create_test_service();
        let testimonial = Testimonial {
            id: "web_1700000000002".to_string(),
            quote: "Fixed our fence in a day".to_string(),
            name: "Priya N.".to_string(),
            location: String::new(),
            source: TestimonialSource::Website,
            rating: None,
            submitted: Some(Utc.with_ymd_and_hms(2024, 5, 12, 8, 15, 0).unwrap()),
            approved: false,
        };
        let text = service.testimonial_alert_text(&testimonial);

        assert!(text.contains("Customer: Priya N."));
        assert!(text.contains("Location: Not provided"));
        assert!(text.contains("\"Fixed our fence in a day\""));
        assert!(text.contains("Submitted: 2024-05-12 08:15 UTC"));
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_email_error_types() {
        let errors = vec![
            EmailError::ConfigError("Config error".to_string()),
            EmailError::SmtpError("SMTP error".to_string()),
            EmailError::MessageError("Message error".to_string()),
            EmailError::AddressError("Address error".to_string()),
        ];

        for error in errors {
            assert!(!format!("{}", error).is_empty());
            assert!(!format!("{:?}", error).is_empty());
        }
    }

    #[test]
    fn test_invalid_config_creation() {
        let mut config = create_test_config();
        config.smtp_host = "".to_string();

        let result = SmtpEmailService::new(config);
        assert!(matches!(result, Err(EmailError::ConfigError(_))));
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_config_from_test_env() {
        let config = EmailConfig::from_test_env();
        assert_eq!(config.smtp_host, "localhost");
        assert_eq!(config.smtp_port, 1025);
        assert_eq!(config.from_email, "test@homefixandbuild.org");
        assert!(!config.use_tls);
        assert!(!config.use_starttls);
    }

    #[test]
    fn test_config_validation() {
        assert!(create_test_config().validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_from_email() {
        let mut config = create_test_config();
        config.from_email = "invalid-email".to_string();
        assert!(config.validate().is_err());
    }
}

// Integration tests that require an actual SMTP server (e.g. MailHog)
#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual SMTP server
    async fn test_send_email_integration() {
        init_tracing();
        let service = create_test_service();

        let message = EmailMessage::new(
            "test@example.com".to_string(),
            "Integration Test Email".to_string(),
        )
        .with_text_body("This is a test email from the integration test.".to_string());

        let result = service.send_email(message).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires actual SMTP server
    async fn test_send_quote_confirmation_integration() {
        init_tracing();
        let service = create_test_service();

        let result = service.send_quote_confirmation(&sample_quote()).await;
        assert!(result.is_ok());
    }
}

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::app_conf::AppConfig;
use crate::config::{EmailConfig, FacebookConfig, NotificationConfig, SyncConfig};
use crate::handler::health_handler::health_handler;
use crate::repository::testimonial_repo::InMemoryTestimonialRepository;
use crate::router::contact_router::contact_router;
use crate::router::facebook_router::facebook_router;
use crate::router::quote_router::quote_router;
use crate::router::testimonial_router::testimonial_router;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::facebook_sync::SyncService;
use crate::service::quote_service::QuoteServiceImpl;
use crate::service::testimonial_service::TestimonialServiceImpl;
use crate::util::email::SmtpEmailService;
use crate::util::facebook::FacebookClient;

pub struct App {
    config: AppConfig,
    router: Router,
    sync_service: Arc<SyncService>,
}

impl App {
    /// Wire the whole service from environment configuration.
    ///
    /// Optional integrations (SMTP, Facebook) disable themselves when their
    /// credentials are missing; a bare environment still serves every route.
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        let notify = NotificationConfig::from_env();

        let email = match EmailConfig::from_env() {
            Ok(email_config) => match SmtpEmailService::new(email_config) {
                Ok(service) => Some(Arc::new(service)),
                Err(e) => {
                    warn!("⚠️ Email service unavailable: {e} (notifications disabled)");
                    None
                }
            },
            Err(e) => {
                warn!("⚠️ Email not configured: {e} (notifications disabled)");
                None
            }
        };

        let facebook = match FacebookConfig::from_env() {
            Ok(facebook_config) => match FacebookClient::new(facebook_config) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    warn!("⚠️ Facebook client unavailable: {e} (integration disabled)");
                    None
                }
            },
            Err(e) => {
                warn!("⚠️ Facebook integration disabled: {e}");
                None
            }
        };

        let repo = Arc::new(InMemoryTestimonialRepository::new());
        let testimonial_service = Arc::new(TestimonialServiceImpl::new(
            repo,
            facebook.clone(),
            email.clone(),
            notify.clone(),
        ));
        let quote_service = Arc::new(QuoteServiceImpl::new(email.clone(), notify.clone()));
        let contact_service = Arc::new(ContactServiceImpl::new(email, notify));
        let sync_service = Arc::new(SyncService::new(SyncConfig::from_env(), facebook));

        let router = Self::create_router(
            quote_service,
            contact_service,
            testimonial_service,
            sync_service.clone(),
        );

        App {
            config,
            router,
            sync_service,
        }
    }

    fn create_router(
        quote_service: Arc<QuoteServiceImpl>,
        contact_service: Arc<ContactServiceImpl>,
        testimonial_service: Arc<TestimonialServiceImpl>,
        sync_service: Arc<SyncService>,
    ) -> Router {
        Router::new()
            .merge(quote_router(quote_service))
            .merge(contact_router(contact_service))
            .merge(testimonial_router(testimonial_service.clone()))
            .merge(facebook_router(sync_service, testimonial_service))
            .route("/health", get(health_handler))
            // The static site is served from a different origin, so every
            // browser call arrives cross-origin.
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    pub async fn start(self) {
        self.sync_service.clone().run();

        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .await
            .expect("Failed to start server");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

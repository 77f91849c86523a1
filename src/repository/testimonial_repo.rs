use crate::model::testimonial::Testimonial;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// Persistence boundary for website-submitted testimonials.
///
/// The feed only ever reads approved entries; everything appended by the
/// public site starts unapproved and waits for review.
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list_approved(&self) -> RepositoryResult<Vec<Testimonial>>;
    async fn append(&self, testimonial: Testimonial) -> RepositoryResult<Testimonial>;
}

/// Process-local store. Survives for the lifetime of the service, which is
/// all the approval workflow needs today; a database-backed implementation
/// slots in behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryTestimonialRepository {
    entries: RwLock<Vec<Testimonial>>,
}

impl InMemoryTestimonialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store for tests.
    pub fn with_entries(entries: Vec<Testimonial>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonialRepository {
    async fn list_approved(&self) -> RepositoryResult<Vec<Testimonial>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|t| t.approved).cloned().collect())
    }

    #[instrument(skip(self, testimonial), fields(id = %testimonial.id))]
    async fn append(&self, testimonial: Testimonial) -> RepositoryResult<Testimonial> {
        // The store never accepts an entry without quote and name.
        if testimonial.quote.trim().is_empty() || testimonial.name.trim().is_empty() {
            return Err(RepositoryError::validation(
                "Testimonial quote and name cannot be empty",
            ));
        }

        let mut entries = self.entries.write().await;
        entries.push(testimonial.clone());
        info!("Stored testimonial {} ({} total)", testimonial.id, entries.len());
        Ok(testimonial)
    }
}

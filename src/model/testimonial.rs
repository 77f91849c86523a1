use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a testimonial entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestimonialSource {
    Website,
    Facebook,
}

/// A customer testimonial as served to the website.
///
/// The three origins share this shape: curated entries compiled into the
/// binary, visitor submissions held for approval, and Facebook page reviews
/// that passed the quality gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub name: String,
    /// Free-text locality, e.g. "Somerville, MA". Empty when not provided.
    pub location: String,
    pub source: TestimonialSource,
    /// Star rating carried over from Facebook reviews; curated and website
    /// entries have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted: Option<DateTime<Utc>>,
    pub approved: bool,
}

impl Testimonial {
    /// Sort key: undated entries count as the epoch so they sink to the end
    /// of a newest-first ordering.
    fn submitted_or_epoch(&self) -> DateTime<Utc> {
        self.submitted.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Counts reported alongside the testimonial feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestimonialStats {
    pub total: usize,
    /// Entries that originated outside the website (the Facebook page).
    #[serde(rename = "external")]
    pub facebook: usize,
    pub website: usize,
}

impl TestimonialStats {
    pub fn from_items(items: &[Testimonial]) -> Self {
        let facebook = items
            .iter()
            .filter(|t| t.source == TestimonialSource::Facebook)
            .count();
        TestimonialStats {
            total: items.len(),
            facebook,
            website: items.len() - facebook,
        }
    }
}

/// Newest first; entries without a submission date keep their relative order
/// at the end. The sort is stable, so same-instant entries never swap.
pub fn sort_newest_first(items: &mut [Testimonial]) {
    items.sort_by(|a, b| b.submitted_or_epoch().cmp(&a.submitted_or_epoch()));
}

/// The curated testimonials every deployment starts with. These render even
/// when Facebook is unreachable and the store is empty.
pub fn baseline_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "static_1".to_string(),
            quote: "The team rebuilt our back deck and it came out better than we \
                    imagined. On time, on budget, and they left the yard spotless."
                .to_string(),
            name: "Sarah M.".to_string(),
            location: "Somerville, MA".to_string(),
            source: TestimonialSource::Website,
            rating: None,
            submitted: None,
            approved: true,
        },
        Testimonial {
            id: "static_2".to_string(),
            quote: "Called about a leaking bathroom fan on Monday, fixed by Wednesday. \
                    Honest pricing and they explained every step of the repair."
                .to_string(),
            name: "David R.".to_string(),
            location: "Waltham, MA".to_string(),
            source: TestimonialSource::Website,
            rating: None,
            submitted: None,
            approved: true,
        },
        Testimonial {
            id: "static_3".to_string(),
            quote: "They handled our kitchen remodel from demo to final coat of paint. \
                    Great communication the whole way through."
                .to_string(),
            name: "Michael K.".to_string(),
            location: "Manchester, NH".to_string(),
            source: TestimonialSource::Website,
            rating: None,
            submitted: None,
            approved: true,
        },
    ]
}

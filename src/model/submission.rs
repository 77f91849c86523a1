use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Issues strictly increasing millisecond stamps for time-based ids.
///
/// Submission ids embed the receipt time; under a burst two submissions can
/// land in the same millisecond, so the stamp advances past the last issued
/// value instead of reusing it.
#[derive(Debug, Default)]
pub struct SubmissionStamp {
    last: AtomicI64,
}

impl SubmissionStamp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(prev.max(now - 1) + 1)
            }) {
            Ok(prev) => prev.max(now - 1) + 1,
            // The closure never returns None, so this arm is unreachable.
            Err(prev) => prev.max(now),
        }
    }
}

/// A validated quote request, ready for notification and follow-up.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub project_id: String,
    pub customer_name: String,
    pub email: String,
    /// Stored in display form, e.g. "(857) 207-2145".
    pub phone: String,
    pub address: String,
    pub project_type: String,
    pub project_details: String,
    pub timeframe: Option<String>,
    pub estimated_budget: Option<String>,
    pub received_at: DateTime<Utc>,
}

/// A validated contact form message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub submission_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub project_details: String,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_stamps_are_strictly_increasing() {
        let stamp = SubmissionStamp::new();
        let mut prev = stamp.next_millis();
        for _ in 0..1000 {
            let next = stamp.next_millis();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn test_stamps_unique_across_threads() {
        let stamp = Arc::new(SubmissionStamp::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let stamp = Arc::clone(&stamp);
            handles.push(std::thread::spawn(move || {
                (0..250).map(|_| stamp.next_millis()).collect::<Vec<_>>()
            }));
        }
        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "duplicate stamp {value}");
            }
        }
    }

    #[test]
    fn test_stamps_track_wall_clock() {
        let stamp = SubmissionStamp::new();
        let issued = stamp.next_millis();
        let now = Utc::now().timestamp_millis();
        assert!((issued - now).abs() < 5_000);
    }
}

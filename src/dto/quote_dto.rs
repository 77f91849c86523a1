use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw quote form payload, exactly as the website posts it.
///
/// Every field is optional at the wire level: presence is an intake rule,
/// and the validator reports the complete set of missing fields instead of
/// letting deserialization reject the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteFormRequest {
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub project_type: Option<String>,
    pub project_details: Option<String>,
    pub timeframe: Option<String>,
    pub estimated_budget: Option<String>,
}

impl QuoteFormRequest {
    /// Required fields in schema order, paired for the intake validator.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("customerName", self.customer_name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("address", self.address.as_deref()),
            ("projectType", self.project_type.as_deref()),
            ("projectDetails", self.project_details.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFormResponse {
    pub success: bool,
    pub message: String,
    pub project_id: String,
    pub estimated_response: String,
    pub next_steps: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw contact form payload from the website.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub project_details: Option<String>,
}

impl ContactFormRequest {
    /// Required fields in schema order, paired for the intake validator.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("firstName", self.first_name.as_deref()),
            ("lastName", self.last_name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("service", self.service.as_deref()),
            ("projectDetails", self.project_details.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormResponse {
    pub success: bool,
    pub message: String,
    pub submission_id: String,
    pub timestamp: DateTime<Utc>,
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::util::validation::{FieldError, ValidationReport};

/// User-safe fallback shown whenever an internal error reaches the boundary.
/// The real cause is logged; callers get a working phone number instead.
pub const FALLBACK_SUPPORT_MESSAGE: &str =
    "Sorry, there was an error processing your request. Please call us directly at (857) 207-2145.";

#[derive(Debug, Serialize)]
pub enum HandlerErrorKind {
    Validation,
    BadRequest,
    ConfigurationMissing,
    UpstreamUnavailable,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::ConfigurationMissing => "ConfigurationMissing",
            HandlerErrorKind::UpstreamUnavailable => "UpstreamUnavailable",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
    /// Per-field violations, present only for validation failures.
    pub violations: Option<ValidationReport>,
}

impl HandlerError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: message.into(),
            violations: None,
        }
    }

    pub fn configuration_missing(message: impl Into<String>) -> Self {
        HandlerError {
            error: HandlerErrorKind::ConfigurationMissing,
            message: message.into(),
            violations: None,
        }
    }

    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        HandlerError {
            error: HandlerErrorKind::UpstreamUnavailable,
            message: message.into(),
            violations: None,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

/// Wire shape of every error response. `success` is always false so the
/// frontend can branch on a single field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    success: bool,
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_fields: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    field_errors: Vec<FieldError>,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.error {
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => {
                StatusCode::BAD_REQUEST
            }
            HandlerErrorKind::ConfigurationMissing
            | HandlerErrorKind::UpstreamUnavailable
            | HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let report = self.violations.unwrap_or_default();
        let body = axum::Json(ErrorBody {
            success: false,
            error: self.error.to_string(),
            message: self.message,
            missing_fields: report.missing_fields,
            field_errors: report.field_errors,
        });
        (status, body).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Form submission failed the intake rules; carries every violation.
    Validation(ValidationReport),
    InvalidInput(String),
    ConfigurationMissing(String),
    Upstream(String),
    InternalError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Validation(report) => write!(f, "Validation: {}", report.summary()),
            ServiceError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            ServiceError::ConfigurationMissing(msg) => {
                write!(f, "Configuration Missing: {}", msg)
            }
            ServiceError::Upstream(msg) => write!(f, "Upstream Unavailable: {}", msg),
            ServiceError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// Allow conversion from RepositoryError to ServiceError
impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::ValidationError(msg) => ServiceError::InvalidInput(msg),
            RepositoryError::NotFound(msg) => ServiceError::InternalError(msg),
            RepositoryError::StorageError(msg) => ServiceError::InternalError(msg),
            RepositoryError::Generic(e) => ServiceError::InternalError(e.to_string()),
        }
    }
}

// Services log the specific cause before returning; the boundary only ever
// shows callers a safe message for internal failures.
impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(report) => HandlerError {
                error: HandlerErrorKind::Validation,
                message: report.summary(),
                violations: Some(report),
            },
            ServiceError::InvalidInput(msg) => HandlerError {
                error: HandlerErrorKind::BadRequest,
                message: msg,
                violations: None,
            },
            ServiceError::ConfigurationMissing(msg) => HandlerError {
                error: HandlerErrorKind::ConfigurationMissing,
                message: msg,
                violations: None,
            },
            ServiceError::Upstream(msg) => HandlerError {
                error: HandlerErrorKind::UpstreamUnavailable,
                message: msg,
                violations: None,
            },
            ServiceError::InternalError(_) => HandlerError {
                error: HandlerErrorKind::Internal,
                message: FALLBACK_SUPPORT_MESSAGE.to_string(),
                violations: None,
            },
        }
    }
}

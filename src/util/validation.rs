use serde::Serialize;

/// Minimum length for the project details field, after trimming.
pub const MIN_PROJECT_DETAILS_LEN: usize = 10;

/// A US phone number must carry exactly this many digits.
pub const PHONE_DIGITS: usize = 10;

/// Which intake form a submission came from. The two forms share the
/// validation rules but require different field sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Quote,
    Contact,
}

impl FormKind {
    /// Required fields in schema order; reports preserve this order.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            FormKind::Quote => &[
                "customerName",
                "email",
                "phone",
                "address",
                "projectType",
                "projectDetails",
            ],
            FormKind::Contact => &[
                "firstName",
                "lastName",
                "email",
                "phone",
                "service",
                "projectDetails",
            ],
        }
    }
}

/// Why a present field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationCode {
    InvalidEmail,
    InvalidPhone,
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: ViolationCode,
}

/// Everything wrong with a submission, gathered in one pass.
///
/// Validation never stops at the first problem: a caller fixing a form gets
/// the complete list of violations in a single round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub missing_fields: Vec<String>,
    pub field_errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.missing_fields.is_empty() && self.field_errors.is_empty()
    }

    /// One-line description used as the response message.
    pub fn summary(&self) -> String {
        match (self.missing_fields.is_empty(), self.field_errors.is_empty()) {
            (false, true) => "Missing required fields".to_string(),
            (true, false) => "Invalid field values".to_string(),
            (false, false) => "Missing required fields and invalid field values".to_string(),
            (true, true) => "Validation failed".to_string(),
        }
    }
}

/// Validate a form submission against its required field set.
///
/// Every required field is checked for presence (non-blank after trimming);
/// fields that are present additionally get their format rule: `email` must
/// look like an address, `phone` must normalize to ten digits, and
/// `projectDetails` must exceed the minimum length. A blank field is only
/// reported as missing, never as malformed too.
pub fn validate_fields(
    kind: FormKind,
    fields: &[(&'static str, Option<&str>)],
) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    for name in kind.required_fields() {
        let value = fields
            .iter()
            .find(|(field, _)| field == name)
            .and_then(|(_, value)| *value)
            .map(str::trim)
            .unwrap_or("");

        if value.is_empty() {
            report.missing_fields.push((*name).to_string());
            continue;
        }

        let violation = match *name {
            "email" if !is_valid_email(value) => Some(ViolationCode::InvalidEmail),
            "phone" if normalize_phone(value).len() != PHONE_DIGITS => {
                Some(ViolationCode::InvalidPhone)
            }
            "projectDetails" if value.chars().count() < MIN_PROJECT_DETAILS_LEN => {
                Some(ViolationCode::TooShort)
            }
            _ => None,
        };

        if let Some(code) = violation {
            report.field_errors.push(FieldError {
                field: (*name).to_string(),
                code,
            });
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

/// Structural email check: one local part, one `@`, and a dotted domain.
/// Deliverability is the mail server's problem, not the form's.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let mut parts = value.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => !domain[..dot].is_empty() && !domain[dot + 1..].is_empty(),
        None => false,
    }
}

/// Strip a phone input down to its digits.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Render a phone input in display form, building up the US pattern as
/// digits accumulate: `617`, `(617) 555`, `(617) 555-0123`. Inputs with more
/// than ten digits are returned as bare digits; validation rejects them
/// anyway, and no digit is ever dropped.
pub fn format_phone(raw: &str) -> String {
    let digits = normalize_phone(raw);
    match digits.len() {
        0 => String::new(),
        1..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        7..=10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => digits,
    }
}

/// Trimmed copy of an optional form field, empty when absent.
pub fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

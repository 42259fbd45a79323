use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

// Local part (dot-separated atoms or a quoted string), then a dotted domain
// with a TLD of at least two letters, or a bracketed IPv4 literal.
static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email format pattern is valid")
});

/// A category of validation failure. `Display` yields the exact fragment
/// surfaced to the caller in the aggregated 400 body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedBody,
    MissingOrInvalidName,
    MissingOrInvalidEmail,
    InvalidEmailFormat,
    MissingOrInvalidMessage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::MalformedBody => "request body is not valid JSON",
            Self::MissingOrInvalidName => "value \"name\" is not present or is invalid",
            Self::MissingOrInvalidEmail => "value \"email\" is not present or is invalid",
            Self::InvalidEmailFormat => "value \"email\" is improperly formatted",
            Self::MissingOrInvalidMessage => "value \"message\" is not present or is invalid",
        };
        f.write_str(description)
    }
}

// Untyped on purpose: a field holding the wrong JSON type must be reported
// against that field alone, not fail the whole parse.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSubmission {
    name: Option<Value>,
    email: Option<Value>,
    message: Option<Value>,
}

/// A contact-form submission whose fields have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Parses and validates an untrusted request body.
    ///
    /// Field checks are independent and all evaluated, so every violation is
    /// reported in one pass. The error order is fixed (name, email presence,
    /// email format, message) to keep the aggregated 400 body deterministic.
    ///
    /// # Errors
    /// Returns every triggered [`ErrorKind`], or `[MalformedBody]` alone if
    /// the body is not parseable JSON.
    pub fn validate(raw_body: &str) -> Result<Self, Vec<ErrorKind>> {
        let Ok(body) = serde_json::from_str::<RawSubmission>(raw_body) else {
            return Err(vec![ErrorKind::MalformedBody]);
        };

        let name = text_field(body.name.as_ref());
        let email = text_field(body.email.as_ref());
        let message = text_field(body.message.as_ref());

        let checks = [
            name.is_none().then_some(ErrorKind::MissingOrInvalidName),
            email.is_none().then_some(ErrorKind::MissingOrInvalidEmail),
            email.as_deref().and_then(|e| (!EMAIL_FORMAT.is_match(e)).then_some(ErrorKind::InvalidEmailFormat)),
            message.is_none().then_some(ErrorKind::MissingOrInvalidMessage),
        ];
        let errors: Vec<ErrorKind> = checks.into_iter().flatten().collect();

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(Self { name, email, message }),
            _ => Err(errors),
        }
    }
}

// A field is usable only when present, a JSON string, and non-empty.
fn text_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_owned)
}

//! Gateway error type.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Any failed call against the user resource.
///
/// Transport failures and non-success statuses are reported through the same
/// type. Callers show a generic notice either way; the `Display` text is for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport(message.into())
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        FetchError::Status {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::status(status.as_u16(), err.to_string()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

/// Error body the backend sends with a rejected create or update: either a
/// single `error` string or a per-field `errors` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

impl ApiErrorBody {
    /// One-line description for logs, `None` when the body carried nothing.
    pub fn summary(&self) -> Option<String> {
        let mut parts: Vec<String> = self.error.iter().cloned().collect();
        parts.extend(self.errors.iter().map(|(field, msg)| format!("{field}: {msg}")));
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            FetchError::status(404, "Failed to fetch user").to_string(),
            "Failed to fetch user (HTTP 404)"
        );
        assert_eq!(FetchError::transport("offline").to_string(), "offline");
    }

    #[test]
    fn test_error_body_single() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Email already exists"}"#).unwrap();
        assert_eq!(body.summary().as_deref(), Some("Email already exists"));
    }

    #[test]
    fn test_error_body_fields() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"errors":{"phone":"Phone must be 10 digits","email":"Invalid email format"}}"#,
        )
        .unwrap();
        assert_eq!(
            body.summary().as_deref(),
            Some("email: Invalid email format; phone: Phone must be 10 digits")
        );
    }

    #[test]
    fn test_error_body_empty() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.summary(), None);
    }
}

//! Maps raw transport failures to user-facing messages.
//!
//! Every HTTP failure in the application funnels through [`Classifier`]
//! before it reaches a toast surface. The mapping is a pure function of the
//! failure shape; callers decide what to do with the result.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Post-mapping, user-facing error record. Immutable once constructed;
/// lives for one display cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedError {
    pub message: String,
    pub severity: Severity,
    pub details: Option<String>,
    pub error_code: Option<String>,
    pub timestamp: Option<String>,
}

impl ClassifiedError {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            details: None,
            error_code: None,
            timestamp: None,
        }
    }
}

/// RFC 7807-style problem payload carried by backend error responses.
///
/// `errors` maps a field name to the list of messages for that field.
/// A `BTreeMap` keeps flattening deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl Problem {
    fn joined_field_errors(&self) -> Option<String> {
        if self.errors.values().all(|msgs| msgs.is_empty()) {
            return None;
        }
        let joined = self
            .errors
            .values()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        Some(joined)
    }
}

/// Raw failure raised by the HTTP boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiFailure {
    /// Response arrived with a non-success status, possibly carrying a
    /// structured problem body.
    #[error("http {status}: {message}")]
    Http {
        status: u16,
        problem: Option<Problem>,
        message: String,
    },
    /// Transport-level failure with only a message (timeouts, DNS,
    /// connection refused).
    #[error("{0}")]
    Message(String),
    /// Pre-built record raised by application code; passed through as-is.
    #[error("{}", .0.message)]
    Custom(ClassifiedError),
}

impl ApiFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiFailure::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiFailure::Message(format!("timeout: {err}"))
        } else if err.is_connect() {
            ApiFailure::Message(format!("Network Error: {err}"))
        } else if let Some(status) = err.status() {
            ApiFailure::Http {
                status: status.as_u16(),
                problem: None,
                message: err.to_string(),
            }
        } else {
            ApiFailure::Message(err.to_string())
        }
    }
}

/// Which part of a problem payload wins when several are present.
///
/// The backend contract never documented this order; it is a client-side
/// design choice, so it stays configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackOrder {
    /// Field errors, then `detail`, then `title`, then the status table.
    #[default]
    ErrorsFirst,
    /// `detail`, then field errors, then `title`, then the status table.
    DetailFirst,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    pub order: FallbackOrder,
}

impl Classifier {
    pub fn new(order: FallbackOrder) -> Self {
        Self { order }
    }

    /// Pure mapping from a raw failure to a displayable record. The caller
    /// is responsible for feeding the result into a notification surface.
    pub fn classify(&self, failure: &ApiFailure) -> ClassifiedError {
        match failure {
            ApiFailure::Custom(prebuilt) => prebuilt.clone(),

            ApiFailure::Message(message) => self.finish(message.clone(), None),

            ApiFailure::Http {
                status,
                problem,
                message,
            } => {
                let (text, details) = match problem {
                    Some(p) => match self.problem_message(p) {
                        Some(resolved) => resolved,
                        None => (status_message(*status, message), None),
                    },
                    None => (status_message(*status, message), None),
                };
                self.finish(text, details)
            }
        }
    }

    fn problem_message(&self, problem: &Problem) -> Option<(String, Option<String>)> {
        let field_errors = problem.joined_field_errors();
        let detail = problem.detail.clone().filter(|s| !s.is_empty());
        let title = problem.title.clone().filter(|s| !s.is_empty());

        let ordered: [Option<String>; 3] = match self.order {
            FallbackOrder::ErrorsFirst => [field_errors, detail, title],
            FallbackOrder::DetailFirst => [detail, field_errors, title],
        };

        let mut candidates = ordered.into_iter().flatten();
        let message = candidates.next()?;
        // The next candidate in line becomes the secondary details text.
        let details = candidates.next();
        Some((message, details))
    }

    fn finish(&self, message: String, details: Option<String>) -> ClassifiedError {
        ClassifiedError {
            error_code: detect_code(&message),
            message,
            severity: Severity::Error,
            details,
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}

fn status_message(status: u16, raw: &str) -> String {
    match status {
        400 => "invalid data".to_string(),
        401 => "unauthorized, please sign in again".to_string(),
        404 => "resource not found".to_string(),
        409 => "conflict: resource changed concurrently".to_string(),
        422 => "business rule violated".to_string(),
        500 => "internal server error".to_string(),
        _ if !raw.is_empty() => raw.to_string(),
        _ => "unknown error".to_string(),
    }
}

fn detect_code(message: &str) -> Option<String> {
    let lower = message.to_ascii_lowercase();
    if message.contains("ECONNABORTED") || lower.contains("timeout") {
        Some("TIMEOUT".to_string())
    } else if message.contains("Network Error") || lower.contains("connection refused") {
        Some("NETWORK_ERROR".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(failure: ApiFailure) -> ClassifiedError {
        Classifier::default().classify(&failure)
    }

    fn http(status: u16, problem: Option<Problem>) -> ApiFailure {
        ApiFailure::Http {
            status,
            problem,
            message: String::new(),
        }
    }

    #[test]
    fn field_errors_flatten_in_map_order() {
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), vec!["a".to_string(), "b".to_string()]);
        let problem = Problem {
            errors,
            ..Problem::default()
        };

        let out = classify(http(400, Some(problem)));
        assert_eq!(out.message, "a, b");
        assert_eq!(out.severity, Severity::Error);
    }

    #[test]
    fn field_errors_across_fields_join_with_comma() {
        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), vec!["bad email".to_string()]);
        errors.insert("name".to_string(), vec!["too short".to_string()]);
        let problem = Problem {
            detail: Some("ignored".to_string()),
            errors,
            ..Problem::default()
        };

        let out = classify(http(422, Some(problem)));
        assert_eq!(out.message, "bad email, too short");
        assert_eq!(out.details.as_deref(), Some("ignored"));
    }

    #[test]
    fn detail_beats_title() {
        let problem = Problem {
            title: Some("Validation failed".to_string()),
            detail: Some("Name must be unique".to_string()),
            ..Problem::default()
        };
        let out = classify(http(400, Some(problem)));
        assert_eq!(out.message, "Name must be unique");
        assert_eq!(out.details.as_deref(), Some("Validation failed"));
    }

    #[test]
    fn title_used_when_nothing_else_present() {
        let problem = Problem {
            title: Some("Bad request".to_string()),
            ..Problem::default()
        };
        let out = classify(http(400, Some(problem)));
        assert_eq!(out.message, "Bad request");
    }

    #[test]
    fn empty_errors_map_falls_through_to_status_table() {
        let out = classify(http(404, Some(Problem::default())));
        assert_eq!(out.message, "resource not found");
    }

    #[test]
    fn status_table_maps_known_codes() {
        assert_eq!(
            classify(http(401, None)).message,
            "unauthorized, please sign in again"
        );
        assert_eq!(classify(http(404, None)).message, "resource not found");
        assert_eq!(
            classify(http(409, None)).message,
            "conflict: resource changed concurrently"
        );
        assert_eq!(classify(http(422, None)).message, "business rule violated");
        assert_eq!(classify(http(400, None)).message, "invalid data");
        assert_eq!(classify(http(500, None)).message, "internal server error");
    }

    #[test]
    fn unknown_status_without_message_is_unknown_error() {
        assert_eq!(classify(http(503, None)).message, "unknown error");
    }

    #[test]
    fn unknown_status_keeps_raw_message() {
        let out = classify(ApiFailure::Http {
            status: 503,
            problem: None,
            message: "service unavailable".to_string(),
        });
        assert_eq!(out.message, "service unavailable");
    }

    #[test]
    fn timeout_marker_sets_timeout_code() {
        let out = classify(ApiFailure::Message(
            "timeout of 15000ms exceeded".to_string(),
        ));
        assert_eq!(out.error_code.as_deref(), Some("TIMEOUT"));

        let out = classify(ApiFailure::Message("ECONNABORTED".to_string()));
        assert_eq!(out.error_code.as_deref(), Some("TIMEOUT"));
    }

    #[test]
    fn network_marker_sets_network_code() {
        let out = classify(ApiFailure::Message(
            "Network Error: connection reset".to_string(),
        ));
        assert_eq!(out.error_code.as_deref(), Some("NETWORK_ERROR"));
    }

    #[test]
    fn custom_record_passes_through_with_its_severity() {
        let prebuilt = ClassifiedError::new("saved", Severity::Success);
        let out = classify(ApiFailure::Custom(prebuilt.clone()));
        assert_eq!(out, prebuilt);
        assert_eq!(out.severity, Severity::Success);
    }

    #[test]
    fn detail_first_order_prefers_detail_over_field_errors() {
        let mut errors = BTreeMap::new();
        errors.insert("f".to_string(), vec!["field msg".to_string()]);
        let problem = Problem {
            detail: Some("detail msg".to_string()),
            errors,
            ..Problem::default()
        };

        let out = Classifier::new(FallbackOrder::DetailFirst)
            .classify(&http(400, Some(problem)));
        assert_eq!(out.message, "detail msg");
        assert_eq!(out.details.as_deref(), Some("field msg"));
    }
}

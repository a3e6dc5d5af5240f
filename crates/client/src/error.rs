//! Error taxonomy and failure-response classification.

use serde_json::Value;
use thiserror::Error;

/// Unified error type for client operations.
///
/// HTTP failures carry the composed `API Error <status>: <detail>` message;
/// [`Error::Validation`] is split out so callers can tell per-field
/// validation problems from generic failures without parsing the message.
#[derive(Debug, Error, Clone)]
pub enum Error {
    /// The request never completed (DNS, connect, timeout, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The service rejected the request with per-field validation problems.
    #[error("{message}")]
    Validation { status: u16, message: String },

    /// Any other non-success HTTP response, including 404 and 401.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// A success response body could not be parsed as JSON.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl Error {
    /// Classify a non-success response into a structured error.
    ///
    /// The composed message always starts with `API Error <status>`. A body
    /// with a `detail` array of `{loc, msg}` entries becomes a validation
    /// error with each entry rendered as `<loc joined by .>: <msg>` and the
    /// entries joined by `; `. A string `detail` or `error` field is used
    /// verbatim. Anything unparsable falls back to the raw body text, and an
    /// empty body to the status code alone.
    pub(crate) fn classify(status: u16, body: &str) -> Self {
        let mut message = format!("API Error {status}");
        if body.is_empty() {
            return Error::Http { status, message };
        }

        match serde_json::from_str::<Value>(body) {
            Ok(json) => {
                if let Some(entries) = json.get("detail").and_then(Value::as_array) {
                    let problems: Vec<String> = entries
                        .iter()
                        .map(|entry| {
                            let location = entry
                                .get("loc")
                                .and_then(Value::as_array)
                                .map(|parts| {
                                    parts
                                        .iter()
                                        .map(|part| match part {
                                            Value::String(s) => s.clone(),
                                            other => other.to_string(),
                                        })
                                        .collect::<Vec<_>>()
                                        .join(".")
                                })
                                .unwrap_or_else(|| "unknown".to_string());
                            let msg = entry.get("msg").and_then(Value::as_str).unwrap_or_default();
                            format!("{location}: {msg}")
                        })
                        .collect();
                    message.push_str(": ");
                    message.push_str(&problems.join("; "));
                    return Error::Validation { status, message };
                }

                let detail = json
                    .get("detail")
                    .and_then(Value::as_str)
                    .or_else(|| json.get("error").and_then(Value::as_str));
                match detail {
                    Some(detail) => {
                        message.push_str(": ");
                        message.push_str(detail);
                    }
                    None => {
                        message.push_str(": ");
                        message.push_str(body);
                    }
                }
            }
            Err(_) => {
                message.push_str(": ");
                message.push_str(body);
            }
        }

        Error::Http { status, message }
    }

    /// The HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Validation { status, .. } | Error::Http { status, .. } => Some(*status),
            Error::Network(_) | Error::Encode(_) | Error::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Http { status: 404, .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_detail_array_is_composed_per_field() {
        let body = r#"{"detail":[{"loc":["body","name"],"msg":"required"}]}"#;
        let error = Error::classify(422, body);
        assert_eq!(error.to_string(), "API Error 422: body.name: required");
        assert!(error.is_validation());
        assert_eq!(error.status(), Some(422));
    }

    #[test]
    fn test_multiple_validation_entries_are_joined() {
        let body = r#"{"detail":[
            {"loc":["body","name"],"msg":"required"},
            {"loc":["body","x"],"msg":"must be an integer"}
        ]}"#;
        let error = Error::classify(422, body);
        assert_eq!(
            error.to_string(),
            "API Error 422: body.name: required; body.x: must be an integer"
        );
    }

    #[test]
    fn test_missing_loc_renders_unknown() {
        let body = r#"{"detail":[{"msg":"broken"}]}"#;
        let error = Error::classify(422, body);
        assert_eq!(error.to_string(), "API Error 422: unknown: broken");
    }

    #[test]
    fn test_string_detail_is_used_verbatim() {
        let error = Error::classify(404, r#"{"detail":"Not found."}"#);
        assert_eq!(error.to_string(), "API Error 404: Not found.");
        assert!(error.is_not_found());
        assert!(!error.is_validation());
    }

    #[test]
    fn test_error_field_is_accepted_for_single_message() {
        let error = Error::classify(401, r#"{"error":"Invalid API key"}"#);
        assert_eq!(error.to_string(), "API Error 401: Invalid API key");
    }

    #[test]
    fn test_unparsable_body_falls_back_to_raw_text() {
        let error = Error::classify(500, "<html>Internal Server Error</html>");
        assert_eq!(
            error.to_string(),
            "API Error 500: <html>Internal Server Error</html>"
        );
    }

    #[test]
    fn test_empty_body_falls_back_to_status_alone() {
        let error = Error::classify(500, "");
        assert_eq!(error.to_string(), "API Error 500");
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_numeric_loc_parts_are_rendered() {
        let body = r#"{"detail":[{"loc":["body","friends",0],"msg":"invalid id"}]}"#;
        let error = Error::classify(422, body);
        assert_eq!(error.to_string(), "API Error 422: body.friends.0: invalid id");
    }
}

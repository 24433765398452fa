use serde_json::Value;
use thiserror::Error;

/// Message used when a failed response carries no usable `detail`
pub const GENERIC_ENDPOINT_ERROR: &str = "endpoint error";

/// Failure of a submit round trip
///
/// `Display` is the bare message, which is what the editor stores and shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The service answered with a non-success status
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The request never completed or the response body could not be decoded
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    /// Build a `Request` error from a failed response body
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|doc| extract_detail(&doc))
            .unwrap_or_else(|| GENERIC_ENDPOINT_ERROR.to_string());
        SubmitError::Request { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Request { status, .. } => Some(*status),
            SubmitError::Transport(_) => None,
        }
    }
}

/// Pull a human-readable message out of an error document
///
/// Handles a plain `detail` string and the validation form where `detail`
/// is a list of objects carrying `msg`.
pub fn extract_detail(document: &Value) -> Option<String> {
    match document.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_detail_string_becomes_message() {
        let err = SubmitError::from_error_body(422, r#"{"detail":"budget_daily must be positive"}"#);
        assert_eq!(err.to_string(), "budget_daily must be positive");
        assert_eq!(err.status(), Some(422));
    }

    #[rstest]
    #[case("")]
    #[case("<html>Bad Gateway</html>")]
    #[case(r#"{"error":"nope"}"#)]
    #[case(r#"{"detail":""}"#)]
    #[case(r#"{"detail":42}"#)]
    #[case(r#"{"detail":[]}"#)]
    fn test_missing_detail_uses_generic_message(#[case] body: &str) {
        let err = SubmitError::from_error_body(500, body);
        assert_eq!(err.to_string(), GENERIC_ENDPOINT_ERROR);
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let body = r#"{"detail":[
            {"loc":["body","budget_daily"],"msg":"Input should be greater than 0","type":"greater_than"},
            {"loc":["body","personas"],"msg":"Field required","type":"missing"}
        ]}"#;
        let err = SubmitError::from_error_body(422, body);
        assert_eq!(
            err.to_string(),
            "Input should be greater than 0; Field required"
        );
    }

    #[test]
    fn test_transport_error_displays_bare_message() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }
}

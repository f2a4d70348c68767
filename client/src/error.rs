use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// The normalized error shape surfaced to UI state, decoupled from the
/// transport's native error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub status_code: Option<u16>,
    pub error_code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Structured error body some endpoints return instead of plain text.
#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Normalize a transport error into [`ApiError`].
///
/// API errors carry the response body, which may be a JSON envelope
/// (`{"message": ..., "code": ...}`) or plain text; both are handled, and
/// a blank body falls back to a generic message with the status.
pub fn parse_api_error(error: &ClientError) -> ApiError {
    match error {
        ClientError::APIError(status, body) => {
            match serde_json::from_str::<ErrorEnvelope>(body) {
                Ok(envelope) => ApiError {
                    message: envelope.message,
                    status_code: Some(status.as_u16()),
                    error_code: envelope.code,
                },
                Err(_) => {
                    let body = body.trim();
                    let message = if body.is_empty() {
                        format!("Request failed with status {status}")
                    } else {
                        body.to_string()
                    };
                    ApiError {
                        message,
                        status_code: Some(status.as_u16()),
                        error_code: None,
                    }
                }
            }
        }
        ClientError::Network(_) => ApiError {
            message: error.to_string(),
            status_code: None,
            error_code: None,
        },
    }
}

/// Whether a failed request means the session is no longer valid.
pub fn is_authentication_error(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::APIError(status, _) if *status == StatusCode::UNAUTHORIZED
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_error_envelope() {
        let error = ClientError::APIError(
            StatusCode::CONFLICT,
            r#"{"message": "space name already taken", "code": "DUPLICATE"}"#
                .to_string(),
        );
        let parsed = parse_api_error(&error);
        assert_eq!(parsed.message, "space name already taken");
        assert_eq!(parsed.status_code, Some(409));
        assert_eq!(parsed.error_code, Some("DUPLICATE".to_string()));
    }

    #[test]
    fn envelope_code_is_optional() {
        let error = ClientError::APIError(
            StatusCode::BAD_REQUEST,
            r#"{"message": "invalid page size"}"#.to_string(),
        );
        let parsed = parse_api_error(&error);
        assert_eq!(parsed.message, "invalid page size");
        assert_eq!(parsed.error_code, None);
    }

    #[test]
    fn plain_text_body_becomes_the_message() {
        let error = ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "something broke".to_string(),
        );
        let parsed = parse_api_error(&error);
        assert_eq!(parsed.message, "something broke");
        assert_eq!(parsed.status_code, Some(500));
        assert_eq!(parsed.error_code, None);
    }

    #[test]
    fn blank_body_falls_back_to_status_message() {
        let error =
            ClientError::APIError(StatusCode::NOT_FOUND, "  ".to_string());
        let parsed = parse_api_error(&error);
        assert_eq!(parsed.message, "Request failed with status 404 Not Found");
        assert_eq!(parsed.status_code, Some(404));
    }

    #[test]
    fn only_unauthorized_classifies_as_auth_failure() {
        let unauthorized = ClientError::APIError(
            StatusCode::UNAUTHORIZED,
            "session expired".to_string(),
        );
        let forbidden = ClientError::APIError(
            StatusCode::FORBIDDEN,
            "not a member".to_string(),
        );
        assert!(is_authentication_error(&unauthorized));
        assert!(!is_authentication_error(&forbidden));
    }
}

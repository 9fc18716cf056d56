//! Error types for the fbgraph library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authorization, decoding, and remote API errors, plus the
//! classifier that turns a Graph API error envelope into a typed failure.

use std::fmt;
use thiserror::Error;

/// The unified error type for fbgraph operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// No access token held for an operation that requires one.
    ///
    /// Raised before any network call is attempted.
    #[error("no access token: operation requires authorization")]
    Unauthorized,

    /// Malformed or type-mismatched JSON payload. Fatal, never retried.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A binary fetch hit a redirect the transport was not configured
    /// to follow.
    #[error("redirect not followed (HTTP {status}); configure the HTTP client to follow redirects")]
    UnsupportedRedirect { status: u16 },

    /// A structured error reported by the Graph API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The configured Graph API base URL is not usable.
    #[error("invalid Graph API base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Non-2xx response whose body was not a Graph error envelope
    /// (an HTML error page, an empty body).
    #[error("HTTP {status}: {body}")]
    UnexpectedResponse { status: u16, body: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Malformed or unexpected JSON payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Expected a JSON object for the named entity type.
    #[error("expected a JSON object for '{object_type}', got {found}")]
    NotAnObject {
        object_type: &'static str,
        found: &'static str,
    },

    /// Expected a JSON array.
    #[error("expected a JSON array at '{context}', got {found}")]
    NotAnArray {
        context: &'static str,
        found: &'static str,
    },

    /// A wire field was present with an unexpected JSON type.
    #[error("field '{wire}' of '{object_type}': expected {expected}, got {found}")]
    FieldType {
        object_type: &'static str,
        wire: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// An attribute was requested that the mapping does not declare,
    /// or with a kind other than its declared one.
    #[error("mapping for '{object_type}' does not declare attribute '{attr}' as {requested}")]
    MappingMismatch {
        object_type: &'static str,
        attr: String,
        requested: &'static str,
    },

    /// A nested reference names an entity type the registry does not know.
    #[error("mapping for '{object_type}' references unregistered entity type '{nested}'")]
    UnknownEntityType {
        object_type: &'static str,
        nested: &'static str,
    },

    /// The response violated the expected protocol shape
    /// (e.g. a publish response without an `id` field).
    #[error("protocol violation: {message}")]
    Protocol { message: String },
}

/// Broad classification of a structured Graph API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Authenticated but lacking the specific permission.
    PermissionDenied,
    /// The held token was rejected (expired, revoked, malformed).
    NotAuthorized,
    /// The object no longer exists, migrated, or the alias is unknown.
    ResourceGone,
    /// Remote throttling; backing off is the caller's responsibility.
    RateLimited,
    /// Any other structured API error.
    Other,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiErrorKind::PermissionDenied => "permission denied",
            ApiErrorKind::NotAuthorized => "not authorized",
            ApiErrorKind::ResourceGone => "resource gone",
            ApiErrorKind::RateLimited => "rate limited",
            ApiErrorKind::Other => "api error",
        };
        f.write_str(s)
    }
}

/// A structured error reported by the Graph API.
///
/// Constructed only from a non-2xx response whose body matched the
/// `{ "error": { type, code, message, error_subcode? } }` envelope.
/// Carries the original remote fields so the failure is actionable
/// without the raw HTTP trace.
#[derive(Debug)]
pub struct ApiError {
    /// Broad classification derived from (type, code, subcode).
    pub kind: ApiErrorKind,
    /// HTTP status of the response.
    pub status: u16,
    /// The remote `error.type` tag (e.g. "OAuthException").
    pub error_type: Option<String>,
    /// The remote `error.code`.
    pub code: Option<i64>,
    /// The remote `error.error_subcode`.
    pub subcode: Option<i64>,
    /// The remote human-readable message.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.kind, self.status)?;
        if let Some(ref t) = self.error_type {
            write!(f, " [{}", t)?;
            if let Some(code) = self.code {
                write!(f, " code {}", code)?;
            }
            if let Some(subcode) = self.subcode {
                write!(f, " subcode {}", subcode)?;
            }
            write!(f, "]")?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Wire shape of the Graph API error envelope.
#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<i64>,
    message: Option<String>,
    error_subcode: Option<i64>,
}

/// Classify a non-2xx response body into the error taxonomy.
///
/// If the body matches the Graph error envelope, the `(type, code,
/// subcode)` triple is mapped onto an [`ApiErrorKind`]. Otherwise a
/// generic transport failure carrying the status and raw body text is
/// returned. Classification happens exactly once; nothing here retries.
pub(crate) fn classify_response(status: u16, body: &str) -> Error {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return Error::Transport(TransportError::UnexpectedResponse {
            status,
            body: body.to_string(),
        });
    };

    let ErrorBody {
        error_type,
        code,
        message,
        error_subcode,
    } = envelope.error;

    let kind = classify(error_type.as_deref(), code);

    Error::Api(ApiError {
        kind,
        status,
        error_type,
        code,
        subcode: error_subcode,
        message,
    })
}

// Permission codes are checked before the OAuthException tag: the API
// reports permission failures under that tag as well (e.g. code 200).
fn classify(error_type: Option<&str>, code: Option<i64>) -> ApiErrorKind {
    match code {
        Some(4) | Some(17) | Some(341) => return ApiErrorKind::RateLimited,
        Some(10) | Some(200..=299) => return ApiErrorKind::PermissionDenied,
        _ => {}
    }
    if error_type == Some("OAuthException") {
        return ApiErrorKind::NotAuthorized;
    }
    match code {
        Some(21) | Some(100) | Some(803) => ApiErrorKind::ResourceGone,
        _ => ApiErrorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_code_under_oauth_exception_tag() {
        let body = r#"{"error":{"type":"OAuthException","code":200,"message":"(#200) Requires extended permission"}}"#;
        let err = classify_response(403, body);
        match err {
            Error::Api(api) => {
                assert_eq!(api.kind, ApiErrorKind::PermissionDenied);
                assert_eq!(api.status, 403);
                assert_eq!(api.code, Some(200));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn expired_token_is_not_authorized() {
        let body = r#"{"error":{"type":"OAuthException","code":190,"error_subcode":463,"message":"Session has expired"}}"#;
        let err = classify_response(401, body);
        match err {
            Error::Api(api) => {
                assert_eq!(api.kind, ApiErrorKind::NotAuthorized);
                assert_eq!(api.subcode, Some(463));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn throttling_codes_are_rate_limited() {
        for code in [4, 17, 341] {
            let body = format!(r#"{{"error":{{"type":"ApiException","code":{code},"message":"throttled"}}}}"#);
            match classify_response(403, &body) {
                Error::Api(api) => assert_eq!(api.kind, ApiErrorKind::RateLimited),
                other => panic!("expected Api error, got {:?}", other),
            }
        }
    }

    #[test]
    fn unknown_alias_is_resource_gone() {
        let body = r#"{"error":{"type":"GraphMethodException","code":803,"message":"Some of the aliases you requested do not exist"}}"#;
        match classify_response(404, body) {
            Error::Api(api) => assert_eq!(api.kind, ApiErrorKind::ResourceGone),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn non_envelope_body_is_transport_failure() {
        let err = classify_response(500, "<html>Internal Server Error</html>");
        match err {
            Error::Transport(TransportError::UnexpectedResponse { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("Internal Server Error"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_is_transport_failure() {
        let err = classify_response(503, "");
        assert!(matches!(
            err,
            Error::Transport(TransportError::UnexpectedResponse { status: 503, .. })
        ));
    }

    #[test]
    fn api_error_display_carries_remote_fields() {
        let body = r#"{"error":{"type":"OAuthException","code":190,"message":"Invalid OAuth access token."}}"#;
        let err = classify_response(401, body);
        let rendered = err.to_string();
        assert!(rendered.contains("OAuthException"));
        assert!(rendered.contains("190"));
        assert!(rendered.contains("Invalid OAuth access token."));
    }
}

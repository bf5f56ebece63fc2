use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result of every client operation.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type of the service clients.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be built.
    #[error("build request failed: {0}")]
    Request(#[source] bce_core::Error),
    /// No credential could be resolved, or signing failed.
    #[error("sign request failed: {0}")]
    Sign(#[source] bce_core::Error),
    /// The request never produced an HTTP response.
    #[error("send request failed: {0}")]
    Transport(#[source] bce_core::Error),
    /// The service answered with a non-success status.
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// A success body could not be decoded.
    #[error("decode response failed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// The service error carried by this error, if any.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Error::Service(err) => Some(err),
            _ => None,
        }
    }
}

/// Error envelope returned by BCE services on failure.
///
/// ```json
/// {"code":"AccessDenied","message":"Access denied.","requestId":"7f5a..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("Service returned error: Code={code}, RequestId={request_id}, Message={message}")]
pub struct ServiceError {
    /// Error code, or the numeric HTTP status when the body carried none.
    pub code: String,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Request id assigned by the service, `EMPTY` when unknown.
    #[serde(rename = "requestId", default)]
    pub request_id: String,
}

/// Request id used when the service did not report one.
pub const EMPTY_REQUEST_ID: &str = "EMPTY";

impl ServiceError {
    /// Build an error from the HTTP status alone.
    ///
    /// Used for responses without a decodable body, such as `HEAD` and `DELETE`.
    pub fn from_status(status: StatusCode, request_id: Option<&str>) -> Self {
        Self {
            code: status.as_u16().to_string(),
            message: status_line(status),
            request_id: request_id
                .filter(|v| !v.is_empty())
                .unwrap_or(EMPTY_REQUEST_ID)
                .to_string(),
        }
    }
}

/// Render a status the way it appears in the response status line, e.g. `404 Not Found`.
pub(crate) fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_service_error_deserialize() {
        let err: ServiceError = serde_json::from_str(
            r#"{"code":"AccessDenied","message":"Access denied.","requestId":"req-1"}"#,
        )
        .unwrap();

        assert_eq!(err.code, "AccessDenied");
        assert_eq!(err.message, "Access denied.");
        assert_eq!(err.request_id, "req-1");
        assert_eq!(
            err.to_string(),
            "Service returned error: Code=AccessDenied, RequestId=req-1, Message=Access denied."
        );
    }

    #[test]
    fn test_service_error_from_status() {
        let err = ServiceError::from_status(StatusCode::NOT_FOUND, None);
        assert_eq!(err.code, "404");
        assert_eq!(err.message, "404 Not Found");
        assert_eq!(err.request_id, "EMPTY");

        let err = ServiceError::from_status(StatusCode::FORBIDDEN, Some("req-2"));
        assert_eq!(err.request_id, "req-2");
    }

    #[test]
    fn test_status_line_without_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_line(status), "599");
    }

    #[test]
    fn test_service_error_accessor() {
        let err: Error = ServiceError::from_status(StatusCode::BAD_REQUEST, None).into();
        assert_eq!(err.service_error().map(|v| v.code.as_str()), Some("400"));

        let err = Error::Transport(bce_core::Error::unexpected("connection refused"));
        assert!(err.service_error().is_none());
    }
}

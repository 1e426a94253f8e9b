//! HTTP request handlers
//!
//! Error mapping and the service-level endpoints.

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::error::StudyError;
use crate::state::AppState;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    /// Carries the file size for the `Content-Range: bytes */size` header
    RangeNotSatisfiable(u64),
    ScanFailed,
    InternalError(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::RangeNotSatisfiable(size) => {
                let mut response = (
                    StatusCode::RANGE_NOT_SATISFIABLE,
                    Json(serde_json::json!({ "error": "Range not satisfiable" })),
                )
                    .into_response();
                if let Ok(value) = HeaderValue::from_str(&format!("bytes */{}", size)) {
                    response.headers_mut().insert(header::CONTENT_RANGE, value);
                }
                return response;
            }
            HttpError::ScanFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to scan directory".to_string(),
            ),
            HttpError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<StudyError> for HttpError {
    fn from(err: StudyError) -> Self {
        match err {
            StudyError::MissingPath => HttpError::BadRequest(err.to_string()),
            StudyError::UnsupportedSubtitle(_) => HttpError::BadRequest(err.to_string()),
            StudyError::NotFound(_) | StudyError::NotADirectory(_) => {
                HttpError::NotFound(err.to_string())
            }
            StudyError::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                HttpError::NotFound(err.to_string())
            }
            _ => HttpError::InternalError(err.to_string()),
        }
    }
}

/// Pull a required, non-empty `path` parameter out of a request
pub fn require_path(path: Option<String>) -> Result<String, HttpError> {
    match path {
        Some(p) if !p.is_empty() => Ok(p),
        _ => Err(StudyError::MissingPath.into()),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("study-stream v", env!("CARGO_PKG_VERSION"))
}

/// Debug endpoint - server status
pub async fn server_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs(),
        "cors_enabled": state.config.cors_enabled,
        "stream_buffer_size": state.config.stream.buffer_size,
        "max_range_bytes": state.config.stream.max_range_bytes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "OK");
    }

    #[tokio::test]
    async fn test_version_check() {
        assert!(version_check().await.starts_with("study-stream v"));
    }

    #[test]
    fn test_require_path() {
        assert!(matches!(require_path(None), Err(HttpError::BadRequest(_))));
        assert!(matches!(
            require_path(Some(String::new())),
            Err(HttpError::BadRequest(_))
        ));
        assert_eq!(require_path(Some("/a".to_string())).unwrap(), "/a");
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            HttpError::from(StudyError::NotFound(PathBuf::from("/x"))),
            HttpError::NotFound(_)
        ));
        assert!(matches!(
            HttpError::from(StudyError::Io(std::io::Error::from(
                std::io::ErrorKind::NotFound
            ))),
            HttpError::NotFound(_)
        ));
        assert!(matches!(
            HttpError::from(StudyError::Io(std::io::Error::from(
                std::io::ErrorKind::PermissionDenied
            ))),
            HttpError::InternalError(_)
        ));
    }

    #[test]
    fn test_range_error_response() {
        let response = HttpError::RangeNotSatisfiable(1234).into_response();
        assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(
            response.headers().get(header::CONTENT_RANGE).unwrap(),
            "bytes */1234"
        );
    }
}

//! Course scan handlers
//!
//! Every request rescans the folder from scratch; nothing is cached.

use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::course::{scan_course, Course};
use crate::error::StudyError;

use super::handlers::{require_path, HttpError};

/// Query parameters for `GET /api/scan`
#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    pub path: Option<String>,
}

/// Body of `POST /api/scan`
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Absolute path of the course folder
    #[serde(default)]
    pub path: Option<String>,
}

/// Scan a course folder
/// GET /api/scan?path=...
pub async fn scan_from_query(Query(query): Query<ScanQuery>) -> Result<Json<Course>, HttpError> {
    run_scan(query.path).await
}

/// Scan a course folder
/// POST /api/scan {"path": "..."}
pub async fn scan_from_body(Json(request): Json<ScanRequest>) -> Result<Json<Course>, HttpError> {
    run_scan(request.path).await
}

async fn run_scan(path: Option<String>) -> Result<Json<Course>, HttpError> {
    let path = require_path(path)?;

    // Directory walking is blocking IO
    let scan_path = path.clone();
    let result = tokio::task::spawn_blocking(move || scan_course(&scan_path))
        .await
        .map_err(|e| HttpError::InternalError(e.to_string()))?;

    result.map(Json).map_err(|e| scan_error(&path, e))
}

/// Map scan errors to responses. IO failures are logged in full and
/// reported to the client only as a generic scan failure.
fn scan_error(path: &str, err: StudyError) -> HttpError {
    match err {
        StudyError::MissingPath => HttpError::BadRequest("Missing path parameter".to_string()),
        StudyError::NotFound(_) => HttpError::NotFound("Directory not found".to_string()),
        other => {
            tracing::error!("Scan of {} failed: {}", path, other);
            HttpError::ScanFailed
        }
    }
}

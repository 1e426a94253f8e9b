//! Media file handlers
//!
//! Serves course videos with HTTP range support so the player can seek,
//! and sidecar subtitles converted to WebVTT.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::course::{extension_lower, is_video_file};
use crate::error::StudyError;
use crate::state::AppState;
use crate::subtitle::{load_as_webvtt, SubtitleFormat};

use super::handlers::{require_path, HttpError};
use super::range::{parse_range_header, RangeRequest};

/// Query parameters for media endpoints
#[derive(Debug, Deserialize)]
pub struct MediaQuery {
    pub path: Option<String>,
}

/// Content type for a video file
pub fn video_content_type(path: &Path) -> &'static str {
    match extension_lower(path).as_deref() {
        Some("mp4") => "video/mp4",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}

/// Format a timestamp as an HTTP date
fn http_date(time: std::time::SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

async fn file_metadata(path: &Path) -> Result<std::fs::Metadata, HttpError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => Ok(metadata),
        Ok(_) => Err(HttpError::NotFound("File not found".to_string())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(HttpError::NotFound("File not found".to_string()))
        }
        Err(e) => {
            tracing::warn!("Failed to stat {:?}: {}", path, e);
            Err(StudyError::Io(e).into())
        }
    }
}

/// Stream a video file, honoring a single byte range
/// GET /api/video?path=...
pub async fn stream_video(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MediaQuery>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let path = PathBuf::from(require_path(query.path)?);
    if !is_video_file(&path) {
        tracing::warn!("Refusing to stream non-video file {:?}", path);
        return Err(HttpError::BadRequest("Unsupported video format".to_string()));
    }
    let metadata = file_metadata(&path).await?;
    let file_size = metadata.len();
    let content_type = video_content_type(&path);
    let stream_config = &state.config.stream;

    let range = headers
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .map(|v| parse_range_header(v, file_size))
        .unwrap_or(RangeRequest::Ignored);

    let mut file = tokio::fs::File::open(&path).await.map_err(|e| {
        tracing::warn!("Failed to open file {:?}: {}", path, e);
        HttpError::from(StudyError::Io(e))
    })?;

    let mut builder = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::ACCEPT_RANGES, "bytes");
    if let Ok(modified) = metadata.modified() {
        builder = builder.header(header::LAST_MODIFIED, http_date(modified));
    }

    let response = match range {
        RangeRequest::Satisfiable(range) => {
            let range = range.capped(stream_config.max_range_bytes);
            file.seek(std::io::SeekFrom::Start(range.start))
                .await
                .map_err(|e| HttpError::from(StudyError::Io(e)))?;

            tracing::info!(
                "Serving range {:?}: {}",
                path,
                range.content_range(file_size)
            );

            let reader = file.take(range.len());
            builder
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_LENGTH, range.len())
                .header(header::CONTENT_RANGE, range.content_range(file_size))
                .body(Body::from_stream(ReaderStream::with_capacity(
                    reader,
                    stream_config.buffer_size,
                )))
        }
        RangeRequest::Unsatisfiable => {
            tracing::debug!("Unsatisfiable range for {:?} ({} bytes)", path, file_size);
            return Err(HttpError::RangeNotSatisfiable(file_size));
        }
        RangeRequest::Ignored => {
            tracing::info!("Streaming entire file {:?} ({} bytes)", path, file_size);
            builder
                .status(StatusCode::OK)
                .header(header::CONTENT_LENGTH, file_size)
                .body(Body::from_stream(ReaderStream::with_capacity(
                    file,
                    stream_config.buffer_size,
                )))
        }
    };

    response.map_err(|e| HttpError::InternalError(e.to_string()))
}

/// Serve a sidecar subtitle as WebVTT
/// GET /api/subtitle?path=...
pub async fn serve_subtitle(Query(query): Query<MediaQuery>) -> Result<Response, HttpError> {
    let path = PathBuf::from(require_path(query.path)?);
    if SubtitleFormat::from_path(&path).is_none() {
        return Err(StudyError::UnsupportedSubtitle(path).into());
    }
    file_metadata(&path).await?;

    let vtt = tokio::task::spawn_blocking(move || load_as_webvtt(&path))
        .await
        .map_err(|e| HttpError::InternalError(e.to_string()))??;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/vtt; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(Bytes::from(vtt)))
        .map_err(|e| HttpError::InternalError(e.to_string()))
}

//! Course library module
//!
//! This module turns a folder of lecture videos into a course:
//! - Video detection by extension (mp4, mkv, webm)
//! - Grouping into an `Overview` section and one section per subfolder
//! - Sidecar subtitle matching with language inference
//! - Natural (numeric-aware) ordering of sections and videos

pub mod collate;
pub mod language;
pub mod scanner;
pub mod subtitles;

pub use scanner::scan_course;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Recognized video extensions, lowercase
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mkv", "webm"];

/// Recognized subtitle extensions, lowercase
pub const SUBTITLE_EXTENSIONS: [&str; 2] = ["srt", "vtt"];

/// Identifier of the synthetic section holding root-level videos
pub const ROOT_SECTION_ID: &str = "root-section";

/// Display name of the synthetic root section
pub const ROOT_SECTION_NAME: &str = "Overview";

/// A sidecar subtitle file attached to a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtitle {
    pub path: PathBuf,
    /// Two-letter language code
    pub lang: String,
    pub label: String,
}

/// A single lecture video
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    /// `file.ext` at the course root, `section/file.ext` inside a section
    pub id: String,
    /// File name without extension
    pub name: String,
    pub path: PathBuf,
    pub completed: bool,
    pub progress: f64,
    pub subtitles: Vec<Subtitle>,
}

impl Video {
    /// Build a freshly scanned video with no playback progress
    pub fn new(id: String, name: String, path: PathBuf, subtitles: Vec<Subtitle>) -> Self {
        Self {
            id,
            name,
            path,
            completed: false,
            progress: 0.0,
            subtitles,
        }
    }
}

/// A group of videos, either the course root or one subfolder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub videos: Vec<Video>,
}

impl Section {
    /// The synthetic section for videos found directly in the course folder
    pub fn root(path: PathBuf, videos: Vec<Video>) -> Self {
        Self {
            id: ROOT_SECTION_ID.to_string(),
            name: ROOT_SECTION_NAME.to_string(),
            path,
            videos,
        }
    }
}

/// A scanned course folder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub path: String,
    pub sections: Vec<Section>,
    pub total_videos: usize,
    pub completed_videos: usize,
}

/// Lowercased extension of a path, if it has a UTF-8 one
pub(crate) fn extension_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Check whether a file name carries one of the video extensions
pub fn is_video_file(path: &Path) -> bool {
    extension_lower(path).is_some_and(|e| VIDEO_EXTENSIONS.contains(&e.as_str()))
}

/// Check whether a file name carries one of the subtitle extensions
pub fn is_subtitle_file(path: &Path) -> bool {
    extension_lower(path).is_some_and(|e| SUBTITLE_EXTENSIONS.contains(&e.as_str()))
}

/// File name without its final extension
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

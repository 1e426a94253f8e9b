//! Course folder scanner - builds sections and videos from a directory tree

use std::path::{Path, PathBuf};
use std::time::Instant;

use uuid::Uuid;
use walkdir::WalkDir;

use crate::error::{Result, StudyError};

use super::collate::natural_cmp;
use super::subtitles::match_subtitles;
use super::{file_stem, is_video_file, Course, Section, Video};

/// Immediate children of a directory, split by type, in listing order
#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
}

/// List one directory level. Symlinks are not followed and are neither
/// files nor directories here.
pub fn list_dir(dir: &Path) -> Result<DirListing> {
    let mut listing = DirListing::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let file_type = entry.file_type();
        if file_type.is_file() {
            listing.files.push(entry.into_path());
        } else if file_type.is_dir() {
            listing.dirs.push(entry.into_path());
        }
    }

    Ok(listing)
}

/// Turn the video files of one directory into `Video`s.
///
/// `section` prefixes the video id for videos below the course root.
fn collect_videos(files: &[PathBuf], section: Option<&str>) -> Vec<Video> {
    files
        .iter()
        .filter(|path| is_video_file(path))
        .filter_map(|path| {
            let file_name = path.file_name()?.to_string_lossy().into_owned();
            let id = match section {
                Some(section) => format!("{}/{}", section, file_name),
                None => file_name.clone(),
            };
            let subtitles = match_subtitles(files, &file_name);

            tracing::debug!(
                "Found video: {}, subtitles={}",
                id,
                subtitles.len()
            );
            Some(Video::new(id, file_stem(path), path.clone(), subtitles))
        })
        .collect()
}

/// Scan a course root one level deep.
///
/// Returns the sections in display order and the total number of videos.
/// Root-level videos form the `Overview` section, which keeps listing order
/// and always comes first; subfolder sections and their videos are sorted
/// naturally by name. Subfolders without videos are dropped.
pub fn scan_directory(root: &Path) -> Result<(Vec<Section>, usize)> {
    let listing = list_dir(root)?;
    build_sections(root, &listing)
}

/// Build sections from the listing of `root`. Any subfolder that cannot be
/// listed fails the whole scan.
fn build_sections(root: &Path, listing: &DirListing) -> Result<(Vec<Section>, usize)> {
    let root_videos = collect_videos(&listing.files, None);
    let mut total_videos = root_videos.len();

    let mut sections = Vec::new();
    for dir in &listing.dirs {
        let name = match dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let sub = list_dir(dir)?;
        let mut videos = collect_videos(&sub.files, Some(&name));
        if videos.is_empty() {
            tracing::debug!("Skipping folder without videos: {:?}", dir);
            continue;
        }

        videos.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        total_videos += videos.len();

        tracing::debug!("Found section: {}, videos={}", name, videos.len());
        sections.push(Section {
            id: name.clone(),
            name,
            path: dir.clone(),
            videos,
        });
    }

    sections.sort_by(|a, b| natural_cmp(&a.name, &b.name));

    if !root_videos.is_empty() {
        sections.insert(0, Section::root(root.to_path_buf(), root_videos));
    }

    Ok((sections, total_videos))
}

/// Stable course id for a root path
pub fn course_id(path: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, path.as_bytes()).to_string()
}

/// Display name of a course: the last path component, empty for `/`
pub fn course_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Scan a course folder into a `Course`
pub fn scan_course(path: &str) -> Result<Course> {
    if path.is_empty() {
        return Err(StudyError::MissingPath);
    }

    let root = Path::new(path);
    if !root.exists() {
        return Err(StudyError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(StudyError::NotADirectory(root.to_path_buf()));
    }

    let started = Instant::now();
    let (sections, total_videos) = scan_directory(root)?;

    let name = course_name(root);

    tracing::info!(
        "Scanned course: {:?}, sections={}, videos={}, took={:?}",
        root,
        sections.len(),
        total_videos,
        started.elapsed()
    );

    Ok(Course {
        id: course_id(path),
        name,
        path: path.to_string(),
        sections,
        total_videos,
        completed_videos: 0,
    })
}

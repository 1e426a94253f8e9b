//! Sidecar subtitle matching
//!
//! A subtitle belongs to a video when it sits in the same directory and its
//! stem starts with the video's stem: `lesson1.mp4` picks up `lesson1.srt`,
//! `lesson1.en.srt`, `lesson1_Spanish.vtt` and so on. Whatever follows the
//! shared prefix becomes the label and drives language inference.

use std::path::{Path, PathBuf};

use super::language::{language_code, DEFAULT_LANGUAGE};
use super::{file_stem, is_subtitle_file, Subtitle};

/// Label for a subtitle whose stem equals the video stem
pub const DEFAULT_LABEL: &str = "Default";

/// Match subtitles for a video against an already listed set of files.
///
/// `files` must be the regular files of the video's directory, in listing
/// order; the result keeps that order.
pub fn match_subtitles(files: &[PathBuf], video_file_name: &str) -> Vec<Subtitle> {
    let base_name = file_stem(Path::new(video_file_name));

    files
        .iter()
        .filter(|path| is_subtitle_file(path))
        .filter_map(|path| {
            let stem = file_stem(path);
            let suffix = stem.strip_prefix(base_name.as_str())?;
            Some(build_subtitle(path.clone(), suffix))
        })
        .collect()
}

fn build_subtitle(path: PathBuf, suffix: &str) -> Subtitle {
    let clean = clean_suffix(suffix);

    if clean.is_empty() {
        return Subtitle {
            path,
            lang: DEFAULT_LANGUAGE.to_string(),
            label: DEFAULT_LABEL.to_string(),
        };
    }

    Subtitle {
        path,
        lang: language_code(clean).to_string(),
        label: capitalize(clean),
    }
}

/// Strip the separators between the video stem and the language tag
fn clean_suffix(suffix: &str) -> &str {
    suffix
        .trim_start_matches(|c| matches!(c, ' ' | '.' | '_' | '-'))
        .trim()
}

/// Upper-case the first character, leave the rest untouched
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

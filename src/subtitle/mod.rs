//! Subtitle conversion module
//!
//! Sidecar subtitles are delivered to the player as WebVTT:
//! - WebVTT files pass through with the BOM removed
//! - SubRip files are rewritten into WebVTT cues

pub mod webvtt;

use std::path::Path;

use crate::course::extension_lower;
use crate::error::{Result, StudyError};

/// Subtitle format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    SubRip, // SRT
    WebVtt, // VTT
}

impl SubtitleFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match extension_lower(path)?.as_str() {
            "srt" => Some(SubtitleFormat::SubRip),
            "vtt" => Some(SubtitleFormat::WebVtt),
            _ => None,
        }
    }
}

/// Read a subtitle file and return it as WebVTT text
pub fn load_as_webvtt(path: &Path) -> Result<String> {
    let format = SubtitleFormat::from_path(path)
        .ok_or_else(|| StudyError::UnsupportedSubtitle(path.to_path_buf()))?;

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    Ok(match format {
        SubtitleFormat::WebVtt => webvtt::strip_bom(&text).to_string(),
        SubtitleFormat::SubRip => webvtt::srt_to_webvtt(&text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SubtitleFormat::from_path(Path::new("a.srt")),
            Some(SubtitleFormat::SubRip)
        );
        assert_eq!(
            SubtitleFormat::from_path(Path::new("a.en.VTT")),
            Some(SubtitleFormat::WebVtt)
        );
        assert_eq!(SubtitleFormat::from_path(Path::new("a.ass")), None);
    }

    #[test]
    fn test_load_srt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.srt");
        fs::write(&path, "1\r\n00:00:01,000 --> 00:00:02,500\r\nHello\r\n").unwrap();

        let vtt = load_as_webvtt(&path).unwrap();
        assert!(vtt.starts_with("WEBVTT\n\n"));
        assert!(vtt.contains("00:00:01.000 --> 00:00:02.500\nHello"));
    }

    #[test]
    fn test_load_vtt_passthrough() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.vtt");
        fs::write(&path, "\u{feff}WEBVTT\n\n00:01.000 --> 00:02.000\nHi\n").unwrap();

        let vtt = load_as_webvtt(&path).unwrap();
        assert_eq!(vtt, "WEBVTT\n\n00:01.000 --> 00:02.000\nHi\n");
    }

    #[test]
    fn test_load_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "x").unwrap();
        assert!(matches!(
            load_as_webvtt(&path),
            Err(StudyError::UnsupportedSubtitle(_))
        ));
    }

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_as_webvtt(&dir.path().join("gone.srt")),
            Err(StudyError::Io(_))
        ));
    }
}

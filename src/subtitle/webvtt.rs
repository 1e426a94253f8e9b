//! WebVTT generation from SubRip text

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// WebVTT file header
pub const WEBVTT_HEADER: &str = "WEBVTT";

fn srt_timestamp() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+):(\d{2}):(\d{2})[,.](\d{3})").unwrap())
}

/// Remove a leading UTF-8 byte order mark
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Rewrite the timestamps of an SRT timing line in WebVTT notation.
///
/// `1:02:03,450` becomes `01:02:03.450`; anything after the second
/// timestamp (SRT position hints) is kept as is.
pub fn convert_timing_line(line: &str) -> String {
    srt_timestamp()
        .replace_all(line, |caps: &Captures| {
            format!("{:0>2}:{}:{}.{}", &caps[1], &caps[2], &caps[3], &caps[4])
        })
        .into_owned()
}

fn is_cue_counter(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a SubRip document to WebVTT.
///
/// Cue counters are dropped and blocks without a timing line are skipped.
pub fn srt_to_webvtt(srt: &str) -> String {
    let normalized = strip_bom(srt).replace("\r\n", "\n").replace('\r', "\n");

    let mut cues = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in normalized.lines().chain(std::iter::once("")) {
        if !line.trim().is_empty() {
            block.push(line);
            continue;
        }
        if block.is_empty() {
            continue;
        }

        let mut lines = block.as_slice();
        if lines.len() > 1 && is_cue_counter(lines[0]) && lines[1].contains("-->") {
            lines = &lines[1..];
        }

        if lines[0].contains("-->") {
            let mut cue = convert_timing_line(lines[0].trim());
            for text in &lines[1..] {
                cue.push('\n');
                cue.push_str(text);
            }
            cues.push(cue);
        } else {
            tracing::debug!("Skipping SRT block without timing: {:?}", lines[0]);
        }
        block.clear();
    }

    let mut out = String::with_capacity(normalized.len() + WEBVTT_HEADER.len() + 2);
    out.push_str(WEBVTT_HEADER);
    out.push_str("\n\n");
    for cue in cues {
        out.push_str(&cue);
        out.push_str("\n\n");
    }
    out
}

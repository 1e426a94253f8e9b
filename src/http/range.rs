//! `Range` request header parsing (single `bytes=` ranges)

/// An inclusive byte range within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
    /// The request gave no last byte (`bytes=N-`)
    pub open_ended: bool,
}

impl ByteRange {
    /// Number of bytes covered
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Limit an open-ended range to at most `max` bytes
    pub fn capped(self, max: Option<u64>) -> Self {
        match max {
            Some(max) if self.open_ended && max > 0 && self.len() > max => Self {
                end: self.start + max - 1,
                ..self
            },
            _ => self,
        }
    }

    /// Value for the `Content-Range` header
    pub fn content_range(&self, file_size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, file_size)
    }
}

/// Outcome of parsing a `Range` header against a file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRequest {
    Satisfiable(ByteRange),
    /// Well formed, but outside the file; answer with 416
    Unsatisfiable,
    /// Malformed or multi-range; ignore it and send the whole file
    Ignored,
}

/// Parse a `Range` header value for a file of `file_size` bytes.
///
/// Supports `bytes=a-b`, `bytes=a-` and suffix ranges `bytes=-n`. The last
/// byte position is clamped to the end of the file.
pub fn parse_range_header(value: &str, file_size: u64) -> RangeRequest {
    let spec = match value.trim().strip_prefix("bytes=") {
        Some(spec) => spec.trim(),
        None => return RangeRequest::Ignored,
    };

    if spec.contains(',') {
        return RangeRequest::Ignored;
    }

    let (first, last) = match spec.split_once('-') {
        Some((first, last)) => (first.trim(), last.trim()),
        None => return RangeRequest::Ignored,
    };

    if first.is_empty() {
        // Suffix range: last N bytes
        let suffix_len = match last.parse::<u64>() {
            Ok(n) => n,
            Err(_) => return RangeRequest::Ignored,
        };
        if suffix_len == 0 || file_size == 0 {
            return RangeRequest::Unsatisfiable;
        }
        return RangeRequest::Satisfiable(ByteRange {
            start: file_size.saturating_sub(suffix_len),
            end: file_size - 1,
            open_ended: false,
        });
    }

    let start = match first.parse::<u64>() {
        Ok(start) => start,
        Err(_) => return RangeRequest::Ignored,
    };

    let (end, open_ended) = if last.is_empty() {
        (u64::MAX, true)
    } else {
        match last.parse::<u64>() {
            Ok(end) if end >= start => (end, false),
            _ => return RangeRequest::Ignored,
        }
    };

    if start >= file_size {
        return RangeRequest::Unsatisfiable;
    }

    RangeRequest::Satisfiable(ByteRange {
        start,
        end: end.min(file_size - 1),
        open_ended,
    })
}

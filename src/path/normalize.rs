use crate::path::{PathError, PathResult};
use crate::types::Segments;
use memchr::memchr_iter;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentOptions {
    pub decode_percent: bool,
    /// Splitting stops once `limit + 1` segments are collected.
    pub limit: Option<usize>,
}

/// Splits `path` on `/`, dropping empty segments.
///
/// Leading, trailing and repeated slashes carry no meaning, so `"/a//b/"` and
/// `"a/b"` produce the same segments. Splitting never fails: when
/// `decode_percent` is set and a segment cannot be decoded, it is kept verbatim.
///
/// With a `limit`, at most `limit + 1` segments are produced, which is enough
/// for the caller to tell that the path is over the limit.
#[tracing::instrument(level = "trace", skip(path, options), fields(path_len = path.len() as u64))]
pub fn split_segments<'a>(path: &'a str, options: &SegmentOptions) -> Segments<'a> {
    let mut segments = Segments::new();
    let mut start = 0usize;
    let cap = options.limit.map_or(usize::MAX, |limit| limit.saturating_add(1));

    for slash in memchr_iter(b'/', path.as_bytes()).chain(std::iter::once(path.len())) {
        if segments.len() == cap {
            break;
        }
        if slash > start {
            let raw = &path[start..slash];
            segments.push(prepare_segment(raw, options));
        }
        start = slash + 1;
    }

    segments
}

fn prepare_segment<'a>(raw: &'a str, options: &SegmentOptions) -> Cow<'a, str> {
    if !options.decode_percent {
        return Cow::Borrowed(raw);
    }

    match decode_segment(raw) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::debug!(segment = raw, error = %err, "keeping undecodable segment verbatim");
            Cow::Borrowed(raw)
        }
    }
}

/// Percent-decodes a single segment. Segments without `%` are borrowed as-is.
pub fn decode_segment(segment: &str) -> PathResult<Cow<'_, str>> {
    if !segment.contains('%') {
        return Ok(Cow::Borrowed(segment));
    }

    let bytes = segment.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut idx = 0usize;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let value = bytes
                .get(idx + 1..idx + 3)
                .and_then(|pair| decode_hex_pair(pair[0], pair[1]))
                .ok_or_else(|| PathError::InvalidPercentEncoding {
                    input: segment.to_string(),
                    index: idx,
                })?;
            output.push(value);
            idx += 3;
            continue;
        }

        output.push(bytes[idx]);
        idx += 1;
    }

    String::from_utf8(output)
        .map(Cow::Owned)
        .map_err(|_| PathError::InvalidUtf8AfterDecoding {
            input: segment.to_string(),
        })
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some(val(hi)? << 4 | val(lo)?)
}

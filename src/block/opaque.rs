//! Opaque block sentinel.
//!
//! A line whose trimmed content is `{{kind payload}}` belongs to the host
//! application. The kind is an identifier; the payload is whatever follows
//! it, passed through without interpretation.

/// A recognized sentinel marker, borrowing from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpaqueMarker<'a> {
    /// Marker kind, e.g. `"ad"`.
    pub kind: &'a str,
    /// Trimmed remainder after the kind. May be empty.
    pub payload: &'a str,
}

/// Parse a sentinel marker from a line.
///
/// Returns `None` unless the whole line (ignoring surrounding whitespace) is
/// a single marker.
///
/// # Example
/// ```
/// use lessonmark::block::parse_opaque_marker;
///
/// let marker = parse_opaque_marker("{{ad sidebar-top}}").unwrap();
/// assert_eq!(marker.kind, "ad");
/// assert_eq!(marker.payload, "sidebar-top");
/// assert!(parse_opaque_marker("{{ not a kind }}").is_none());
/// ```
pub fn parse_opaque_marker(line: &str) -> Option<OpaqueMarker<'_>> {
    let inner = line.trim().strip_prefix("{{")?.strip_suffix("}}")?;
    let bytes = inner.as_bytes();

    // Kind must start with an ASCII letter, directly after `{{`
    if bytes.first().is_none_or(|b| !b.is_ascii_alphabetic()) {
        return None;
    }

    let mut pos = 1;
    while pos < bytes.len()
        && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_' || bytes[pos] == b'-')
    {
        pos += 1;
    }

    let kind = &inner[..pos];
    let rest = &inner[pos..];

    // Kind is either the whole marker or followed by whitespace
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(OpaqueMarker {
        kind,
        payload: rest.trim(),
    })
}

//! HTML escaping utilities.
//!
//! Fast-path optimized: finds the first escapable character with `memchr`,
//! then bulk-copies the segments between escapes.

use memchr::{memchr, memchr2, memchr3};

/// Lookup table for characters escaped in HTML text content.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Lookup table for characters escaped in attribute values.
const ATTR_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape HTML text content into `out`.
///
/// # Example
/// ```
/// use lessonmark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    escape_with_table(out, input, first_text_escape(input), &TEXT_ESCAPE_TABLE);
}

/// Escape an attribute value into `out` (also escapes `'`).
///
/// # Example
/// ```
/// use lessonmark::escape::escape_attr_into;
///
/// let mut out = String::new();
/// escape_attr_into(&mut out, "it's \"quoted\"");
/// assert_eq!(out, "it&#39;s &quot;quoted&quot;");
/// ```
#[inline]
pub fn escape_attr_into(out: &mut String, input: &str) {
    escape_with_table(out, input, first_attr_escape(input), &ATTR_ESCAPE_TABLE);
}

/// Escape text content into a new string.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_text_into(&mut out, input);
    out
}

fn escape_with_table(
    out: &mut String,
    input: &str,
    first: Option<usize>,
    table: &[bool; 256],
) {
    let Some(mut pos) = first else {
        out.push_str(input);
        return;
    };

    let bytes = input.as_bytes();
    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !table[bytes[pos] as usize] {
            pos += 1;
        }
        // Escapable bytes are ASCII, so these are char boundaries
        out.push_str(&input[scan_start..pos]);

        if let Some(&b) = bytes.get(pos) {
            out.push_str(match b {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                b'"' => "&quot;",
                _ => "&#39;",
            });
            pos += 1;
        }
    }
}

#[inline]
fn first_text_escape(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    min_opt(memchr3(b'<', b'>', b'&', bytes), memchr(b'"', bytes))
}

#[inline]
fn first_attr_escape(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    min_opt(memchr3(b'<', b'>', b'&', bytes), memchr2(b'"', b'\'', bytes))
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

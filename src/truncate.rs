//! Width-aware truncation of output lines.
//!
//! Truncation measures *display* width (terminal columns), not bytes or code
//! points: CJK glyphs occupy two columns, combining and zero-width characters
//! occupy none. Cutting by byte count would misjudge where the visible edge
//! of the terminal falls.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Single-column ellipsis glyph appended to truncated lines.
const ELLIPSIS: char = '…';

/// Truncate `text` to fit within `width` display columns.
///
/// A `width` of 0 means unbounded and returns the input unchanged. A single
/// trailing newline is preserved across truncation (stripped before
/// measuring, reattached after). When the text is too wide, the longest
/// whole-character prefix of display width at most `width - 1` is kept and a
/// `…` is appended; a multi-byte or wide character is never split.
///
/// # Example
///
/// ```
/// use hyperlinked::truncate_to_width;
///
/// assert_eq!(truncate_to_width("hello world\n", 10), "hello wor…\n");
/// assert_eq!(truncate_to_width("short", 10), "short");
/// assert_eq!(truncate_to_width("anything at all", 0), "anything at all");
/// ```
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let (body, terminator) = match text.strip_suffix('\n') {
        Some(stripped) => (stripped, "\n"),
        None => (text, ""),
    };

    if UnicodeWidthStr::width(body) <= width {
        return text.to_string();
    }

    // Leave one column for the ellipsis; at width 1 this floors to 0 and
    // the result is just the ellipsis itself.
    let target = width - 1;
    let mut used = 0;
    let mut end = 0;
    for (index, ch) in body.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > target {
            break;
        }
        used += ch_width;
        end = index + ch.len_utf8();
    }

    format!("{}{ELLIPSIS}{terminator}", &body[..end])
}

// ============================================================================
// Tests
// ============================================================================

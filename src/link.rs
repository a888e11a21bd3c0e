//! OSC8 hyperlink escape-sequence encoding.
//!
//! An OSC8 envelope marks a span of text as clickable in capable terminal
//! emulators: `ESC]8;;{url}ESC\{text}ESC]8;;ESC\`. Sequences are emitted
//! unconditionally; whether the destination actually renders them is the
//! caller's responsibility, and incapable terminals display the bare text.

use crate::config::LinkFormat;
use crate::stack::SourceLocation;

/// Operating System Command introducer.
const OSC: &str = "\x1b]";
/// String terminator.
const ST: &str = "\x1b\\";

/// Wrap `text` in an OSC8 hyperlink envelope pointing at `url`.
///
/// Pure and total: any text and any URL produce a well-formed envelope. An
/// empty URL yields a valid but non-clickable span. The URL is not validated
/// or escaped.
///
/// # Example
///
/// ```
/// use hyperlinked::format_osc8;
///
/// let wrapped = format_osc8("read me", "vscode://file//tmp/a.rs:3");
/// assert_eq!(
///     wrapped,
///     "\x1b]8;;vscode://file//tmp/a.rs:3\x1b\\read me\x1b]8;;\x1b\\"
/// );
/// ```
pub fn format_osc8(text: &str, url: &str) -> String {
    format!("{OSC}8;;{url}{ST}{text}{OSC}8;;{ST}")
}

/// Wrap `text` in a hyperlink to `location`, or return it unwrapped when no
/// location could be resolved.
///
/// This is the degrade path for stack-resolution failure: the output is
/// either a well-formed envelope or plain text, never a malformed envelope.
pub fn hyperlink_at(text: &str, location: Option<&SourceLocation>, format: LinkFormat) -> String {
    match location {
        Some(location) => format_osc8(text, &format.format_url(&location.file, location.line)),
        None => text.to_string(),
    }
}

/// Wrap `text` in a hyperlink to the caller's own source location, using the
/// global printer's link format.
#[track_caller]
pub fn hyperlink(text: &str) -> String {
    let location = SourceLocation::from(std::panic::Location::caller());
    hyperlink_at(text, Some(&location), crate::print::link_format())
}

// ============================================================================
// Tests
// ============================================================================

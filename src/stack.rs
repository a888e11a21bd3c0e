//! Call-stack introspection for source-location resolution.
//!
//! Stack walking sits behind the [`StackWalker`] trait so the skip/limit and
//! name-trimming logic can be tested against synthetic frames. The production
//! implementation, [`BacktraceWalker`], resolves frames with the `backtrace`
//! crate; a build without debug info resolves nothing and the walk comes back
//! empty, which callers treat as "no hyperlink possible" rather than an
//! error.

use std::panic::Location;

// ============================================================================
// Source Locations
// ============================================================================

/// A resolved file/line pair in the host program's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Source file path as recorded in the binary's debug info.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

/// One resolved stack frame: qualified symbol name plus source mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Fully qualified function name as resolved from the symbol table.
    pub function: String,
    /// Source file path.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
}

impl Frame {
    /// The frame's source location.
    pub fn location(&self) -> SourceLocation {
        SourceLocation {
            file: self.file.clone(),
            line: self.line,
        }
    }
}

// ============================================================================
// Stack Walking
// ============================================================================

/// Capability trait for walking the active call stack.
///
/// Implementations yield up to `limit` resolvable frames, innermost first,
/// starting `skip` frames above the walk's logical origin (the code that
/// invoked the walking operation). A stack shallower than `skip + limit`
/// yields fewer frames; frames without a source mapping (synthetic or
/// inlined) are not yielded at all.
pub trait StackWalker: Send + Sync {
    /// Walk the stack, returning at most `limit` frames after dropping the
    /// first `skip` resolvable ones.
    fn frames(&self, skip: usize, limit: usize) -> Vec<Frame>;
}

/// Production walker backed by the `backtrace` crate.
///
/// Frames belonging to the walk machinery itself (the `backtrace` crate and
/// this crate's stack/print plumbing) are dropped before `skip` is applied,
/// so `skip = 0` starts at the code that called into this crate.
#[derive(Debug, Default)]
pub struct BacktraceWalker;

impl StackWalker for BacktraceWalker {
    fn frames(&self, skip: usize, limit: usize) -> Vec<Frame> {
        if limit == 0 {
            return Vec::new();
        }

        let mut frames = Vec::new();
        let mut remaining_skip = skip;
        backtrace::trace(|raw| {
            let mut resolved: Option<Frame> = None;
            backtrace::resolve_frame(raw, |symbol| {
                if resolved.is_some() {
                    return;
                }
                let (Some(name), Some(file), Some(line)) =
                    (symbol.name(), symbol.filename(), symbol.lineno())
                else {
                    return;
                };
                resolved = Some(Frame {
                    function: name.to_string(),
                    file: file.display().to_string(),
                    line,
                });
            });

            let Some(frame) = resolved else {
                // Unresolvable frame; keep walking.
                return true;
            };
            if is_walk_machinery(&frame.function) {
                return true;
            }
            if remaining_skip > 0 {
                remaining_skip -= 1;
                return true;
            }
            frames.push(frame);
            frames.len() < limit
        });
        frames
    }
}

/// Frames between the caller and the actual unwind are plumbing, not part of
/// the stack the caller asked about.
fn is_walk_machinery(function: &str) -> bool {
    function.starts_with("backtrace::")
        || function.contains("hyperlinked::stack::")
        || function.contains("hyperlinked::print::")
}

// ============================================================================
// Symbol Name Trimming
// ============================================================================

/// Reduce a qualified symbol name to its bare final segment.
///
/// Drops the module-path prefix and the rustc symbol-hash suffix, turning
/// `myapp::worker::run::h1f00ba4d8e21c3aa` into `run`.
///
/// # Example
///
/// ```
/// use hyperlinked::trim_function_name;
///
/// assert_eq!(trim_function_name("myapp::worker::run"), "run");
/// assert_eq!(trim_function_name("main"), "main");
/// ```
pub fn trim_function_name(name: &str) -> &str {
    let name = strip_symbol_hash(name);
    match name.rsplit_once("::") {
        Some((_, bare)) => bare,
        None => name,
    }
}

/// Strip a trailing `::h<16 hex digits>` rustc symbol hash, if present.
fn strip_symbol_hash(name: &str) -> &str {
    match name.rsplit_once("::") {
        Some((head, tail))
            if tail.len() == 17
                && tail.starts_with('h')
                && tail[1..].bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            head
        }
        _ => name,
    }
}

// ============================================================================
// Tests
// ============================================================================

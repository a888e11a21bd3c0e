//! Print helpers that emit OSC8 hyperlinks to the source location where the
//! print was called. Clicking the output in a terminal that supports OSC8
//! opens your editor at that line.
//!
//! Lines carry a relative millisecond timestamp prefix (see [`start_timer`]),
//! are optionally truncated to a configured terminal width, and are wrapped
//! in a hyperlink envelope pointing at the call site. When no source location
//! can be resolved, output degrades to plain text; it is never malformed.
//!
//! ```no_run
//! hyperlinked::start_timer();
//! hyperlinked::linkln!("🚀 started");
//! hyperlinked::linkf!("⤴ sent {} bytes", 128);
//! hyperlinked::stacktrace(3);
//! ```
//!
//! Suggested emoji prefixes for different operations:
//!
//! - ⤴ Sent
//! - ⬅ Received
//! - ⬇ Written / Created
//! - 📡 Listening, long-polling
//! - ⚙️ State transition
//! - 🚀 Started
//! - ✅ Success
//! - ❌ Failure
//! - 🔄 Retry
//! - 🕐 Scheduled task execution
//! - 🟢 Good
//! - 🔴 Bad
//! - 🟡 In progress
//!
//! # Configuration
//!
//! Read from the environment at first use of the global printer:
//!
//! - `HYPERLINKED_FORMAT` — URL scheme: `cursor` (default), `vscode`,
//!   `wormhole`; anything else falls back to `cursor`
//! - `HYPERLINKED_NO_TRUNCATE` — set to any non-empty value to disable width
//!   truncation
//! - `HYPERLINKED_COLUMNS` — positive integer truncation width; unset means
//!   unbounded
//!
//! Hosts wanting deterministic behavior construct a [`Printer`] with an
//! explicit [`Config`] instead of relying on the global one.
//!
//! # Modules
//!
//! - [`config`] - Link formats, environment configuration
//! - [`truncate`] - Display-width-aware line truncation
//! - [`stack`] - Call-stack introspection and the [`StackWalker`] seam
//! - [`timer`] - Relative-timestamp tracking
//! - [`link`] - OSC8 envelope encoding
//! - [`print`] - The [`Printer`] façade and the global printer

pub mod config;
pub mod link;
pub mod print;
pub mod stack;
pub mod timer;
pub mod truncate;

// Re-export commonly used types
pub use config::{Config, LinkFormat};
pub use link::{format_osc8, hyperlink, hyperlink_at};
pub use print::{
    OutputSink, Printer, elapsed_ms, locate, print_fmt, print_line, relative_ms, set_columns,
    set_link_format, set_truncate, stacktrace, start_timer,
};
pub use stack::{BacktraceWalker, Frame, SourceLocation, StackWalker, trim_function_name};
pub use timer::Timer;
pub use truncate::truncate_to_width;

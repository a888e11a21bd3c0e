//! The print façade: timestamped, truncated, hyperlinked output lines.
//!
//! A [`Printer`] owns its configuration, a [`Timer`], a stack walker, and an
//! output sink, so tests can build fully deterministic printers. The crate
//! also keeps one global printer, configured from the environment at first
//! use, behind free functions and the [`linkf!`]/[`linkln!`] macros — the
//! ergonomic path for instrumenting a program.
//!
//! Concurrent printers interleave at the sink boundary only: each emitted
//! line is a single internally well-formed envelope.
//!
//! [`linkf!`]: crate::linkf
//! [`linkln!`]: crate::linkln

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{LazyLock, RwLock};
use std::time::SystemTime;

use crate::config::{Config, LinkFormat};
use crate::link::hyperlink_at;
use crate::stack::{BacktraceWalker, SourceLocation, StackWalker, trim_function_name};
use crate::timer::Timer;
use crate::truncate::truncate_to_width;

// ============================================================================
// Output Sink
// ============================================================================

/// Trait for output sinks that receive fully rendered lines.
///
/// The default sink writes to standard output. Implement this to capture
/// output in tests or to redirect it; the sink receives one call per emitted
/// line, envelope included.
pub trait OutputSink: Send + Sync {
    /// Write an already-rendered chunk. No newline is added.
    fn write(&self, text: &str);
}

/// Default sink: standard output, flushed per write so partial lines (no
/// trailing newline) appear immediately.
struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }
}

// ============================================================================
// Printer
// ============================================================================

/// A print façade composing the timer, truncator, locator, and encoder.
///
/// # Example
///
/// ```no_run
/// use hyperlinked::{Config, Printer};
///
/// let printer = Printer::new(Config::default());
/// printer.start_timer();
/// printer.print_line("🚀 started");
/// ```
pub struct Printer {
    config: RwLock<Config>,
    timer: Timer,
    walker: Box<dyn StackWalker>,
    sink: Box<dyn OutputSink>,
}

impl Printer {
    /// Create a printer with the given configuration, the production stack
    /// walker, and a stdout sink.
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            timer: Timer::new(),
            walker: Box::new(BacktraceWalker),
            sink: Box::new(StdoutSink),
        }
    }

    /// Create a printer configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// Replace the stack walker (for tests or alternate platforms).
    pub fn with_walker(mut self, walker: Box<dyn StackWalker>) -> Self {
        self.walker = walker;
        self
    }

    /// Replace the output sink.
    pub fn with_sink(mut self, sink: Box<dyn OutputSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Config {
        match self.config.read() {
            Ok(guard) => *guard,
            Err(_) => Config::default(),
        }
    }

    /// Change the hyperlink URL scheme.
    pub fn set_link_format(&self, format: LinkFormat) {
        if let Ok(mut guard) = self.config.write() {
            guard.link_format = format;
        }
    }

    /// Enable or disable width truncation.
    pub fn set_truncate(&self, enabled: bool) {
        if let Ok(mut guard) = self.config.write() {
            guard.truncate = enabled;
        }
    }

    /// Set the truncation width in columns; 0 means unbounded.
    pub fn set_columns(&self, columns: usize) {
        if let Ok(mut guard) = self.config.write() {
            guard.columns = columns;
        }
    }

    // =========================================
    // Timer delegation
    // =========================================

    /// Reset time zero for relative timestamps. Call at the beginning of a
    /// test or program.
    pub fn start_timer(&self) {
        self.timer.start();
    }

    /// Milliseconds since [`Printer::start_timer`], or 0 if never started.
    pub fn elapsed_ms(&self) -> i64 {
        self.timer.elapsed_ms()
    }

    /// Render a timestamp relative to this printer's time zero. See
    /// [`Timer::relative_ms`].
    pub fn relative_ms(&self, t: Option<SystemTime>) -> String {
        self.timer.relative_ms(t)
    }

    // =========================================
    // Printing
    // =========================================

    /// Print formatted text prefixed with the elapsed-ms timestamp, wrapped
    /// in a hyperlink to the caller. No implicit trailing newline.
    ///
    /// Usually invoked through [`linkf!`](crate::linkf).
    #[track_caller]
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        let location = SourceLocation::from(Location::caller());
        let text = self.render(&format!("{args}"));
        self.emit(&text, Some(&location));
    }

    /// Print a message line prefixed with the elapsed-ms timestamp, wrapped
    /// in a hyperlink to the caller. Appends a trailing newline.
    ///
    /// Usually invoked through [`linkln!`](crate::linkln).
    #[track_caller]
    pub fn print_line(&self, message: &str) {
        let location = SourceLocation::from(Location::caller());
        let text = self.render(&format!("{message}\n"));
        self.emit(&text, Some(&location));
    }

    /// Print up to `n` stack frames starting at the caller, innermost first.
    ///
    /// Each line is truncated and wrapped in its own envelope pointing at
    /// that specific frame, and written immediately. A stack shallower than
    /// `n` prints as many frames as exist.
    pub fn stacktrace(&self, n: usize) {
        let ms = self.elapsed_ms();
        for (index, frame) in self.walker.frames(0, n).iter().enumerate() {
            let name = trim_function_name(&frame.function);
            let line = self.truncate(&format!("[{ms:5}] #{index} {name}\n"));
            self.emit(&line, Some(&frame.location()));
        }
    }

    /// Resolve the source location `skip` frames above the caller, or `None`
    /// if the stack is shallower or carries no source mapping.
    pub fn locate(&self, skip: usize) -> Option<SourceLocation> {
        self.walker
            .frames(skip, 1)
            .into_iter()
            .next()
            .map(|frame| frame.location())
    }

    // =========================================
    // Internals
    // =========================================

    fn effective_width(&self) -> usize {
        let config = self.config();
        if config.truncate {
            config.terminal_width()
        } else {
            0
        }
    }

    fn truncate(&self, text: &str) -> String {
        truncate_to_width(text, self.effective_width())
    }

    /// Timestamp prefix plus truncation; the shared half of both print ops.
    fn render(&self, text: &str) -> String {
        self.truncate(&format!("[{:5}] {}", self.elapsed_ms(), text))
    }

    fn emit(&self, text: &str, location: Option<&SourceLocation>) {
        self.sink
            .write(&hyperlink_at(text, location, self.config().link_format));
    }
}

// ============================================================================
// Global Printer
// ============================================================================

static GLOBAL: LazyLock<Printer> = LazyLock::new(Printer::from_env);

/// The crate-global printer, lazily configured from the environment.
fn global() -> &'static Printer {
    &GLOBAL
}

/// The global printer's current link format. Used by
/// [`hyperlink`](crate::hyperlink).
pub(crate) fn link_format() -> LinkFormat {
    global().config().link_format
}

/// Reset the global printer's time zero. Call at the beginning of a test or
/// program.
pub fn start_timer() {
    global().start_timer();
}

/// Milliseconds since [`start_timer`], or 0 if it was never called.
pub fn elapsed_ms() -> i64 {
    global().elapsed_ms()
}

/// Render a timestamp relative to the global time zero: `"now"` for `None`,
/// an absolute RFC3339 rendering if the timer was never started, otherwise
/// the signed millisecond offset like `"+1000"` or `"-500"`.
pub fn relative_ms(t: Option<SystemTime>) -> String {
    global().relative_ms(t)
}

/// Change the global hyperlink URL scheme.
pub fn set_link_format(format: LinkFormat) {
    global().set_link_format(format);
}

/// Enable or disable global width truncation.
pub fn set_truncate(enabled: bool) {
    global().set_truncate(enabled);
}

/// Set the global truncation width in columns; 0 means unbounded.
pub fn set_columns(columns: usize) {
    global().set_columns(columns);
}

/// Print through the global printer; see [`Printer::print_fmt`]. Prefer the
/// [`linkf!`](crate::linkf) macro.
#[track_caller]
pub fn print_fmt(args: fmt::Arguments<'_>) {
    global().print_fmt(args);
}

/// Print through the global printer; see [`Printer::print_line`]. Prefer the
/// [`linkln!`](crate::linkln) macro.
#[track_caller]
pub fn print_line(message: &str) {
    global().print_line(message);
}

/// Print a stack dump through the global printer; see [`Printer::stacktrace`].
pub fn stacktrace(n: usize) {
    global().stacktrace(n);
}

/// Resolve a source location through the global printer; see
/// [`Printer::locate`].
pub fn locate(skip: usize) -> Option<SourceLocation> {
    global().locate(skip)
}

// ============================================================================
// Macros
// ============================================================================

/// Print with a millisecond timestamp prefix, like `print!`, hyperlinked to
/// the call site.
///
/// ```no_run
/// hyperlinked::start_timer();
/// hyperlinked::linkf!("⤴ sent {} bytes", 128);
/// ```
#[macro_export]
macro_rules! linkf {
    ($($arg:tt)*) => {
        $crate::print_fmt(::std::format_args!($($arg)*))
    };
}

/// Print with a millisecond timestamp prefix and a trailing newline, like
/// `println!`, hyperlinked to the call site.
///
/// ```no_run
/// hyperlinked::linkln!("✅ {} checks passed", 3);
/// ```
#[macro_export]
macro_rules! linkln {
    ($($arg:tt)*) => {
        $crate::print_line(&::std::format!($($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

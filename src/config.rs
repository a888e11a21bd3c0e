//! Configuration for link formatting and output truncation.
//!
//! Configuration is an explicit value ([`Config`]) rather than ambient
//! globals, so tests can construct printers deterministically and hosts can
//! run multiple independently configured printers. The global default printer
//! snapshots the environment once at first use via [`Config::from_env`].
//!
//! # Environment variables
//!
//! | variable | effect |
//! |---|---|
//! | `HYPERLINKED_FORMAT` | URL scheme: `cursor` (default), `vscode`, `wormhole` |
//! | `HYPERLINKED_NO_TRUNCATE` | any non-empty value disables truncation |
//! | `HYPERLINKED_COLUMNS` | positive integer truncation width |

use std::env;

// ============================================================================
// Link Format
// ============================================================================

/// URL scheme used when formatting source-location hyperlinks.
///
/// Parsed from `HYPERLINKED_FORMAT`. Unrecognized values silently fall back
/// to [`LinkFormat::Cursor`] so existing integrations never start failing on
/// a typo in their environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkFormat {
    /// `cursor://file/{file}:{line}` (default).
    #[default]
    Cursor,
    /// `vscode://file/{file}:{line}`.
    Vscode,
    /// `http://wormhole:7117/file/{file}:{line}?land-in=editor`.
    Wormhole,
}

impl LinkFormat {
    /// Parse a format name, falling back to [`LinkFormat::Cursor`] for
    /// anything unrecognized. Total: never errors.
    ///
    /// # Example
    ///
    /// ```
    /// use hyperlinked::LinkFormat;
    ///
    /// assert_eq!(LinkFormat::parse("vscode"), LinkFormat::Vscode);
    /// assert_eq!(LinkFormat::parse("emacs"), LinkFormat::Cursor);
    /// ```
    pub fn parse(value: &str) -> Self {
        match value {
            "vscode" => Self::Vscode,
            "wormhole" => Self::Wormhole,
            _ => Self::Cursor,
        }
    }

    /// Build the URL for a file/line pair under this scheme.
    ///
    /// The file path is substituted literally; paths containing characters
    /// that break the scheme are the caller's problem, not escaped here.
    ///
    /// # Example
    ///
    /// ```
    /// use hyperlinked::LinkFormat;
    ///
    /// let url = LinkFormat::Vscode.format_url("/tmp/app.rs", 42);
    /// assert_eq!(url, "vscode://file//tmp/app.rs:42");
    /// ```
    pub fn format_url(self, file: &str, line: u32) -> String {
        match self {
            Self::Cursor => format!("cursor://file/{file}:{line}"),
            Self::Vscode => format!("vscode://file/{file}:{line}"),
            Self::Wormhole => {
                format!("http://wormhole:7117/file/{file}:{line}?land-in=editor")
            }
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Printer configuration: link scheme, truncation toggle, column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// URL scheme for hyperlinks.
    pub link_format: LinkFormat,
    /// Whether output lines are truncated to [`Config::terminal_width`].
    pub truncate: bool,
    /// Truncation width in columns; 0 means unbounded.
    pub columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_format: LinkFormat::Cursor,
            truncate: true,
            columns: 0,
        }
    }
}

impl Config {
    /// Snapshot configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset, matching the shell convention of
    /// `VAR= cmd` meaning "not configured".
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let link_format = match lookup("HYPERLINKED_FORMAT") {
            Some(value) if !value.is_empty() => LinkFormat::parse(&value),
            _ => LinkFormat::default(),
        };
        let truncate = lookup("HYPERLINKED_NO_TRUNCATE").is_none_or(|value| value.is_empty());
        let columns = lookup("HYPERLINKED_COLUMNS")
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(0);
        Self {
            link_format,
            truncate,
            columns,
        }
    }

    /// The active terminal column width, or 0 for "unbounded / do not
    /// truncate". Pure function of the configuration; never probes the real
    /// terminal device, keeping behavior deterministic and testable.
    pub fn terminal_width(&self) -> usize {
        self.columns
    }
}

// ============================================================================
// Tests
// ============================================================================

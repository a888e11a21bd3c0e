//! Shared test helpers for hyperlinked tests.
//!
//! This module provides common utilities used across test files to reduce
//! duplication and ensure consistent test behavior.

// Allow dead code since not all test files use all helpers
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use hyperlinked::{Frame, OutputSink, StackWalker};

// =============================================================================
// OSC8 Envelope Parsing
// =============================================================================

/// One parsed OSC8 hyperlink envelope: the link target and the visible text.
#[derive(Debug, PartialEq, Eq)]
pub struct Envelope {
    pub url: String,
    pub text: String,
}

/// Parse a single well-formed OSC8 envelope.
///
/// Returns `None` when the input is not exactly one envelope, which doubles
/// as a well-formedness check in assertions.
pub fn parse_envelope(s: &str) -> Option<Envelope> {
    let rest = s.strip_prefix("\x1b]8;;")?;
    let (url, rest) = rest.split_once("\x1b\\")?;
    let text = rest.strip_suffix("\x1b]8;;\x1b\\")?;
    if text.contains('\x1b') {
        return None;
    }
    Some(Envelope {
        url: url.to_string(),
        text: text.to_string(),
    })
}

/// Strip OSC8 envelopes, keeping the visible text.
pub fn strip_osc8(s: &str) -> String {
    let mut result = String::new();
    let mut rest = s;
    while let Some(start) = rest.find("\x1b]8;;") {
        result.push_str(&rest[..start]);
        match rest[start..].find("\x1b\\") {
            Some(end) => rest = &rest[start + end + 2..],
            None => return result,
        }
    }
    result.push_str(rest);
    result
}

// =============================================================================
// Capture Sink
// =============================================================================

/// Sink that records every write, one entry per emitted chunk.
#[derive(Default)]
pub struct CaptureSink {
    writes: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn concatenated(&self) -> String {
        self.writes().concat()
    }
}

impl OutputSink for CaptureSink {
    fn write(&self, text: &str) {
        self.writes.lock().unwrap().push(text.to_string());
    }
}

/// Adapter so a test can keep its own handle on the sink it gives a printer.
pub struct SharedSink(pub Arc<CaptureSink>);

impl OutputSink for SharedSink {
    fn write(&self, text: &str) {
        self.0.write(text);
    }
}

// =============================================================================
// Fake Stack Walker
// =============================================================================

/// Walker over a fixed list of synthetic frames, innermost first.
pub struct FakeWalker {
    pub frames: Vec<Frame>,
}

impl FakeWalker {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

impl StackWalker for FakeWalker {
    fn frames(&self, skip: usize, limit: usize) -> Vec<Frame> {
        self.frames.iter().skip(skip).take(limit).cloned().collect()
    }
}

/// Build a synthetic frame.
pub fn frame(function: &str, file: &str, line: u32) -> Frame {
    Frame {
        function: function.to_string(),
        file: file.to_string(),
        line,
    }
}

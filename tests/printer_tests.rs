//! Scenario tests for the print façade.
//!
//! These drive a [`Printer`] through the public API with a deterministic
//! configuration, a synthetic stack walker, and a capturing sink, then assert
//! on the exact bytes a terminal would receive.

mod common;

use std::time::{Duration, SystemTime};

use common::{CaptureSink, FakeWalker, SharedSink, frame, parse_envelope, strip_osc8};
use hyperlinked::{Config, LinkFormat, Printer};

fn printer_with(config: Config, frames: Vec<hyperlinked::Frame>) -> (Printer, std::sync::Arc<CaptureSink>) {
    let sink = CaptureSink::new();
    let printer = Printer::new(config)
        .with_walker(Box::new(FakeWalker::new(frames)))
        .with_sink(Box::new(SharedSink(std::sync::Arc::clone(&sink))));
    (printer, sink)
}

// =============================================================================
// Envelope Properties
// =============================================================================

#[test]
fn test_every_emitted_line_is_a_well_formed_envelope() {
    let (printer, sink) = printer_with(Config::default(), Vec::new());
    printer.print_line("✅ first");
    printer.print_fmt(format_args!("🔄 retry {}", 2));
    printer.print_line("❌ third");

    for write in sink.writes() {
        let envelope = parse_envelope(&write)
            .unwrap_or_else(|| panic!("not a well-formed envelope: {write:?}"));
        assert!(envelope.url.starts_with("cursor://file/"));
    }
}

#[test]
fn test_envelope_text_recoverable() {
    let (printer, sink) = printer_with(Config::default(), Vec::new());
    printer.print_line("⬅ received ACK");

    let envelope = parse_envelope(&sink.writes()[0]).unwrap();
    assert_eq!(envelope.text, "[    0] ⬅ received ACK\n");
}

#[test]
fn test_link_targets_this_test_file() {
    let (printer, sink) = printer_with(Config::default(), Vec::new());
    printer.print_line("📡 listening");

    let envelope = parse_envelope(&sink.writes()[0]).unwrap();
    assert!(
        envelope.url.contains("printer_tests.rs:"),
        "expected a link to the call site, got {}",
        envelope.url
    );
}

#[test]
fn test_scheme_follows_configuration() {
    let config = Config {
        link_format: LinkFormat::Wormhole,
        ..Config::default()
    };
    let (printer, sink) = printer_with(config, Vec::new());
    printer.print_line("msg");

    let envelope = parse_envelope(&sink.writes()[0]).unwrap();
    assert!(envelope.url.starts_with("http://wormhole:7117/file/"));
    assert!(envelope.url.ends_with("?land-in=editor"));
}

// =============================================================================
// Truncation Through the Façade
// =============================================================================

#[test]
fn test_truncated_line_display_width_matches_columns() {
    use unicode_width::UnicodeWidthStr;

    let config = Config {
        columns: 20,
        ..Config::default()
    };
    let (printer, sink) = printer_with(config, Vec::new());
    printer.print_line("a message much longer than twenty columns");

    let envelope = parse_envelope(&sink.writes()[0]).unwrap();
    let visible = envelope.text.strip_suffix('\n').unwrap();
    assert_eq!(UnicodeWidthStr::width(visible), 20, "got {visible:?}");
    assert!(visible.ends_with('…'));
}

#[test]
fn test_truncation_preserves_newline_of_print_line_only() {
    let config = Config {
        columns: 15,
        ..Config::default()
    };
    let (printer, sink) = printer_with(config, Vec::new());
    printer.print_line("line variant that is long");
    printer.print_fmt(format_args!("fmt variant that is long"));

    let writes = sink.writes();
    assert!(parse_envelope(&writes[0]).unwrap().text.ends_with("…\n"));
    assert!(parse_envelope(&writes[1]).unwrap().text.ends_with('…'));
}

#[test]
fn test_no_truncate_flag_passes_long_lines_through() {
    let config = Config {
        columns: 10,
        truncate: false,
        ..Config::default()
    };
    let (printer, sink) = printer_with(config, Vec::new());
    printer.print_line("a message much longer than ten columns");

    let envelope = parse_envelope(&sink.writes()[0]).unwrap();
    assert!(envelope.text.contains("longer than ten columns\n"));
}

// =============================================================================
// Stack Dumps
// =============================================================================

#[test]
fn test_stacktrace_two_levels_deep() {
    let frames = vec![
        frame("app::handler::process::h00aa11bb22cc33dd", "/app/src/process.rs", 42),
        frame("app::main::h00aa11bb22cc33dd", "/app/src/main.rs", 7),
    ];
    let (printer, sink) = printer_with(Config::default(), frames);
    printer.stacktrace(2);

    let writes = sink.writes();
    assert_eq!(writes.len(), 2, "exactly one write per frame");

    let first = parse_envelope(&writes[0]).unwrap();
    let second = parse_envelope(&writes[1]).unwrap();

    // Innermost first, indices 0 and 1, bare symbol names.
    assert_eq!(first.text, "[    0] #0 process\n");
    assert_eq!(second.text, "[    0] #1 main\n");

    // Each line hyperlinked to its own frame.
    assert_eq!(first.url, "cursor://file//app/src/process.rs:42");
    assert_eq!(second.url, "cursor://file//app/src/main.rs:7");
}

#[test]
fn test_stacktrace_deeper_than_stack() {
    let frames = vec![frame("app::main::h00aa11bb22cc33dd", "/app/src/main.rs", 7)];
    let (printer, sink) = printer_with(Config::default(), frames);
    printer.stacktrace(10);
    assert_eq!(sink.writes().len(), 1);
}

#[test]
fn test_stripping_envelopes_leaves_readable_dump() {
    let frames = vec![
        frame("app::inner", "/a.rs", 1),
        frame("app::outer", "/b.rs", 2),
    ];
    let (printer, sink) = printer_with(Config::default(), frames);
    printer.stacktrace(2);

    let plain = strip_osc8(&sink.concatenated());
    assert_eq!(plain, "[    0] #0 inner\n[    0] #1 outer\n");
}

// =============================================================================
// Locate
// =============================================================================

#[test]
fn test_locate_skip_addresses_ancestors() {
    let frames = vec![
        frame("app::inner", "/a.rs", 1),
        frame("app::outer", "/b.rs", 2),
        frame("app::main", "/c.rs", 3),
    ];
    let (printer, _) = printer_with(Config::default(), frames);

    assert_eq!(printer.locate(0).unwrap().file, "/a.rs");
    assert_eq!(printer.locate(2).unwrap().file, "/c.rs");
    assert_eq!(printer.locate(3), None);
}

// =============================================================================
// Timer Through the Façade
// =============================================================================

#[test]
fn test_timestamp_prefix_reflects_started_timer() {
    let (printer, sink) = printer_with(Config::default(), Vec::new());
    printer.start_timer();
    std::thread::sleep(Duration::from_millis(15));
    printer.print_line("after a pause");

    let envelope = parse_envelope(&sink.writes()[0]).unwrap();
    let ms: i64 = envelope.text[1..6].trim().parse().unwrap();
    assert!(ms >= 15, "expected at least 15ms elapsed, got {ms}");
}

#[test]
fn test_independent_printers_have_independent_timers() {
    let (first, _) = printer_with(Config::default(), Vec::new());
    let (second, sink) = printer_with(Config::default(), Vec::new());

    first.start_timer();
    std::thread::sleep(Duration::from_millis(10));
    // The second printer's timer was never started, so its prefix stays 0.
    second.print_line("msg");
    let envelope = parse_envelope(&sink.writes()[0]).unwrap();
    assert!(envelope.text.starts_with("[    0] "));
}

#[test]
fn test_relative_labels() {
    let (printer, _) = printer_with(Config::default(), Vec::new());
    assert_eq!(printer.relative_ms(None), "now");

    printer.start_timer();
    let label = printer.relative_ms(Some(SystemTime::now() + Duration::from_secs(1)));
    assert!(label.starts_with('+'), "got {label:?}");
}

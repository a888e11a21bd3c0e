//! Demo binary for hyperlinked E2E testing.
//!
//! This binary exercises hyperlinked's public API for PTY-based integration
//! tests. Each subcommand demonstrates a specific feature. Configuration
//! comes from the usual environment variables (`HYPERLINKED_FORMAT`,
//! `HYPERLINKED_NO_TRUNCATE`, `HYPERLINKED_COLUMNS`).

use std::env;
use std::time::{Duration, SystemTime};

use hyperlinked::{hyperlink, linkf, linkln, relative_ms, stacktrace, start_timer};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: hyperlinked-demo <command> [args...]");
        eprintln!("Commands:");
        eprintln!("  println <message>");
        eprintln!("  printf <count>");
        eprintln!("  stacktrace <n>");
        eprintln!("  relative <offset_ms|now>");
        eprintln!("  hyperlink <text>");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "println" => {
            let message = args.get(2).map(|s| s.as_str()).unwrap_or("✅ hello");
            start_timer();
            linkln!("{}", message);
        }

        "printf" => {
            let count: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3);
            start_timer();
            linkf!("⤴ sent {count} messages\n");
        }

        "stacktrace" => {
            let n: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2);
            start_timer();
            outer(n);
        }

        "relative" => {
            let label = match args.get(2).map(|s| s.as_str()) {
                Some("now") | None => relative_ms(None),
                Some(offset) => {
                    start_timer();
                    let ms: u64 = offset.parse().unwrap_or(1000);
                    relative_ms(Some(SystemTime::now() + Duration::from_millis(ms)))
                }
            };
            println!("{label}");
        }

        "hyperlink" => {
            let text = args.get(2).map(|s| s.as_str()).unwrap_or("click me");
            println!("{}", hyperlink(text));
        }

        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

// Two levels of nesting so the dump has distinct frames to report.
fn outer(n: usize) {
    inner(n);
}

fn inner(n: usize) {
    stacktrace(n);
}

//! Relative-timestamp tracking.
//!
//! A [`Timer`] marks a "time zero" and renders offsets against it. The epoch
//! captures both a monotonic instant (so elapsed time never goes backwards
//! when the wall clock is adjusted) and a wall-clock time (so caller-supplied
//! timestamps can be compared against it).
//!
//! Concurrency: many readers may compute offsets simultaneously; a timer
//! reset takes the write lock and excludes them, per the reader/writer
//! contract.

use std::sync::RwLock;
use std::time::{Instant, SystemTime};

use chrono::{DateTime, Local, SecondsFormat};

/// The moment the timer was started, in both clock domains.
#[derive(Debug, Clone, Copy)]
struct Epoch {
    instant: Instant,
    wall: SystemTime,
}

/// Process- or scope-wide elapsed-time state for relative timestamps.
///
/// Unstarted timers report 0 elapsed milliseconds and render caller
/// timestamps absolutely. Construct one per printer, or share one across a
/// test suite; each is independent.
///
/// # Example
///
/// ```
/// use hyperlinked::Timer;
///
/// let timer = Timer::new();
/// assert_eq!(timer.elapsed_ms(), 0);
///
/// timer.start();
/// assert!(timer.elapsed_ms() >= 0);
/// ```
#[derive(Debug)]
pub struct Timer {
    epoch: RwLock<Option<Epoch>>,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create an unstarted timer.
    pub const fn new() -> Self {
        Self {
            epoch: RwLock::new(None),
        }
    }

    /// Reset time zero to now. May be called any number of times.
    pub fn start(&self) {
        let epoch = Epoch {
            instant: Instant::now(),
            wall: SystemTime::now(),
        };
        if let Ok(mut guard) = self.epoch.write() {
            *guard = Some(epoch);
        }
    }

    /// Whether [`Timer::start`] has been called.
    pub fn is_started(&self) -> bool {
        self.epoch.read().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// Milliseconds since time zero, or 0 if the timer was never started.
    ///
    /// Monotonically non-decreasing between starts.
    pub fn elapsed_ms(&self) -> i64 {
        match self.epoch.read() {
            Ok(guard) => guard.map_or(0, |epoch| epoch.instant.elapsed().as_millis() as i64),
            Err(_) => 0,
        }
    }

    /// Render a timestamp relative to time zero.
    ///
    /// `None` (an unset timestamp) is always `"now"`, regardless of timer
    /// state. If the timer was never started there is nothing to be relative
    /// to and the timestamp is rendered absolutely (RFC3339, local offset).
    /// Otherwise the signed millisecond delta: `"+1000"`, `"-500"`.
    ///
    /// # Example
    ///
    /// ```
    /// use hyperlinked::Timer;
    ///
    /// let timer = Timer::new();
    /// assert_eq!(timer.relative_ms(None), "now");
    /// ```
    pub fn relative_ms(&self, t: Option<SystemTime>) -> String {
        let Some(t) = t else {
            return "now".to_string();
        };

        let epoch = match self.epoch.read() {
            Ok(guard) => *guard,
            Err(_) => None,
        };
        let Some(epoch) = epoch else {
            return DateTime::<Local>::from(t).to_rfc3339_opts(SecondsFormat::Nanos, true);
        };

        let ms = match t.duration_since(epoch.wall) {
            Ok(ahead) => ahead.as_millis() as i64,
            Err(behind) => -(behind.duration().as_millis() as i64),
        };
        if ms >= 0 {
            format!("+{ms}")
        } else {
            ms.to_string()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Timed operation wrapper.
//!
//! Runs one store operation, measures its wall-clock duration, hands the
//! measurement to a [`TimingReporter`], and turns the operation's optional
//! result into an [`Outcome`].

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::info;

use crate::error::StoreError;

/// Result of a timed operation as seen by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    NotFound,
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::Success(value),
            None => Outcome::NotFound,
        }
    }
}

/// One measured operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub operation: String,
    pub elapsed: Duration,
}

impl Timing {
    /// Elapsed time as `HH:MM:SS.cc`.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// Format a duration as `HH:MM:SS.cc`, where `cc` is whole milliseconds / 10.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;
    let centis = elapsed.subsec_millis() / 10;
    format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}

/// Receives a [`Timing`] after every wrapped operation.
pub trait TimingReporter: Send + Sync {
    fn report(&self, timing: &Timing);
}

/// Reporter that emits an `info` event per operation, optionally also
/// collecting timings into a shared buffer.
#[derive(Default)]
pub struct LogReporter {
    buffer: Option<Arc<Mutex<Vec<Timing>>>>,
}

impl LogReporter {
    pub fn new() -> Self {
        LogReporter { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<Timing>>>) -> Self {
        LogReporter {
            buffer: Some(buffer),
        }
    }
}

impl TimingReporter for LogReporter {
    fn report(&self, timing: &Timing) {
        let elapsed = timing.elapsed_display();
        info!(
            operation = %timing.operation,
            elapsed = %elapsed,
            "Method: {}, Execution Time: {}",
            timing.operation,
            elapsed
        );
        if let Some(buffer) = &self.buffer {
            // A poisoned buffer only loses diagnostics.
            if let Ok(mut buffer) = buffer.lock() {
                buffer.push(timing.clone());
            }
        }
    }
}

/// Run `operation`, report how long it took, and map its result.
///
/// `Ok(None)` becomes [`Outcome::NotFound`], `Ok(Some(v))` becomes
/// [`Outcome::Success`]. Errors pass through; their timing is still reported.
pub fn timed<T, F>(
    reporter: &dyn TimingReporter,
    operation: &str,
    f: F,
) -> Result<Outcome<T>, StoreError>
where
    F: FnOnce() -> Result<Option<T>, StoreError>,
{
    let started = Instant::now();
    let result = f();
    reporter.report(&Timing {
        operation: operation.to_string(),
        elapsed: started.elapsed(),
    });
    result.map(Outcome::from)
}

//! The logging capability used by the legacy-compatible operations.
//!
//! The original client logged through a process-wide singleton. Here the
//! sink is an injected capability: operations that can emit diagnostics
//! come in a `*_with` form taking a [`LogSink`], and the plain form uses
//! [`default_sink`], which forwards to the `tracing` facade. Tests pass a
//! [`MemorySink`] and assert on the recorded events.

use std::sync::Mutex;

/// Severity levels emitted by textkit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Advisory: the operation continues with a degraded result.
    Warn,
    /// Advisory: the operation continues with a degraded result.
    Error,
    /// Emitted once, immediately before the process aborts on an internal
    /// invariant violation.
    Fatal,
}

/// Receiver for diagnostics.
///
/// Implementations must not block: callers fire and forget, and never retry
/// on a failed log write.
pub trait LogSink: Send + Sync {
    fn log(&self, level: Level, component: &str, message: &str);

    fn warn(&self, component: &str, message: &str) {
        self.log(Level::Warn, component, message);
    }

    fn error(&self, component: &str, message: &str) {
        self.log(Level::Error, component, message);
    }

    fn fatal(&self, component: &str, message: &str) {
        self.log(Level::Fatal, component, message);
    }
}

/// Sink forwarding to the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, component: &str, message: &str) {
        match level {
            Level::Warn => tracing::warn!(target: "textkit", component, "{}", message),
            Level::Error => tracing::error!(target: "textkit", component, "{}", message),
            Level::Fatal => {
                tracing::error!(target: "textkit", component, fatal = true, "{}", message)
            }
        }
    }
}

static DEFAULT_SINK: TracingSink = TracingSink;

/// The process-default sink (tracing-backed).
pub fn default_sink() -> &'static dyn LogSink {
    &DEFAULT_SINK
}

/// Sink recording events in memory so callers can inspect diagnostics.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(level, "component: message")` pairs in emission order.
    pub fn events(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Number of recorded events at the given level.
    pub fn count(&self, level: Level) -> usize {
        self.lock().iter().filter(|(l, _)| *l == level).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // A sink that panicked mid-push still holds usable data.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: Level, component: &str, message: &str) {
        self.lock().push((level, format!("{component}: {message}")));
    }
}

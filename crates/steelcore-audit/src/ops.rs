//! The operational (non-audit) reporting channel.
//!
//! Audit lines are the tamper-evident record of router decisions;
//! operational messages (an append that failed, a dataset that had to be
//! seeded) go elsewhere. Rather than writing to a process-global logger,
//! components take an `OpsChannel` at construction so tests can capture or
//! suppress these messages without touching global state.

use std::sync::Mutex;

/// Where operational messages go. Injected at construction.
pub trait OpsChannel: Send + Sync {
    /// A recoverable oddity worth surfacing (e.g. dataset seeded).
    fn warn(&self, message: &str);

    /// A local failure that was handled (e.g. audit append failed).
    fn error(&self, message: &str);
}

/// The default channel: forwards to `tracing`.
pub struct TracingChannel;

impl OpsChannel for TracingChannel {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "steelcore::ops", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "steelcore::ops", "{}", message);
    }
}

/// A channel that records every message in memory.
///
/// Used in tests to assert on the operational stream; also handy for
/// embedding the agent where `tracing` is not initialized.
#[derive(Default)]
pub struct CaptureChannel {
    messages: Mutex<Vec<String>>,
}

impl CaptureChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages recorded so far, in order, prefixed with their level.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("capture lock poisoned").clone()
    }
}

impl OpsChannel for CaptureChannel {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("capture lock poisoned")
            .push(format!("WARN: {}", message));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .expect("capture lock poisoned")
            .push(format!("ERROR: {}", message));
    }
}

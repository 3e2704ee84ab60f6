//! Stack trace sinks
//!
//! Two [`TraceStack`] implementations that do not need a live VM:
//!
//! - [`TracingStack`] forwards messages to `tracing`
//! - [`TraceBuffer`] records messages for later inspection

use parking_lot::Mutex;

use crate::vm::{Severity, StackId, TraceStack};

/// Forwards stack trace messages to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStack;

impl TraceStack for TracingStack {
    fn trace_stack(&self, message: &str, stack_id: StackId, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!(stack_id, "{}", message),
            Severity::Warning => tracing::warn!(stack_id, "{}", message),
            Severity::Error | Severity::Fatal => tracing::error!(stack_id, "{}", message),
        }
    }
}

/// A recorded stack trace message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub message: String,
    pub stack_id: StackId,
    pub severity: Severity,
}

/// Records every stack trace message in order
#[derive(Debug, Default)]
pub struct TraceBuffer {
    entries: Mutex<Vec<TraceEntry>>,
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded messages
    pub fn entries(&self) -> Vec<TraceEntry> {
        self.entries.lock().clone()
    }

    /// Number of recorded messages
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Remove and return all recorded messages
    pub fn drain(&self) -> Vec<TraceEntry> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl TraceStack for TraceBuffer {
    fn trace_stack(&self, message: &str, stack_id: StackId, severity: Severity) {
        self.entries.lock().push(TraceEntry {
            message: message.to_string(),
            stack_id,
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_records_in_order() {
        let buffer = TraceBuffer::new();
        buffer.trace_stack("first", 7, Severity::Info);
        buffer.trace_stack("second", 8, Severity::Warning);

        let entries = buffer.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[0].stack_id, 7);
        assert_eq!(entries[1].severity, Severity::Warning);
    }

    #[test]
    fn test_buffer_drain() {
        let buffer = TraceBuffer::new();
        buffer.trace_stack("message", 1, Severity::Info);

        assert_eq!(buffer.drain().len(), 1);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_tracing_stack_without_subscriber() {
        // No subscriber installed; must not panic
        TracingStack.trace_stack("message", 1, Severity::Fatal);
    }
}

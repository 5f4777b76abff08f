// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Diagnostic log sink collaborator.
//!
//! Resolution and installation emit debug traces through a process-wide
//! [`LogSink`] handle. The sink defaults to [`NullSink`] (discard everything)
//! and can be replaced by the host; [`TracingSink`] bridges the traces into
//! the `tracing` ecosystem.
//!
//! Messages are passed as closures so a discarded trace costs no formatting.

use std::sync::{Arc, OnceLock, RwLock};

/// Sink for fastjson diagnostic traces.
///
/// Implementations must tolerate being called from any thread and must
/// evaluate the message closure at most once.
pub trait LogSink: Send + Sync {
    /// Record a debug-level trace line.
    fn debug(&self, message: &dyn Fn() -> String);
}

/// Default sink: discards every trace.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn debug(&self, _message: &dyn Fn() -> String) {}
}

/// Sink that forwards traces to `tracing::debug!` under the `fastjson` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, message: &dyn Fn() -> String) {
        tracing::debug!(target: "fastjson", "{}", message());
    }
}

static SINK: OnceLock<RwLock<Arc<dyn LogSink>>> = OnceLock::new();

fn sink_slot() -> &'static RwLock<Arc<dyn LogSink>> {
    SINK.get_or_init(|| RwLock::new(Arc::new(NullSink)))
}

/// Replace the process-wide log sink.
pub fn set_log_sink(sink: Arc<dyn LogSink>) {
    let mut slot = sink_slot().write().unwrap_or_else(|e| e.into_inner());
    *slot = sink;
}

/// Get the current process-wide log sink.
///
/// Lazily initialized to [`NullSink`] if never set.
pub fn log_sink() -> Arc<dyn LogSink> {
    sink_slot()
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CaptureSink {
        lines: Mutex<Vec<String>>,
    }

    impl LogSink for CaptureSink {
        fn debug(&self, message: &dyn Fn() -> String) {
            self.lines.lock().unwrap().push(message());
        }
    }

    #[test]
    fn test_default_sink_is_noop() {
        // Must not panic, must not evaluate eagerly anywhere it should not.
        log_sink().debug(&|| "dropped".to_string());
    }

    #[test]
    fn test_set_and_capture_sink() {
        let capture = Arc::new(CaptureSink {
            lines: Mutex::new(Vec::new()),
        });
        set_log_sink(capture.clone());
        log_sink().debug(&|| "captured line".to_string());

        let lines = capture.lines.lock().unwrap();
        assert!(lines.iter().any(|l| l == "captured line"));
        drop(lines);

        // Restore the default so other tests are not redirected.
        set_log_sink(Arc::new(NullSink));
    }

    #[test]
    fn test_null_sink_ignores_message() {
        NullSink.debug(&|| panic!("message must not be evaluated"));
    }
}

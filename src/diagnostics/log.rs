// SPDX-License-Identifier: MPL-2.0
//! Shared, cloneable handle over the diagnostic event buffer.

use std::sync::{Arc, Mutex};

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, DiagnosticEventKind};

/// Thread-safe diagnostics sink shared across the crate.
///
/// Cloning the log clones the handle, not the buffer; every clone records
/// into the same bounded ring. Recording never fails and never blocks for
/// long, so callers sprinkle it through hot paths freely.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsLog {
    /// Creates a log backed by a ring buffer of `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records an event, stamping it with the current time.
    pub fn record(&self, kind: DiagnosticEventKind) {
        let mut events = self.events.lock().expect("diagnostics lock poisoned");
        events.push(DiagnosticEvent::new(kind));
    }

    /// Number of events currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().expect("diagnostics lock poisoned").len()
    }

    /// Returns true if nothing has been recorded (or everything was cleared).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events
            .lock()
            .expect("diagnostics lock poisoned")
            .is_empty()
    }

    /// Snapshot of the buffered event kinds, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<DiagnosticEventKind> {
        self.events
            .lock()
            .expect("diagnostics lock poisoned")
            .iter()
            .map(|event| event.kind.clone())
            .collect()
    }

    /// Drops all buffered events.
    pub fn clear(&self) {
        self.events
            .lock()
            .expect("diagnostics lock poisoned")
            .clear();
    }
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

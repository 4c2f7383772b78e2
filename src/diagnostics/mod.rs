// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting locale and catalog activity.
//!
//! This module provides infrastructure for capturing diagnostic events while
//! the application resolves locales, loads catalogs, and switches languages,
//! storing them in a memory-bounded circular buffer for later inspection.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event record
//! - [`DiagnosticEventKind`]: The kinds of activity that get captured
//! - [`DiagnosticsLog`]: Cloneable, thread-safe handle over the buffer

mod buffer;
mod events;
mod log;

pub use buffer::CircularBuffer;
pub use events::{DiagnosticEvent, DiagnosticEventKind};
pub use log::DiagnosticsLog;

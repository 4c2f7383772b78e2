// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while resolving locales, loading
//! catalogs, and switching languages, so odd behavior can be reconstructed
//! after the fact.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A request path was resolved to a locale.
    LocaleResolved {
        /// The path that was inspected.
        path: String,
        /// The locale it resolved to.
        locale: Locale,
    },

    /// A language switch was started.
    LocaleSwitch {
        /// Locale before the switch.
        from: Locale,
        /// Locale being switched to.
        to: Locale,
    },

    /// A language switch finished and the loading flag was cleared.
    SwitchSettled {
        /// Locale the application settled on.
        locale: Locale,
    },

    /// A message catalog was loaded and cached.
    CatalogLoaded {
        /// Locale the catalog belongs to.
        locale: Locale,
    },

    /// A translation key had no entry in the catalog.
    MissingKey {
        /// Fully qualified dotted key that missed.
        key: String,
    },

    /// A translation key existed but held an unusable shape
    /// (e.g., an array where a string was expected).
    MalformedValue {
        /// Fully qualified dotted key that was malformed.
        key: String,
    },

    /// Non-critical warning.
    Warning {
        /// Brief description of the warning
        message: String,
    },

    /// Critical error.
    Error {
        /// Brief description of the error
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::CatalogLoaded {
            locale: Locale::Vi,
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn diagnostic_event_with_timestamp_uses_provided_timestamp() {
        let timestamp = Instant::now();
        let event = DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::MissingKey {
                key: "hero.greeting".to_string(),
            },
            timestamp,
        );

        assert_eq!(event.timestamp, timestamp);
    }

    #[test]
    fn diagnostic_event_kind_serializes_to_json() {
        let switch = DiagnosticEventKind::LocaleSwitch {
            from: Locale::Vi,
            to: Locale::En,
        };

        let json = serde_json::to_string(&switch).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"locale_switch\""));
        assert!(json.contains("\"from\":\"vi\""));
        assert!(json.contains("\"to\":\"en\""));
    }

    #[test]
    fn diagnostic_event_kind_deserializes_from_json() {
        let json = r#"{"type":"missing_key","key":"contact.form.title"}"#;
        let event: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        match event {
            DiagnosticEventKind::MissingKey { key } => {
                assert_eq!(key, "contact.form.title");
            }
            _ => panic!("expected MissingKey variant"),
        }
    }

    #[test]
    fn locale_resolved_round_trips_through_json() {
        let resolved = DiagnosticEventKind::LocaleResolved {
            path: "/en/skills".to_string(),
            locale: Locale::En,
        };
        let json = serde_json::to_string(&resolved).expect("serialize");
        let back: DiagnosticEventKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, resolved);
    }
}

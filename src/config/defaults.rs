// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for the tunable values the rest of the crate
//! reads. Constants are organized by category.

// ==========================================================================
// Language Switch Defaults
// ==========================================================================

/// Default settle window for a language switch (in milliseconds).
///
/// A switch is considered finished once the navigation has landed on the
/// target path or this much time has passed, whichever comes first.
pub const DEFAULT_SWITCH_DEBOUNCE_MS: u64 = 300;

/// Minimum settle window (in milliseconds). Zero settles immediately.
pub const MIN_SWITCH_DEBOUNCE_MS: u64 = 0;

/// Maximum settle window (in milliseconds).
pub const MAX_SWITCH_DEBOUNCE_MS: u64 = 5_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the in-memory diagnostics ring buffer.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 4_096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_SWITCH_DEBOUNCE_MS >= MIN_SWITCH_DEBOUNCE_MS);
    assert!(DEFAULT_SWITCH_DEBOUNCE_MS >= MIN_SWITCH_DEBOUNCE_MS);
    assert!(DEFAULT_SWITCH_DEBOUNCE_MS <= MAX_SWITCH_DEBOUNCE_MS);

    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
};

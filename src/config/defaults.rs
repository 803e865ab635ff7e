// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display duration**: How long a toast stays before auto-dismiss
//! - **Transitions**: Entry deferral and exit transition timing
//! - **Runtime**: Tick interval used to drive the timers

// ==========================================================================
// Display Duration Defaults
// ==========================================================================

/// Default time a notification stays visible before auto-dismiss (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Maximum configurable default duration (in milliseconds).
pub const MAX_DURATION_MS: u64 = 600_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay between appending a toast and starting its entry transition (in milliseconds).
///
/// The element must exist in its initial state for at least one frame,
/// otherwise the entry transition has nothing to animate from.
pub const DEFAULT_ENTRY_DELAY_MS: u64 = 100;

/// Maximum entry delay (in milliseconds).
pub const MAX_ENTRY_DELAY_MS: u64 = 1000;

/// Length of the exit transition, and the deadline after which a dismissing
/// toast is detached even if no transition-end signal arrived (in milliseconds).
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 300;

/// Minimum exit transition; removal is never instantaneous.
pub const MIN_EXIT_TRANSITION_MS: u64 = 50;

/// Maximum exit transition (in milliseconds).
pub const MAX_EXIT_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Interval of the tick subscription while notifications are alive (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    assert!(DEFAULT_ENTRY_DELAY_MS <= MAX_ENTRY_DELAY_MS);
    assert!(MIN_EXIT_TRANSITION_MS > 0);
    assert!(DEFAULT_EXIT_TRANSITION_MS >= MIN_EXIT_TRANSITION_MS);
    assert!(DEFAULT_EXIT_TRANSITION_MS <= MAX_EXIT_TRANSITION_MS);
    assert!(TICK_INTERVAL_MS < DEFAULT_EXIT_TRANSITION_MS);
};

// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, `Severity` and lifecycle `Phase`
//! - [`container`] - The `ToastContainer` capability and the headless `Stack`
//! - [`presenter`] - `Presenter` driving entry, timed and user dismissal, and removal
//! - [`toast`] - Toast widget component for rendering the stack
//!
//! # Usage
//!
//! ```
//! use dashboard_toasts::ui::notifications::{DisplayDuration, Presenter, Severity};
//! use std::time::{Duration, Instant};
//!
//! let mut presenter = Presenter::default();
//! let t0 = Instant::now();
//! presenter.show_at(t0, "Saved.", Severity::Success, DisplayDuration::from_millis(2000));
//!
//! // Drive timers from a tick subscription
//! for ms in [100, 2000, 2300] {
//!     presenter.tick(t0 + Duration::from_millis(ms));
//! }
//! assert!(!presenter.has_notifications());
//! ```
//!
//! # Lifecycle
//!
//! `Created -> Shown -> Dismissing -> Removed`. Dismissal is idempotent, so a
//! click racing the auto-dismiss timer detaches the toast exactly once.

pub mod container;
pub mod notification;
pub mod presenter;
pub mod toast;

pub use container::{Stack, ToastContainer, ToastElement};
pub use notification::{DisplayDuration, Icon, Notification, NotificationId, Phase, Severity};
pub use presenter::{Message as NotificationMessage, Presenter, Timing};
pub use toast::Toast;

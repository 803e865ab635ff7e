// SPDX-License-Identifier: MPL-2.0
//! `dashboard_toasts` is a toast notification presenter for dashboards,
//! built with the Iced GUI framework.
//!
//! Toasts are appended to an ordered container, revealed after a short entry
//! deferral, dismissed either by the user or by a one-shot timer, and
//! detached exactly once after their exit transition. The lifecycle is a
//! plain state machine driven by explicit instants, so it runs headless in
//! tests and under the iced runtime alike.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::NotificationMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the notification presenter.
    Notification(NotificationMessage),
    /// Periodic tick driving toast timers.
    Tick(Instant),
    /// A dashboard button asked for a toast.
    Trigger(DemoToast),
    /// Close every toast currently on screen.
    DismissAll,
}

/// Toasts offered by the dashboard buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoToast {
    Success,
    Error,
    Warning,
    Info,
    /// Error toast that never auto-dismisses.
    Persistent,
    /// Toast requested with a level the presenter does not know.
    UnknownLevel,
}

impl DemoToast {
    pub const ALL: [DemoToast; 6] = [
        DemoToast::Success,
        DemoToast::Error,
        DemoToast::Warning,
        DemoToast::Info,
        DemoToast::Persistent,
        DemoToast::UnknownLevel,
    ];

    /// i18n key of the button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            DemoToast::Success => "dashboard-button-success",
            DemoToast::Error => "dashboard-button-error",
            DemoToast::Warning => "dashboard-button-warning",
            DemoToast::Info => "dashboard-button-info",
            DemoToast::Persistent => "dashboard-button-persistent",
            DemoToast::UnknownLevel => "dashboard-button-unknown",
        }
    }

    /// i18n key of the toast body.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            DemoToast::Success => "demo-message-success",
            DemoToast::Error => "demo-message-error",
            DemoToast::Warning => "demo-message-warning",
            DemoToast::Info => "demo-message-info",
            DemoToast::Persistent => "demo-message-persistent",
            DemoToast::UnknownLevel => "demo-message-unknown",
        }
    }
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g., "fr").
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Flash messages `(tags, text)` shown at startup, in order.
    pub flash: Vec<(String, String)>,
}

impl Flags {
    /// Parses a `--flash` argument of the form `tags=text`.
    ///
    /// Without `=`, the whole argument is the text and the tags are empty,
    /// which resolves to an info toast.
    #[must_use]
    pub fn parse_flash(raw: &str) -> (String, String) {
        match raw.split_once('=') {
            Some((tags, text)) => (tags.trim().to_string(), text.to_string()),
            None => (String::new(), raw.to_string()),
        }
    }
}

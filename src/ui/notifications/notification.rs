// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its lifecycle `Phase`,
//! the `Severity` levels and the `DisplayDuration` sentinel used throughout
//! the notification system.

use crate::config::DEFAULT_DURATION_MS;
use crate::error::NotifyError;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Severity level determines the icon, title and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
    /// Something needs attention but nothing failed (orange).
    Warning,
    /// Neutral information (blue). Also the fallback for unknown levels.
    #[default]
    Info,
}

impl Severity {
    /// All severities, in presentation-table order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Returns the lowercase tag naming this severity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the icon shown in the toast header.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Severity::Success => Icon::CheckCircle,
            Severity::Error => Icon::ExclamationCircle,
            Severity::Warning => Icon::ExclamationTriangle,
            Severity::Info => Icon::InfoCircle,
        }
    }

    /// Returns the untranslated title ("Success", "Error", ...).
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    /// Returns the i18n key of the localized title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Severity::Success => "notification-title-success",
            Severity::Error => "notification-title-error",
            Severity::Warning => "notification-title-warning",
            Severity::Info => "notification-title-info",
        }
    }

    /// Parses a severity tag, falling back to [`Severity::Info`].
    ///
    /// The fallback is logged; the caller never sees the error.
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err: NotifyError| {
            log::warn!("{err}, falling back to info");
            Severity::default()
        })
    }

    /// Resolves a space-separated flash message tag list such as
    /// `"extra-tag error"`.
    ///
    /// The first recognized token wins; lists without one (including the
    /// `debug` level) resolve to [`Severity::Info`].
    #[must_use]
    pub fn from_flash_tags(tags: &str) -> Self {
        tags.split_whitespace()
            .find_map(|token| token.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Severity {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| NotifyError::InvalidSeverity(tag.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header icon of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    CheckCircle,
    ExclamationCircle,
    ExclamationTriangle,
    InfoCircle,
}

impl Icon {
    /// Stable icon name, as used by icon fonts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::ExclamationCircle => "exclamation-circle",
            Icon::ExclamationTriangle => "exclamation-triangle",
            Icon::InfoCircle => "info-circle",
        }
    }

    /// Glyph rendered by the toast widget.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::CheckCircle => "\u{2714}",
            Icon::ExclamationCircle => "\u{2716}",
            Icon::ExclamationTriangle => "\u{26A0}",
            Icon::InfoCircle => "\u{2139}",
        }
    }
}

/// How long a notification stays before it dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayDuration {
    /// Auto-dismiss once this much time has passed since creation.
    For(Duration),
    /// Never auto-dismiss; only the user can close it.
    Persistent,
}

impl DisplayDuration {
    /// Converts a millisecond count, mapping `0` to [`DisplayDuration::Persistent`].
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            DisplayDuration::Persistent
        } else {
            DisplayDuration::For(Duration::from_millis(ms))
        }
    }

    /// Returns the time to live, or `None` when persistent.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            DisplayDuration::For(duration) if !duration.is_zero() => Some(duration),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.as_duration().is_none()
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        DisplayDuration::For(Duration::from_millis(DEFAULT_DURATION_MS))
    }
}

/// Lifecycle phase of a notification.
///
/// ```text
/// Created --(entry deferral)--> Shown --(dismiss | timer)--> Dismissing --(exit done)--> Removed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Appended to the container in its initial (hidden) state.
    Created,
    /// Entry transition started; fully interactive.
    Shown,
    /// Exit transition playing; further dismiss requests are ignored.
    Dismissing,
    /// Detached from the container. Terminal.
    Removed,
}

impl Phase {
    /// Whether a dismiss request may start a dismissal sequence.
    #[must_use]
    pub fn accepts_dismiss(self) -> bool {
        matches!(self, Phase::Created | Phase::Shown)
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    duration: DisplayDuration,
    /// Unrecognized tag the caller asked for, when `severity` is a fallback.
    requested_tag: Option<String>,
    phase: Phase,
    created_at: Instant,
    phase_changed_at: Instant,
}

impl Notification {
    /// Creates a notification in [`Phase::Created`].
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        duration: DisplayDuration,
        now: Instant,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            duration,
            requested_tag: None,
            phase: Phase::Created,
            created_at: now,
            phase_changed_at: now,
        }
    }

    /// Records the unrecognized tag that led to a fallback severity.
    #[must_use]
    pub fn with_requested_tag(mut self, tag: impl Into<String>) -> Self {
        self.requested_tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn requested_tag(&self) -> Option<&str> {
        self.requested_tag.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When the current phase was entered.
    #[must_use]
    pub fn phase_changed_at(&self) -> Instant {
        self.phase_changed_at
    }

    /// Returns when the auto-dismiss timer fires, if any.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.duration
            .as_duration()
            .map(|duration| self.created_at + duration)
    }

    /// Returns whether the auto-dismiss timer has fired by `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at().is_some_and(|at| now >= at)
    }

    /// `Created -> Shown`. Returns `false` in any other phase.
    pub fn reveal(&mut self, now: Instant) -> bool {
        self.advance(Phase::Created, Phase::Shown, now)
    }

    /// `Shown -> Dismissing`. Returns `false` in any other phase, which
    /// makes repeated dismiss requests inert.
    pub fn begin_dismiss(&mut self, now: Instant) -> bool {
        self.advance(Phase::Shown, Phase::Dismissing, now)
    }

    /// `Dismissing -> Removed`. Returns `false` in any other phase.
    pub fn finish(&mut self, now: Instant) -> bool {
        self.advance(Phase::Dismissing, Phase::Removed, now)
    }

    fn advance(&mut self, from: Phase, to: Phase, now: Instant) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        self.phase_changed_at = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(duration: DisplayDuration) -> Notification {
        Notification::new(Severity::Info, "test", duration, Instant::now())
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = notification(DisplayDuration::default());
        let n2 = notification(DisplayDuration::default());
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors: Vec<Color> = Severity::ALL.iter().map(|s| s.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn severity_titles_match_presentation_table() {
        assert_eq!(Severity::Success.title(), "Success");
        assert_eq!(Severity::Error.title(), "Error");
        assert_eq!(Severity::Warning.title(), "Warning");
        assert_eq!(Severity::Info.title(), "Info");
    }

    #[test]
    fn severity_icons_match_presentation_table() {
        assert_eq!(Severity::Success.icon().name(), "check-circle");
        assert_eq!(Severity::Error.icon().name(), "exclamation-circle");
        assert_eq!(Severity::Warning.icon().name(), "exclamation-triangle");
        assert_eq!(Severity::Info.icon().name(), "info-circle");
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!(" Success ".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
    }

    #[test]
    fn unknown_severity_is_an_invalid_severity_error() {
        assert_eq!(
            "critical".parse::<Severity>(),
            Err(NotifyError::InvalidSeverity("critical".to_string()))
        );
    }

    #[test]
    fn unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::from_tag_or_default("critical"), Severity::Info);
        assert_eq!(Severity::from_tag_or_default(""), Severity::Info);
    }

    #[test]
    fn flash_tags_pick_first_known_token() {
        assert_eq!(Severity::from_flash_tags("sticky error"), Severity::Error);
        assert_eq!(Severity::from_flash_tags("warning"), Severity::Warning);
        assert_eq!(Severity::from_flash_tags("debug"), Severity::Info);
        assert_eq!(Severity::from_flash_tags(""), Severity::Info);
    }

    #[test]
    fn zero_millis_is_persistent() {
        assert_eq!(DisplayDuration::from_millis(0), DisplayDuration::Persistent);
        assert!(DisplayDuration::For(Duration::ZERO).is_persistent());
        assert_eq!(
            DisplayDuration::from_millis(3000).as_duration(),
            Some(Duration::from_millis(3000))
        );
    }

    #[test]
    fn persistent_notification_never_expires() {
        let n = notification(DisplayDuration::Persistent);
        assert!(n.expires_at().is_none());
        assert!(!n.is_expired(n.created_at() + Duration::from_secs(3600)));
    }

    #[test]
    fn timed_notification_expires_at_deadline() {
        let n = notification(DisplayDuration::from_millis(3000));
        let created = n.created_at();
        assert!(!n.is_expired(created + Duration::from_millis(2999)));
        assert!(n.is_expired(created + Duration::from_millis(3000)));
    }

    #[test]
    fn lifecycle_follows_state_machine() {
        let mut n = notification(DisplayDuration::default());
        let t0 = n.created_at();
        assert_eq!(n.phase(), Phase::Created);

        // No skipping straight to Dismissing or Removed.
        assert!(!n.begin_dismiss(t0));
        assert!(!n.finish(t0));

        assert!(n.reveal(t0 + Duration::from_millis(100)));
        assert_eq!(n.phase(), Phase::Shown);

        assert!(n.begin_dismiss(t0 + Duration::from_millis(200)));
        assert_eq!(n.phase(), Phase::Dismissing);
        assert_eq!(n.phase_changed_at(), t0 + Duration::from_millis(200));

        // Second dismissal is inert and does not move the timestamp.
        assert!(!n.begin_dismiss(t0 + Duration::from_millis(250)));
        assert_eq!(n.phase_changed_at(), t0 + Duration::from_millis(200));

        assert!(n.finish(t0 + Duration::from_millis(500)));
        assert_eq!(n.phase(), Phase::Removed);
        assert!(!n.finish(t0 + Duration::from_millis(600)));
        assert!(!n.reveal(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn only_created_and_shown_accept_dismiss() {
        assert!(Phase::Created.accepts_dismiss());
        assert!(Phase::Shown.accepts_dismiss());
        assert!(!Phase::Dismissing.accepts_dismiss());
        assert!(!Phase::Removed.accepts_dismiss());
    }
}

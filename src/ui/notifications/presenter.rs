// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Presenter` appends toasts to its container, reveals them after the
//! entry deferral, runs their auto-dismiss timers and detaches them once the
//! exit transition completes. Time is always passed in, so the whole
//! lifecycle can be driven with simulated instants.
//!
//! Both dismissal paths (the dismiss control and the timer) go through
//! [`Presenter::dismiss_at`], which only acts on a toast that is not already
//! dismissing. Whichever path loses the race becomes a no-op.

use super::container::{Stack, ToastContainer, ToastElement};
use super::notification::{DisplayDuration, Notification, NotificationId, Phase, Severity};
use crate::config::{DEFAULT_ENTRY_DELAY_MS, DEFAULT_EXIT_TRANSITION_MS};
use crate::error::NotifyError;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The dismiss control of a toast was activated.
    Dismiss(NotificationId),
    /// The host finished the exit transition of a toast.
    TransitionEnded(NotificationId),
    /// Timer tick carrying the current instant.
    Tick(Instant),
}

/// Timing constants of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Duration used when the caller passes none.
    pub default_duration: DisplayDuration,
    /// Time between `Created` and `Shown`.
    pub entry_delay: Duration,
    /// Length of the exit transition.
    pub exit_transition: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            default_duration: DisplayDuration::default(),
            entry_delay: Duration::from_millis(DEFAULT_ENTRY_DELAY_MS),
            exit_transition: Duration::from_millis(DEFAULT_EXIT_TRANSITION_MS),
        }
    }
}

impl Timing {
    /// Time after entering `Dismissing` at which the element is detached
    /// regardless of signals.
    ///
    /// A container that reports transition-end gets twice the transition
    /// length, so the signal normally wins and the deadline only catches
    /// a lost one.
    #[must_use]
    pub fn exit_deadline(&self, signalled: bool) -> Duration {
        if signalled {
            self.exit_transition * 2
        } else {
            self.exit_transition
        }
    }
}

/// Shows notifications in a container and drives their lifecycle.
#[derive(Debug)]
pub struct Presenter<C = Stack> {
    container: Option<C>,
    /// Notifications not yet removed, in insertion order.
    live: Vec<Notification>,
    timing: Timing,
}

impl Default for Presenter<Stack> {
    fn default() -> Self {
        Self::new(Stack::new(), Timing::default())
    }
}

impl<C: ToastContainer> Presenter<C> {
    /// Creates a presenter rendering into `container`.
    pub fn new(container: C, timing: Timing) -> Self {
        Self {
            container: Some(container),
            live: Vec::new(),
            timing,
        }
    }

    /// Creates a presenter with no container. Every `show` is a logged no-op.
    pub fn detached(timing: Timing) -> Self {
        Self {
            container: None,
            live: Vec::new(),
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Replaces the timing used by notifications shown from now on.
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    #[must_use]
    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    // =========================================================================
    // Showing
    // =========================================================================

    /// Shows a notification now. See [`Presenter::show_at`].
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: DisplayDuration,
    ) -> Option<NotificationId> {
        self.show_at(Instant::now(), message, severity, duration)
    }

    /// Appends a new toast to the end of the container in [`Phase::Created`].
    ///
    /// It becomes [`Phase::Shown`] on the first tick after the entry delay.
    /// Returns `None` when there is no container to render into.
    pub fn show_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
        duration: DisplayDuration,
    ) -> Option<NotificationId> {
        self.insert(Notification::new(severity, message, duration, now))
    }

    /// Shows a notification from untyped inputs, as received from a page
    /// script or a server-rendered template.
    ///
    /// An unrecognized `tag` falls back to info. `duration_ms` of `None`
    /// uses the configured default and `Some(0)` makes the toast persistent.
    pub fn show_tagged(
        &mut self,
        message: impl Into<String>,
        tag: &str,
        duration_ms: Option<u64>,
    ) -> Option<NotificationId> {
        self.show_tagged_at(Instant::now(), message, tag, duration_ms)
    }

    /// [`Presenter::show_tagged`] at an explicit instant.
    pub fn show_tagged_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        tag: &str,
        duration_ms: Option<u64>,
    ) -> Option<NotificationId> {
        let duration = duration_ms.map_or(self.timing.default_duration, DisplayDuration::from_millis);

        let notification = match tag.parse::<Severity>() {
            Ok(severity) => Notification::new(severity, message, duration, now),
            Err(err) => {
                log::warn!("{err}, falling back to info");
                Notification::new(Severity::default(), message, duration, now)
                    .with_requested_tag(tag.trim())
            }
        };
        self.insert(notification)
    }

    /// Shows a success notification with the default duration.
    pub fn success(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(message, Severity::Success, self.timing.default_duration)
    }

    /// Shows an error notification with the default duration.
    pub fn error(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(message, Severity::Error, self.timing.default_duration)
    }

    /// Shows a warning notification with the default duration.
    pub fn warning(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(message, Severity::Warning, self.timing.default_duration)
    }

    /// Shows an info notification with the default duration.
    pub fn info(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(message, Severity::Info, self.timing.default_duration)
    }

    /// Replays server-side flash messages `(tags, text)` in order.
    ///
    /// Tags are resolved with [`Severity::from_flash_tags`]. Returns the
    /// number of toasts shown.
    pub fn show_flash<I, T, M>(&mut self, now: Instant, messages: I) -> usize
    where
        I: IntoIterator<Item = (T, M)>,
        T: AsRef<str>,
        M: Into<String>,
    {
        let duration = self.timing.default_duration;
        messages
            .into_iter()
            .filter_map(|(tags, text)| {
                let severity = Severity::from_flash_tags(tags.as_ref());
                self.show_at(now, text, severity, duration)
            })
            .count()
    }

    fn insert(&mut self, notification: Notification) -> Option<NotificationId> {
        let Some(container) = self.container.as_mut() else {
            log::warn!("{}, dropping notification", NotifyError::MissingContainer);
            return None;
        };

        let id = notification.id();
        container.append(ToastElement::from(&notification));
        log::debug!(
            "{id} created ({}, {:?})",
            notification.severity(),
            notification.duration()
        );
        self.live.push(notification);
        Some(id)
    }

    // =========================================================================
    // Dismissal
    // =========================================================================

    /// Dismisses a notification now. See [`Presenter::dismiss_at`].
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(Instant::now(), id)
    }

    /// Starts the exit transition of a toast.
    ///
    /// A toast still waiting for its entry is revealed first, so the
    /// lifecycle never skips `Shown`. Returns `false`, doing nothing, when
    /// the toast is already dismissing, removed, or unknown.
    pub fn dismiss_at(&mut self, now: Instant, id: NotificationId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.begin_dismiss(index, now)
    }

    /// Dismisses every toast that is not already on its way out.
    pub fn dismiss_all(&mut self, now: Instant) -> usize {
        (0..self.live.len())
            .filter(|&index| self.begin_dismiss(index, now))
            .count()
    }

    /// Handles the transition-end signal for a toast's exit transition.
    ///
    /// Returns `true` if this detached the toast. Signals for toasts that are
    /// not dismissing (late, duplicated or stray) are ignored.
    pub fn transition_finished(&mut self, id: NotificationId) -> bool {
        self.transition_finished_at(Instant::now(), id)
    }

    /// [`Presenter::transition_finished`] at an explicit instant.
    pub fn transition_finished_at(&mut self, now: Instant, id: NotificationId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let removed = self.complete(index, now);
        self.live.retain(|n| n.phase() != Phase::Removed);
        removed
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Advances every lifecycle deadline that has passed by `now`:
    /// entry deferrals, auto-dismiss timers and exit deadlines.
    pub fn tick(&mut self, now: Instant) {
        let signalled = self.reports_transition_end();

        for index in 0..self.live.len() {
            let notification = &self.live[index];
            match notification.phase() {
                Phase::Created => {
                    if notification.is_expired(now) {
                        self.begin_dismiss(index, now);
                    } else if now >= notification.created_at() + self.timing.entry_delay {
                        self.reveal(index, now);
                    }
                }
                Phase::Shown => {
                    if notification.is_expired(now) {
                        log::debug!("{} timer expired", notification.id());
                        self.begin_dismiss(index, now);
                    }
                }
                Phase::Dismissing => {
                    let deadline =
                        notification.phase_changed_at() + self.timing.exit_deadline(signalled);
                    if now >= deadline {
                        self.complete(index, now);
                    }
                }
                Phase::Removed => {}
            }
        }

        self.live.retain(|n| n.phase() != Phase::Removed);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::TransitionEnded(id) => {
                self.transition_finished(id);
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Returns the earliest instant at which [`Presenter::tick`] has work.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let signalled = self.reports_transition_end();
        self.live
            .iter()
            .filter_map(|n| match n.phase() {
                Phase::Created => {
                    let reveal = n.created_at() + self.timing.entry_delay;
                    Some(n.expires_at().map_or(reveal, |at| at.min(reveal)))
                }
                Phase::Shown => n.expires_at(),
                Phase::Dismissing => {
                    Some(n.phase_changed_at() + self.timing.exit_deadline(signalled))
                }
                Phase::Removed => None,
            })
            .min()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the phase of a live toast; `None` once removed or if unknown.
    #[must_use]
    pub fn phase_of(&self, id: NotificationId) -> Option<Phase> {
        self.live.iter().find(|n| n.id() == id).map(Notification::phase)
    }

    /// Returns the toasts that have not been removed, in insertion order.
    pub fn live(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Whether any toast still needs ticks.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.live.is_empty()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.live.iter().position(|n| n.id() == id)
    }

    fn reports_transition_end(&self) -> bool {
        self.container
            .as_ref()
            .is_some_and(|container| container.reports_transition_end())
    }

    fn reveal(&mut self, index: usize, now: Instant) -> bool {
        let notification = &mut self.live[index];
        if !notification.reveal(now) {
            return false;
        }
        let id = notification.id();
        log::debug!("{id} shown");
        if let Some(container) = self.container.as_mut() {
            container.set_phase(id, Phase::Shown, now);
        }
        true
    }

    fn begin_dismiss(&mut self, index: usize, now: Instant) -> bool {
        if !self.live[index].phase().accepts_dismiss() {
            return false;
        }
        self.reveal(index, now);

        let notification = &mut self.live[index];
        if !notification.begin_dismiss(now) {
            return false;
        }
        let id = notification.id();
        log::debug!("{id} dismissing");
        if let Some(container) = self.container.as_mut() {
            container.set_phase(id, Phase::Dismissing, now);
        }
        true
    }

    /// `Dismissing -> Removed` plus detachment. The caller drops removed
    /// entries from `live`.
    fn complete(&mut self, index: usize, now: Instant) -> bool {
        let notification = &mut self.live[index];
        if !notification.finish(now) {
            return false;
        }
        let id = notification.id();
        let detached = self
            .container
            .as_mut()
            .is_some_and(|container| container.detach(id));
        if detached {
            log::debug!("{id} removed");
        } else {
            log::warn!("{id} was already gone from its container");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn presenter() -> Presenter {
        Presenter::default()
    }

    #[test]
    fn show_appends_in_created_phase() {
        let mut presenter = presenter();
        let t0 = Instant::now();

        let id = presenter
            .show_at(t0, "hello", Severity::Info, DisplayDuration::default())
            .expect("container attached");

        assert_eq!(presenter.phase_of(id), Some(Phase::Created));
        let stack = presenter.container().expect("container");
        assert_eq!(stack.ids(), vec![id]);
        assert_eq!(stack.get(id).map(ToastElement::message), Some("hello"));
    }

    #[test]
    fn entry_is_deferred_until_entry_delay() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let id = presenter
            .show_at(t0, "x", Severity::Info, DisplayDuration::default())
            .expect("shown");

        presenter.tick(t0 + ms(50));
        assert_eq!(presenter.phase_of(id), Some(Phase::Created));

        presenter.tick(t0 + ms(100));
        assert_eq!(presenter.phase_of(id), Some(Phase::Shown));
        assert_eq!(
            presenter.container().and_then(|s| s.get(id)).map(ToastElement::phase),
            Some(Phase::Shown)
        );
    }

    #[test]
    fn dismiss_twice_starts_one_sequence() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let id = presenter
            .show_at(t0, "x", Severity::Info, DisplayDuration::Persistent)
            .expect("shown");
        presenter.tick(t0 + ms(100));

        assert!(presenter.dismiss_at(t0 + ms(200), id));
        assert!(!presenter.dismiss_at(t0 + ms(210), id));
        assert_eq!(presenter.phase_of(id), Some(Phase::Dismissing));
    }

    #[test]
    fn dismiss_while_created_reveals_first() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let id = presenter
            .show_at(t0, "x", Severity::Info, DisplayDuration::Persistent)
            .expect("shown");

        assert!(presenter.dismiss_at(t0 + ms(10), id));
        assert_eq!(presenter.phase_of(id), Some(Phase::Dismissing));
    }

    #[test]
    fn exit_deadline_detaches_without_signal() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let id = presenter
            .show_at(t0, "x", Severity::Info, DisplayDuration::Persistent)
            .expect("shown");
        presenter.tick(t0 + ms(100));
        presenter.dismiss_at(t0 + ms(1000), id);

        presenter.tick(t0 + ms(1299));
        assert_eq!(presenter.phase_of(id), Some(Phase::Dismissing));

        presenter.tick(t0 + ms(1300));
        assert_eq!(presenter.phase_of(id), None);
        assert!(presenter.container().is_some_and(Stack::is_empty));
    }

    #[test]
    fn timer_expiry_dismisses_shown_toast() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let id = presenter
            .show_at(t0, "x", Severity::Success, DisplayDuration::from_millis(2000))
            .expect("shown");
        presenter.tick(t0 + ms(100));

        presenter.tick(t0 + ms(2000));
        assert_eq!(presenter.phase_of(id), Some(Phase::Dismissing));
    }

    #[test]
    fn timer_shorter_than_entry_delay_still_passes_through_shown() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let id = presenter
            .show_at(t0, "x", Severity::Info, DisplayDuration::from_millis(10))
            .expect("shown");

        presenter.tick(t0 + ms(20));
        assert_eq!(presenter.phase_of(id), Some(Phase::Dismissing));
    }

    #[test]
    fn transition_finished_ignored_unless_dismissing() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let id = presenter
            .show_at(t0, "x", Severity::Info, DisplayDuration::Persistent)
            .expect("shown");
        presenter.tick(t0 + ms(100));

        assert!(!presenter.transition_finished_at(t0 + ms(150), id));
        assert_eq!(presenter.phase_of(id), Some(Phase::Shown));

        presenter.dismiss_at(t0 + ms(200), id);
        assert!(presenter.transition_finished_at(t0 + ms(300), id));
        assert!(!presenter.transition_finished_at(t0 + ms(301), id));
        assert_eq!(presenter.live_count(), 0);
    }

    #[test]
    fn show_tagged_maps_durations() {
        let mut presenter = presenter();
        let t0 = Instant::now();

        let default = presenter.show_tagged_at(t0, "a", "info", None);
        let persistent = presenter.show_tagged_at(t0, "b", "info", Some(0));
        let timed = presenter.show_tagged_at(t0, "c", "info", Some(3000));

        let durations: Vec<DisplayDuration> =
            presenter.live().map(Notification::duration).collect();
        assert!(default.is_some() && persistent.is_some() && timed.is_some());
        assert_eq!(
            durations,
            vec![
                DisplayDuration::default(),
                DisplayDuration::Persistent,
                DisplayDuration::For(ms(3000)),
            ]
        );
    }

    #[test]
    fn show_tagged_unknown_severity_falls_back_to_info() {
        let mut presenter = presenter();
        let id = presenter
            .show_tagged_at(Instant::now(), "boom", "critical", None)
            .expect("shown");

        let element = presenter
            .container()
            .and_then(|s| s.get(id))
            .expect("element");
        assert_eq!(element.severity(), Severity::Info);
        assert_eq!(element.title(), "Info");
        assert_eq!(element.requested_tag(), Some("critical"));
    }

    #[test]
    fn detached_presenter_drops_notifications() {
        let mut presenter: Presenter = Presenter::detached(Timing::default());
        assert!(presenter.info("nowhere to go").is_none());
        assert!(!presenter.has_notifications());
        presenter.tick(Instant::now() + ms(10_000));
    }

    #[test]
    fn show_flash_uses_tag_lists() {
        let mut presenter = presenter();
        let shown = presenter.show_flash(
            Instant::now(),
            [("error", "Login failed."), ("debug", "Query took 3ms")],
        );

        assert_eq!(shown, 2);
        let severities: Vec<Severity> = presenter.live().map(Notification::severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Info]);
    }

    #[test]
    fn dismiss_all_skips_toasts_already_leaving() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let a = presenter
            .show_at(t0, "a", Severity::Info, DisplayDuration::Persistent)
            .expect("shown");
        presenter.show_at(t0, "b", Severity::Info, DisplayDuration::Persistent);
        presenter.tick(t0 + ms(100));
        presenter.dismiss_at(t0 + ms(150), a);

        assert_eq!(presenter.dismiss_all(t0 + ms(200)), 1);
    }

    #[test]
    fn next_deadline_tracks_earliest_event() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        assert!(presenter.next_deadline().is_none());

        presenter.show_at(t0, "x", Severity::Info, DisplayDuration::from_millis(2000));
        assert_eq!(presenter.next_deadline(), Some(t0 + ms(100)));

        presenter.tick(t0 + ms(100));
        assert_eq!(presenter.next_deadline(), Some(t0 + ms(2000)));

        presenter.tick(t0 + ms(2000));
        assert_eq!(presenter.next_deadline(), Some(t0 + ms(2300)));
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let mut presenter = presenter();
        let t0 = Instant::now();
        let id = presenter
            .show_at(t0, "x", Severity::Info, DisplayDuration::Persistent)
            .expect("shown");

        presenter.handle_message(Message::Tick(t0 + ms(100)));
        assert_eq!(presenter.phase_of(id), Some(Phase::Shown));

        presenter.handle_message(Message::Dismiss(id));
        assert_eq!(presenter.phase_of(id), Some(Phase::Dismissing));
    }

    #[test]
    fn exit_deadline_is_longer_when_signalled() {
        let timing = Timing::default();
        assert!(timing.exit_deadline(true) > timing.exit_deadline(false));
        assert_eq!(timing.exit_deadline(false), timing.exit_transition);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The container capability toasts are rendered into.
//!
//! The presenter never touches widgets directly. It appends elements,
//! changes their phase (the equivalent of toggling a "show" class) and
//! detaches them through [`ToastContainer`]. [`Stack`] is the in-memory
//! implementation rendered by [`super::Toast::view_overlay`] and used by tests.

use super::notification::{Icon, Notification, NotificationId, Phase, Severity};
use std::time::{Duration, Instant};

/// Visual element of one notification, as held by a container.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastElement {
    id: NotificationId,
    severity: Severity,
    message: String,
    requested_tag: Option<String>,
    phase: Phase,
    phase_since: Instant,
}

impl ToastElement {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        self.severity.icon()
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.severity.title()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The unrecognized tag the element was requested with, if it fell back.
    #[must_use]
    pub fn requested_tag(&self) -> Option<&str> {
        self.requested_tag.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Opacity at `now`, fading in after `Shown` and out after `Dismissing`
    /// over `fade`.
    #[must_use]
    pub fn opacity(&self, fade: Duration, now: Instant) -> f32 {
        let progress = if fade.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(self.phase_since);
            (elapsed.as_secs_f32() / fade.as_secs_f32()).min(1.0)
        };

        match self.phase {
            Phase::Created | Phase::Removed => 0.0,
            Phase::Shown => progress,
            Phase::Dismissing => 1.0 - progress,
        }
    }
}

impl From<&Notification> for ToastElement {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id(),
            severity: notification.severity(),
            message: notification.message().to_string(),
            requested_tag: notification.requested_tag().map(str::to_string),
            phase: notification.phase(),
            phase_since: notification.phase_changed_at(),
        }
    }
}

/// Ordered collection of visible toast elements.
pub trait ToastContainer {
    /// Appends `element` after every existing element.
    fn append(&mut self, element: ToastElement);

    /// Moves an element to `phase`. Unknown ids are ignored.
    fn set_phase(&mut self, id: NotificationId, phase: Phase, at: Instant);

    /// Removes an element. Returns `false` if it was not present.
    fn detach(&mut self, id: NotificationId) -> bool;

    /// Whether the host delivers a transition-end signal for exit
    /// transitions. When `false`, elements are detached on the exit deadline.
    fn reports_transition_end(&self) -> bool {
        false
    }
}

/// Headless, insertion-ordered container.
#[derive(Debug, Default, Clone)]
pub struct Stack {
    elements: Vec<ToastElement>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ToastElement> {
        self.elements.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&ToastElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Returns the element ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.elements.iter().map(ToastElement::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ToastContainer for Stack {
    fn append(&mut self, element: ToastElement) {
        self.elements.push(element);
    }

    fn set_phase(&mut self, id: NotificationId, phase: Phase, at: Instant) {
        if let Some(element) = self.elements.iter_mut().find(|element| element.id == id) {
            element.phase = phase;
            element.phase_since = at;
        }
    }

    fn detach(&mut self, id: NotificationId) -> bool {
        match self.elements.iter().position(|element| element.id == id) {
            Some(pos) => {
                self.elements.remove(pos);
                true
            }
            None => false,
        }
    }
}

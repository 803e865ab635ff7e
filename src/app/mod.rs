// SPDX-License-Identifier: MPL-2.0
//! Application root state for the notification dashboard.
//!
//! The `App` struct owns the toast presenter, the localization bundle and
//! the theme, and translates messages into presenter calls. Toast timers are
//! driven by the tick subscription; nothing else mutates the toast stack.

mod message;
mod subscription;
mod view;

pub use message::{DemoToast, Flags, Message};

use crate::config::{self, paths};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{DisplayDuration, Presenter, Severity, Stack};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Tag used by the "unknown level" button; not a severity the presenter knows.
const UNKNOWN_LEVEL_TAG: &str = "critical";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    notifications: Presenter,
    /// Instant of the last tick, used to render fades.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("live_toasts", &self.notifications.live_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            notifications: Presenter::default(),
            now: Instant::now(),
        }
    }
}

impl App {
    /// Loads settings, builds the presenter and replays startup flash messages.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let timing = config.notifications.timing();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            notifications: Presenter::new(Stack::new(), timing),
            now: Instant::now(),
        };

        if let Some(key) = config_warning {
            let text = app.i18n.tr(&key);
            app.notifications.warning(text);
        }

        let shown = app.notifications.show_flash(app.now, flags.flash);
        if shown > 0 {
            log::info!("replayed {shown} flash message(s)");
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
            }
            Message::Tick(now) => {
                self.now = now;
                self.notifications.tick(now);
            }
            Message::Trigger(kind) => self.trigger(kind),
            Message::DismissAll => {
                self.notifications.dismiss_all(Instant::now());
            }
        }
        Task::none()
    }

    fn trigger(&mut self, kind: DemoToast) {
        let text = self.i18n.tr(kind.message_key());
        let default = self.notifications.timing().default_duration;
        match kind {
            DemoToast::Success => {
                self.notifications.show(text, Severity::Success, default);
            }
            DemoToast::Error => {
                self.notifications.show(text, Severity::Error, default);
            }
            DemoToast::Warning => {
                self.notifications.show(text, Severity::Warning, default);
            }
            DemoToast::Info => {
                self.notifications.show(text, Severity::Info, default);
            }
            DemoToast::Persistent => {
                self.notifications
                    .show(text, Severity::Error, DisplayDuration::Persistent);
            }
            DemoToast::UnknownLevel => {
                self.notifications.show_tagged(text, UNKNOWN_LEVEL_TAG, None);
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
            now: Instant::now().max(self.now),
        })
    }

    /// Returns the toast presenter.
    #[must_use]
    pub fn notifications(&self) -> &Presenter {
        &self.notifications
    }
}

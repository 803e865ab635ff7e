// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The dashboard body is a column of trigger buttons; the toast overlay is
//! stacked on top of it.

use super::message::DemoToast;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Presenter, Toast};
use iced::widget::{button, stack, Column, Container, Row, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a Presenter,
    pub now: Instant,
}

/// Renders the dashboard with its toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = view_dashboard(ctx.i18n);

    let overlay: Element<'_, Message> = match ctx.notifications.container() {
        Some(stack) => Toast::view_overlay(
            stack,
            ctx.i18n,
            ctx.notifications.timing().exit_transition,
            ctx.now,
        )
        .map(Message::Notification),
        None => Container::new(Text::new("")).into(),
    };

    stack![body, overlay].into()
}

fn view_dashboard(i18n: &I18n) -> Element<'_, Message> {
    let heading = Text::new(i18n.tr("dashboard-heading")).size(typography::TITLE_MD);
    let hint = Text::new(i18n.tr("dashboard-hint")).size(typography::BODY);

    let triggers = DemoToast::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            row.push(
                button(Text::new(i18n.tr(kind.label_key())).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .on_press(Message::Trigger(kind)),
            )
        })
        .wrap();

    let dismiss_all = button(Text::new(i18n.tr("dashboard-button-dismiss-all")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(Message::DismissAll);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(hint)
        .push(triggers)
        .push(dismiss_all);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of container elements: small cards
//! with a severity-colored accent, a localized title, the message body and a
//! dismiss button. Their opacity follows the element phase, which is how the
//! entry and exit transitions show up on screen.

use super::container::{Stack, ToastElement};
use super::presenter::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view<'a>(
        element: &'a ToastElement,
        i18n: &'a I18n,
        fade: Duration,
        now: Instant,
    ) -> Element<'a, Message> {
        let severity = element.severity();
        let alpha = element.opacity(fade, now);
        let accent_color = with_alpha(severity.color(), alpha);

        let icon_widget = Text::new(element.icon().glyph())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let title_widget = Text::new(i18n.tr(severity.title_key()))
            .size(typography::BODY_LG)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_alpha(theme.palette().text, alpha)),
            });

        let message_widget = Text::new(element.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_alpha(theme.palette().text, alpha)),
            });

        let dismiss_button = button(Text::new("\u{00D7}").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(element.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Header: [icon] [title] [dismiss]
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon_widget)
            .push(Container::new(title_widget).width(Length::Fill))
            .push(dismiss_button);

        let content = Column::new()
            .spacing(spacing::XXS)
            .push(header)
            .push(message_widget);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the toast overlay with every element of the stack.
    ///
    /// Toasts sit in the bottom-right corner, oldest on top.
    pub fn view_overlay<'a>(
        stack: &'a Stack,
        i18n: &'a I18n,
        fade: Duration,
        now: Instant,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = stack
            .iter()
            .map(|element| Self::view(element, i18n, fade, now))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            bg_color,
            alpha * opacity::SURFACE,
        ))),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if alpha > 0.0 { shadow::MD } else { shadow::NONE },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |a: f32| {
        Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: if status == button::Status::Hovered {
                hover_background(opacity::OVERLAY_SUBTLE)
            } else {
                hover_background(opacity::OVERLAY_MEDIUM)
            },
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: with_alpha(base.text, opacity::OVERLAY_MEDIUM),
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Each toast is a card with a severity-colored border, the message, an
//! optional action button and a close button. The overlay stacks the visible
//! toasts in the controller's anchor corner.

use super::controller::{Controller, Entry, Message};
use super::surface::{Anchor, Surface};
use super::timer::Timer;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders a single toast.
pub fn view<'a>(entry: &'a Entry, i18n: &'a I18n) -> Element<'a, Message> {
    let key = entry.key();
    let notification = entry.notification();
    let accent = notification.severity().color();

    let glyph = Text::new(notification.severity().glyph())
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let message = Text::new(notification.message()).size(typography::BODY);

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(Container::new(message).width(Length::Fill));

    if let Some(action) = notification.action() {
        content = content.push(
            button(Text::new(action.label()).size(typography::BODY))
                .on_press(Message::Activate(key))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::link),
        );
    }

    let close_button = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::Close(key))
        .padding(spacing::XXS)
        .style(styles::button::ghost);
    content = content.push(
        tooltip(
            close_button,
            Text::new(i18n.tr("toast-close")),
            tooltip::Position::Top,
        )
        .gap(spacing::XXS),
    );

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::container::accented(theme, accent))
        .into()
}

/// Renders every visible toast, stacked in the controller's anchor corner.
pub fn view_overlay<'a, T: Timer, S: Surface>(
    controller: &'a Controller<T, S>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let anchor = controller.anchor();
    let mut toasts: Vec<Element<'a, Message>> =
        controller.visible().map(|entry| view(entry, i18n)).collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    // Oldest toast sits closest to the anchored edge.
    if !anchor.is_top() {
        toasts.reverse();
    }

    let (horizontal, vertical) = alignment_for(anchor);
    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(horizontal);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

fn alignment_for(anchor: Anchor) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = if anchor.is_left() {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Right
    };
    let vertical = if anchor.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{DisplayOptions, Severity};

    #[test]
    fn alignment_follows_anchor() {
        assert_eq!(
            alignment_for(Anchor::TopLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
        assert_eq!(
            alignment_for(Anchor::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = I18n::default();
        let mut controller = Controller::default();
        let _ = view_overlay(&controller, &i18n);

        controller.display(
            "with action",
            DisplayOptions::new().with_action("Undo", || {}),
            Severity::Warning,
        );
        controller.display_error("plain", DisplayOptions::new());
        let _ = view_overlay(&controller, &i18n);
    }
}

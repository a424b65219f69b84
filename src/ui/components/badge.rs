// SPDX-License-Identifier: MPL-2.0
//! Count badge overlaid on icons and avatars.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container::pill;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
}

impl BadgeSize {
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            BadgeSize::Small => sizing::BADGE_SM,
            BadgeSize::Medium => sizing::BADGE_MD,
        }
    }

    fn font_size(self) -> f32 {
        match self {
            BadgeSize::Small => typography::CAPTION - 2.0,
            BadgeSize::Medium => typography::CAPTION,
        }
    }
}

/// Formats a count for display, capping at `max` (`"99+"`).
///
/// Returns `None` for zero so the badge is hidden.
#[must_use]
pub fn format_count(count: u32, max: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > max => Some(format!("{max}+")),
        n => Some(n.to_string()),
    }
}

/// Renders a badge, or nothing when `count` is zero.
pub fn view<'a, Message: 'a>(count: u32, max: u32, size: BadgeSize) -> Option<Element<'a, Message>> {
    let label = format_count(count, max)?;
    let height = size.height();
    Some(
        Container::new(Text::new(label).size(size.font_size()))
            .height(Length::Fixed(height))
            .padding([0.0, spacing::XXS])
            .align_y(alignment::Vertical::Center)
            .style(pill(palette::ERROR_500, palette::WHITE))
            .into(),
    )
}

const _: () = {
    assert!(typography::CAPTION - 2.0 > 0.0);
};

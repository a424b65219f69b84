// SPDX-License-Identifier: MPL-2.0
//! Circular avatar showing a person's initials.
//!
//! # Usage
//!
//! ```ignore
//! Avatar::new("Ada Lovelace").size(AvatarSize::Large).view()
//! ```

use crate::ui::design_tokens::{palette, sizing, typography};
use crate::ui::styles::container::pill;
use iced::widget::{Container, Text};
use iced::{alignment, Color, Element, Length};

/// Avatar diameter preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl AvatarSize {
    #[must_use]
    pub fn diameter(self) -> f32 {
        match self {
            AvatarSize::Small => sizing::AVATAR_SM,
            AvatarSize::Medium => sizing::AVATAR_MD,
            AvatarSize::Large => sizing::AVATAR_LG,
            AvatarSize::XLarge => sizing::AVATAR_XL,
        }
    }

    #[must_use]
    pub fn font_size(self) -> f32 {
        match self {
            AvatarSize::Small => typography::CAPTION,
            AvatarSize::Medium => typography::BODY,
            AvatarSize::Large => typography::BODY_LG,
            AvatarSize::XLarge => typography::TITLE_MD,
        }
    }
}

/// Returns up to two initials: the first letter of the first and last words.
///
/// Blank names render as `"?"`.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return "?".to_string();
    };

    let mut out: String = leading_upper(first);
    if let Some(last) = words.last() {
        out.push_str(&leading_upper(last));
    }
    out
}

fn leading_upper(word: &str) -> String {
    word.chars().next().map(char::to_uppercase).into_iter().flatten().collect()
}

const FILLS: [Color; 5] = [
    palette::PRIMARY_600,
    palette::SUCCESS_500,
    palette::WARNING_500,
    palette::INFO_500,
    palette::ERROR_500,
];

/// Picks a stable background color for a name.
#[must_use]
pub fn fill_for(name: &str) -> Color {
    let sum = name.chars().fold(0usize, |acc, c| acc.wrapping_add(c as usize));
    FILLS[sum % FILLS.len()]
}

#[derive(Debug, Clone)]
pub struct Avatar {
    name: String,
    size: AvatarSize,
}

impl Avatar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: AvatarSize::default(),
        }
    }

    #[must_use]
    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        let diameter = self.size.diameter();
        Container::new(Text::new(initials(&self.name)).size(self.size.font_size()))
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(pill(fill_for(&self.name), palette::WHITE))
            .into()
    }
}

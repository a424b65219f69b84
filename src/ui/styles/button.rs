// SPDX-License-Identifier: MPL-2.0
//! Button styles and the variant map.
//!
//! Components pick a [`Variant`] and call [`variant`] to get the matching
//! style function; the individual functions stay public for `button::style`.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Main call to action, filled with the brand color.
    #[default]
    Primary,
    /// Outlined, neutral surface.
    Secondary,
    /// No background until hovered.
    Ghost,
    /// Destructive action.
    Danger,
}

/// Style function signature shared by every variant.
pub type StyleFn = fn(&Theme, button::Status) -> button::Style;

/// Returns the style function for a variant.
#[must_use]
pub fn variant(variant: Variant) -> StyleFn {
    match variant {
        Variant::Primary => primary,
        Variant::Secondary => secondary,
        Variant::Ghost => ghost,
        Variant::Danger => danger,
    }
}

fn filled(background: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Neutral fill for the light or dark half of the palette.
fn neutral(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_100
    }
}

fn outlined(fill: Color, text_color: Color, edge: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn disabled_style(theme: &Theme) -> button::Style {
    outlined(neutral(theme), palette::GRAY_400, palette::GRAY_400)
}

pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled(palette::PRIMARY_500, palette::PRIMARY_600),
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..filled(palette::PRIMARY_400, palette::PRIMARY_500)
        },
        button::Status::Pressed => filled(palette::PRIMARY_600, palette::PRIMARY_700),
        button::Status::Disabled => disabled_style(theme),
    }
}

pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Hovered => {
            filled(palette::ERROR_500, palette::ERROR_600)
        }
        button::Status::Pressed => filled(palette::ERROR_600, palette::ERROR_600),
        button::Status::Disabled => disabled_style(theme),
    }
}

pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = if theme.extended_palette().is_dark {
        WHITE
    } else {
        palette::GRAY_900
    };
    let fill = neutral(theme);

    match status {
        button::Status::Active | button::Status::Pressed => {
            outlined(fill, text_color, palette::GRAY_400)
        }
        button::Status::Hovered => button::Style {
            shadow: shadow::SM,
            ..outlined(fill, text_color, palette::PRIMARY_500)
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let tint = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => tint(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => tint(opacity::OVERLAY_MEDIUM),
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base.text
        }
    } else {
        base.text
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only navigation button (breadcrumb links).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Disabled => palette.background.strong.text,
        button::Status::Active => palette.primary.base.color,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Entry of a dropdown menu.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.strong.text,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background_color(style: &button::Style) -> Option<Color> {
        match style.background {
            Some(Background::Color(color)) => Some(color),
            _ => None,
        }
    }

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(background_color(&style), Some(palette::PRIMARY_500));
    }

    #[test]
    fn variant_map_returns_matching_function() {
        let theme = Theme::Light;
        let status = button::Status::Active;
        assert_eq!(
            background_color(&variant(Variant::Danger)(&theme, status)),
            Some(palette::ERROR_500)
        );
        assert_eq!(
            background_color(&variant(Variant::Primary)(&theme, status)),
            Some(palette::PRIMARY_500)
        );
        assert!(variant(Variant::Ghost)(&theme, status).background.is_none());
    }

    #[test]
    fn ghost_gains_background_on_hover() {
        let theme = Theme::Dark;
        let idle = ghost(&theme, button::Status::Active);
        let hover = ghost(&theme, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hover.background.is_some());
    }

    #[test]
    fn disabled_variants_share_muted_text() {
        let theme = Theme::Light;
        for v in [Variant::Primary, Variant::Secondary, Variant::Danger] {
            let style = variant(v)(&theme, button::Status::Disabled);
            assert_eq!(style.text_color, palette::GRAY_400);
        }
    }

    #[test]
    fn secondary_follows_palette_brightness() {
        let light = secondary(&Theme::Light, button::Status::Active);
        let dark = secondary(&Theme::Dark, button::Status::Active);
        assert_eq!(background_color(&light), Some(palette::GRAY_100));
        assert_eq!(background_color(&dark), Some(palette::GRAY_700));
        assert_eq!(dark.text_color, WHITE);
    }

    #[test]
    fn link_has_no_background() {
        let style = link(&Theme::Light, button::Status::Hovered);
        assert!(style.background.is_none());
    }
}

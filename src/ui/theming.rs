// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes built from the design tokens, and the Iced
//! themes derived from them.

use crate::ui::design_tokens::{opacity, palette};
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Semantic colors for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_raised: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub danger: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
    /// Dimmed backdrop behind drawers.
    pub scrim: Color,
    pub divider: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            surface_raised: palette::GRAY_100,
            text: palette::GRAY_900,
            text_muted: palette::GRAY_700,
            accent: palette::PRIMARY_600,
            accent_hover: palette::PRIMARY_700,
            danger: palette::ERROR_600,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            divider: palette::GRAY_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            surface_raised: palette::GRAY_800,
            text: palette::GRAY_100,
            text_muted: palette::GRAY_400,
            accent: palette::PRIMARY_400,
            accent_hover: palette::PRIMARY_200,
            danger: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            divider: palette::GRAY_700,
        }
    }

    /// Iced palette seeded from this scheme. Colors Iced derives on its own
    /// (hover shades, weak/strong backgrounds) follow from these.
    #[must_use]
    pub fn iced_palette(&self, base: Palette) -> Palette {
        Palette {
            background: self.surface,
            text: self.text,
            primary: self.accent,
            success: self.success,
            danger: self.danger,
            ..base
        }
    }
}

/// Which scheme to use; `System` follows the OS preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors default to dark
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Returns the Iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        AppTheme::new(self).iced_theme()
    }
}

/// Resolved theme: the requested mode and its colors.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    /// Resolves `mode`. `System` is detected once, here.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Builds a custom Iced theme from the resolved colors.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let (name, base) = if self.dark {
            ("Trellis Dark", Palette::DARK)
        } else {
            ("Trellis Light", Palette::LIGHT)
        };
        Theme::custom(name.to_string(), self.colors.iced_palette(base))
    }
}

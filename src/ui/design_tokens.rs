// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by every component. Colors follow a Material-style
tonal scale (100 lightest, 900 darkest).

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px base, 8px grid)
- **Sizing**: Component sizes (icons, avatar, badge, toast, drawer)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_trellis::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let hover = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::PRIMARY_500
};

let gap = spacing::MD;
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral greys, 100 lightest
    pub const GRAY_900: Color = Color::from_rgb8(0x21, 0x21, 0x21);
    pub const GRAY_800: Color = Color::from_rgb8(0x42, 0x42, 0x42);
    pub const GRAY_700: Color = Color::from_rgb8(0x61, 0x61, 0x61);
    pub const GRAY_400: Color = Color::from_rgb8(0x9e, 0x9e, 0x9e);
    pub const GRAY_200: Color = Color::from_rgb8(0xe0, 0xe0, 0xe0);
    pub const GRAY_100: Color = Color::from_rgb8(0xf5, 0xf5, 0xf5);

    // Brand blue
    pub const PRIMARY_200: Color = Color::from_rgb8(0x90, 0xca, 0xf9);
    pub const PRIMARY_400: Color = Color::from_rgb8(0x42, 0xa5, 0xf5);
    pub const PRIMARY_500: Color = Color::from_rgb8(0x21, 0x96, 0xf3);
    pub const PRIMARY_600: Color = Color::from_rgb8(0x1e, 0x88, 0xe5);
    pub const PRIMARY_700: Color = Color::from_rgb8(0x19, 0x76, 0xd2);

    // Severity accents
    pub const ERROR_500: Color = Color::from_rgb8(0xf4, 0x43, 0x36);
    pub const ERROR_600: Color = Color::from_rgb8(0xe5, 0x39, 0x35);
    pub const WARNING_500: Color = Color::from_rgb8(0xff, 0x98, 0x00);
    pub const SUCCESS_500: Color = Color::from_rgb8(0x4c, 0xaf, 0x50);
    pub const INFO_500: Color = Color::from_rgb8(0x03, 0xa9, 0xf4);
}

/// Alpha levels for scrims and hover washes.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.12;
    pub const OVERLAY_MEDIUM: f32 = 0.38;
    pub const OVERLAY_STRONG: f32 = 0.6;
}

/// 4px base unit.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;

    pub const AVATAR_SM: f32 = 24.0;
    pub const AVATAR_MD: f32 = 32.0;
    pub const AVATAR_LG: f32 = 40.0;
    pub const AVATAR_XL: f32 = 56.0;

    pub const BADGE_SM: f32 = 16.0;
    pub const BADGE_MD: f32 = 20.0;

    pub const TOAST_WIDTH: f32 = 344.0;
    pub const MENU_MIN_WIDTH: f32 = 180.0;

    /// Height of the grab handle on top of a drawer.
    pub const DRAWER_HANDLE: f32 = 24.0;

    // Circular progress
    pub const PROGRESS_SIZE: f32 = 40.0;
    pub const PROGRESS_THICKNESS: f32 = 3.6;
}

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: section headings
    //! - Body: primary content text
    //! - Caption: badges, avatar initials at small sizes

    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Separators and menus.
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pill and circle shapes.
    pub const FULL: f32 = 9999.0;
}

/// Elevation shadows. `NONE` keeps flat widgets from inheriting one.
pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const UMBRA: Color = Color {
        a: 0.24,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: UMBRA,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: UMBRA,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 6.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG < 1.0);

    assert!(sizing::AVATAR_XL > sizing::AVATAR_LG);
    assert!(sizing::AVATAR_LG > sizing::AVATAR_MD);
    assert!(sizing::AVATAR_MD > sizing::AVATAR_SM);
    assert!(sizing::BADGE_MD > sizing::BADGE_SM);
    assert!(sizing::PROGRESS_THICKNESS * 2.0 < sizing::PROGRESS_SIZE);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors and per-presenter surface colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use toastbox::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let toast_bg = Color {
    a: opacity::TOAST,
    ..palette::BLACK
};

let padding = spacing::SM; // 12px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Presenter surfaces
    /// Custom popup background (steel blue).
    pub const STEEL_BLUE: Color = Color::from_rgb(0.275, 0.510, 0.706);
    /// Custom popup border.
    pub const DARK_GRAY: Color = Color::from_rgb(0.251, 0.251, 0.251);
    /// Slide-in banner background.
    pub const FOREST_500: Color = Color::from_rgb(0.180, 0.490, 0.196);
    /// Slide-in banner close control.
    pub const FOREST_400: Color = Color::from_rgb(0.298, 0.608, 0.314);
    /// Close control while hovered.
    pub const FOREST_300: Color = Color::from_rgb(0.400, 0.706, 0.416);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Toast panel (200/255).
    pub const TOAST: f32 = 0.784;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Banner close control (square).
    pub const CLOSE_BUTTON: f32 = 25.0;

    // Main window
    pub const MAIN_WINDOW_WIDTH: f32 = 400.0;
    pub const MAIN_WINDOW_HEIGHT: f32 = 300.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Popup title.
    pub const TITLE_SM: f32 = 14.0;

    /// Banner message.
    pub const BODY_LG: f32 = 13.0;

    /// Standard body - toast and popup message.
    pub const BODY: f32 = 12.0;

    /// Close glyph.
    pub const GLYPH: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - Popup frame
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::LG > spacing::SM);

    assert!(opacity::TOAST > 0.0 && opacity::TOAST < 1.0);

    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);

    assert!(border::WIDTH_MD > 0.0);
    assert!(radius::SM > radius::NONE);
};

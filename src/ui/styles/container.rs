// SPDX-License-Identifier: MPL-2.0
//! Container styles for the notification surfaces.
//!
//! Each surface fills its whole borderless window, so the container style is
//! effectively the window's look.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Main window background, derived from the active theme.
pub fn main_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dark translucent toast panel with white text.
pub fn toast(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TOAST,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Steel-blue popup framed by a dark-gray border.
pub fn popup(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STEEL_BLUE)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::DARK_GRAY,
            width: border::WIDTH_MD,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Green slide-in banner.
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::FOREST_500)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

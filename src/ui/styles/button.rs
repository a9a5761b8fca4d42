// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Trigger buttons of the main window.
///
/// Uses app's brand colors so both light and dark themes share the same
/// accent, with a theme-aware grey for disabled triggers.
pub fn trigger(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Flat close control embedded in the slide-in banner.
pub fn banner_close(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::FOREST_300,
        _ => palette::FOREST_400,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_trigger_is_grey() {
        let style = trigger(&Theme::Light, button::Status::Disabled);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::GRAY_200))
        );
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn hovered_trigger_is_lighter_than_active() {
        let active = trigger(&Theme::Dark, button::Status::Active);
        let hovered = trigger(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn banner_close_highlights_on_hover() {
        let idle = banner_close(&Theme::Dark, button::Status::Active);
        let hovered = banner_close(&Theme::Dark, button::Status::Hovered);
        assert_eq!(idle.background, Some(Background::Color(palette::FOREST_400)));
        assert_eq!(
            hovered.background,
            Some(Background::Color(palette::FOREST_300))
        );
    }
}

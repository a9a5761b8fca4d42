// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use toastbox::ui::design_tokens::{border, palette, sizing, typography};
    use toastbox::ui::styles::{button, container};
    use toastbox::ui::theming::ThemeMode;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::trigger(&theme, Status::Active);
            let _ = button::trigger(&theme, Status::Disabled);
            let _ = button::banner_close(&theme, Status::Hovered);
            let _ = container::main_panel(&theme);
            let _ = container::toast(&theme);
            let _ = container::popup(&theme);
            let _ = container::banner(&theme);
        }
    }

    #[test]
    fn notification_surfaces_ignore_the_theme() {
        assert_eq!(
            container::popup(&Theme::Light).background,
            container::popup(&Theme::Dark).background
        );
        assert_eq!(
            container::popup(&Theme::Dark).background,
            Some(Background::Color(palette::STEEL_BLUE))
        );
        assert_eq!(container::popup(&Theme::Dark).border.width, border::WIDTH_MD);
    }

    #[test]
    fn close_control_fits_inside_banner() {
        let banner_height = toastbox::config::BannerConfig::default().height as f32;
        assert!(sizing::CLOSE_BUTTON < banner_height);
        assert!(typography::GLYPH <= sizing::CLOSE_BUTTON);
    }

    #[test]
    fn explicit_theme_modes_resolve() {
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
    }
}

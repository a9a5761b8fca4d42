// SPDX-License-Identifier: MPL-2.0
//! Window settings for the main window and every notification surface.

use crate::ui::design_tokens::sizing;
use iced::window::{self, Level, Position};
use iced::{Point, Size};

/// Main window with the trigger buttons.
pub fn main() -> window::Settings {
    window::Settings {
        size: Size::new(sizing::MAIN_WINDOW_WIDTH, sizing::MAIN_WINDOW_HEIGHT),
        position: Position::Centered,
        resizable: false,
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Borderless, always-on-top window at a fixed screen position.
pub fn notification(position: (i32, i32), width: u32, height: u32) -> window::Settings {
    window::Settings {
        size: Size::new(width as f32, height as f32),
        position: Position::Specific(Point::new(position.0 as f32, position.1 as f32)),
        resizable: false,
        decorations: false,
        level: Level::AlwaysOnTop,
        ..window::Settings::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_windows_are_borderless_and_on_top() {
        let settings = notification((1540, 976), 360, 44);

        assert!(!settings.decorations);
        assert!(!settings.resizable);
        assert_eq!(settings.level, Level::AlwaysOnTop);
        assert_eq!(settings.size, Size::new(360.0, 44.0));
        assert!(matches!(
            settings.position,
            Position::Specific(point) if point == Point::new(1540.0, 976.0)
        ));
    }

    #[test]
    fn main_window_uses_design_size() {
        let settings = main();
        assert_eq!(
            settings.size,
            Size::new(sizing::MAIN_WINDOW_WIDTH, sizing::MAIN_WINDOW_HEIGHT)
        );
        assert!(settings.decorations);
    }
}

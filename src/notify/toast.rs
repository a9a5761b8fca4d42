// SPDX-License-Identifier: MPL-2.0
//! Auto-dismissing toast.
//!
//! A toast is a borderless always-on-top window parked in the bottom-right
//! corner. It has no interaction; a one-shot timer destroys it.

use super::{px, ScreenSize};
use crate::config::{ToastConfig, TOAST_BOTTOM_MARGIN_PX, TOAST_RIGHT_MARGIN_PX};
use std::time::Duration;

/// One visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The i18n key of the message.
    message_key: &'static str,
    lifetime: Duration,
}

impl Toast {
    #[must_use]
    pub fn new(message_key: &'static str, lifetime: Duration) -> Self {
        Self {
            message_key,
            lifetime,
        }
    }

    #[must_use]
    pub fn message_key(&self) -> &'static str {
        self.message_key
    }

    /// Time before the window is destroyed.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

/// Top-left corner of a toast: 20px from the right edge, 60px from the bottom.
#[must_use]
pub fn placement(screen: ScreenSize, config: &ToastConfig) -> (i32, i32) {
    (
        screen
            .width
            .saturating_sub(px(config.width))
            .saturating_sub(TOAST_RIGHT_MARGIN_PX),
        screen
            .height
            .saturating_sub(px(config.height))
            .saturating_sub(TOAST_BOTTOM_MARGIN_PX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_is_bottom_right_with_margins() {
        let screen = ScreenSize::new(1920, 1080);
        let config = ToastConfig::default();

        let (x, y) = placement(screen, &config);

        assert_eq!(x + config.width as i32 + 20, 1920);
        assert_eq!(y + config.height as i32 + 60, 1080);
    }

    #[test]
    fn placement_follows_configured_size() {
        let screen = ScreenSize::new(800, 600);
        let config = ToastConfig {
            width: 200,
            height: 40,
            ..ToastConfig::default()
        };

        assert_eq!(placement(screen, &config), (580, 500));
    }

    #[test]
    fn toast_keeps_its_lifetime() {
        let toast = Toast::new("toast-message", Duration::from_secs(3));
        assert_eq!(toast.lifetime(), Duration::from_millis(3000));
        assert_eq!(toast.message_key(), "toast-message");
    }
}

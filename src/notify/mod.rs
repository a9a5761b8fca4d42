// SPDX-License-Identifier: MPL-2.0
//! Notification presenters.
//!
//! Each presenter is a small value describing one visible notification:
//!
//! - [`dialog`]: blocking message box, also used as the tray fallback
//! - [`toast`]: bottom-right window closed by a one-shot timer
//! - [`tray`]: notification-area icon with one balloon
//! - [`popup`]: centered window closed by a click
//! - [`banner`]: slide-in / dwell / slide-out state machine
//!
//! [`surface`] keeps track of which window shows which presenter, [`timer`]
//! ends their lives.

pub mod banner;
pub mod dialog;
pub mod popup;
pub mod surface;
pub mod timer;
pub mod toast;
pub mod tray;

pub use banner::{Motion, Phase, SlideBanner, Step};
pub use surface::{BannerEntry, Surface, Surfaces};

use crate::config::ScreenConfig;

/// Size of the monitor hosting the main window, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<iced::Size> for ScreenSize {
    fn from(size: iced::Size) -> Self {
        Self::new(size.width.round() as i32, size.height.round() as i32)
    }
}

impl From<&ScreenConfig> for ScreenSize {
    fn from(config: &ScreenConfig) -> Self {
        Self::new(px(config.fallback_width), px(config.fallback_height))
    }
}

/// Converts a configured size to screen coordinates, saturating.
#[must_use]
pub fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

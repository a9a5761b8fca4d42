// SPDX-License-Identifier: MPL-2.0
//! Click-to-dismiss custom popup.

use super::{px, ScreenSize};
use crate::config::PopupConfig;

/// One visible popup: a title and a message, both i18n keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    title_key: &'static str,
    message_key: &'static str,
}

impl Popup {
    #[must_use]
    pub fn new(title_key: &'static str, message_key: &'static str) -> Self {
        Self {
            title_key,
            message_key,
        }
    }

    #[must_use]
    pub fn title_key(&self) -> &'static str {
        self.title_key
    }

    #[must_use]
    pub fn message_key(&self) -> &'static str {
        self.message_key
    }
}

/// Top-left corner of a popup centered on screen.
#[must_use]
pub fn placement(screen: ScreenSize, config: &PopupConfig) -> (i32, i32) {
    (
        screen.width.saturating_sub(px(config.width)) / 2,
        screen.height.saturating_sub(px(config.height)) / 2,
    )
}

// SPDX-License-Identifier: MPL-2.0
//! Modal message box, used both as a presenter and as the fallback for
//! tray failures.

use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

/// Severity of the message box icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Warning,
}

impl From<DialogLevel> for MessageLevel {
    fn from(level: DialogLevel) -> Self {
        match level {
            DialogLevel::Info => MessageLevel::Info,
            DialogLevel::Warning => MessageLevel::Warning,
        }
    }
}

/// A fully localized message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub message: String,
    pub level: DialogLevel,
}

impl DialogRequest {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: DialogLevel::Info,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DialogLevel::Warning,
            ..Self::info(title, message)
        }
    }
}

/// Shows the message box and resolves once the user dismisses it.
pub async fn show(request: DialogRequest) {
    log::debug!("dialog opened: {}", request.title);
    AsyncMessageDialog::new()
        .set_level(request.level.into())
        .set_title(&request.title)
        .set_description(&request.message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
    log::debug!("dialog dismissed: {}", request.title);
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::TrayError;
use crate::notify::tray::TrayTicket;
use iced::{window, Size};
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Monitor size of the main window, once the platform reports it.
    ScreenMeasured(Option<Size>),

    ShowDialog,
    /// The modal message box was dismissed.
    DialogClosed,

    ShowToast,
    /// The toast lifetime timer fired.
    ToastExpired(window::Id),

    /// Result of the startup notification-area support check.
    TraySupportChecked(bool),
    ShowTray,
    /// The icon and balloon were posted, or why they were not.
    TrayShown(Result<TrayTicket, TrayError>),
    /// The tray icon lifetime timer fired.
    TrayExpired(TrayTicket),

    ShowPopup,
    /// A click landed anywhere inside a popup.
    PopupClicked(window::Id),

    ShowBanner,
    /// Animation tick shared by every moving banner.
    BannerTick(Instant),
    /// The dwell timer of a banner fired.
    BannerDwellElapsed(window::Id),
    /// The × control of a banner was pressed.
    BannerClosePressed(window::Id),

    /// A window is gone, whoever closed it.
    WindowClosed(window::Id),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOASTBOX_CONFIG_DIR`.
    pub config_dir: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the notification presenters.
//!
//! The `App` owns every process-wide collaborator (settings, localization, the
//! notification-area service) and the registry of open windows. It runs as an
//! Iced daemon so each notification can live in its own borderless window;
//! closing the main window ends the process.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;
mod windows;


pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::icon;
use crate::notify::tray::{self, DesktopNotificationArea, SharedArea, TrayPresenter};
use crate::notify::{Motion, ScreenSize, Surface, Surfaces};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Set when the settings file was unreadable and defaults are in use.
    config_warning: Option<String>,
    /// Resolved once at startup.
    theme: Theme,
    motion: Motion,
    screen: ScreenSize,
    main_window: Option<window::Id>,
    surfaces: Surfaces,
    /// A modal message box is up; triggers are disabled until it closes.
    dialog_open: bool,
    /// Absent when the tray icon could not be rendered.
    tray: Option<TrayPresenter>,
    notification_area: SharedArea,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("surfaces", &self.surfaces.len())
            .field("dialog_open", &self.dialog_open)
            .field("tray_supported", &self.tray_supported())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced daemon.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::daemon(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and translations, opens the main window and checks
    /// whether the notification area is available.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let area = DesktopNotificationArea::new(config.tray.lifetime());

        Self::with_parts(config, config_warning, i18n, Arc::new(Mutex::new(area)))
    }

    fn with_parts(
        config: Config,
        config_warning: Option<String>,
        i18n: I18n,
        notification_area: SharedArea,
    ) -> (Self, Task<Message>) {
        if let Some(key) = &config_warning {
            log::warn!("{}", i18n.tr(key));
        }

        let tray = match icon::tray_icon() {
            Some(image) => Some(TrayPresenter::new(
                image,
                config.tray.tooltip.clone(),
                config.tray.lifetime(),
            )),
            None => {
                log::warn!("tray icon could not be rendered");
                None
            }
        };
        let mut app = App {
            i18n,
            config_warning,
            theme: config.general.theme_mode.resolve(),
            motion: Motion::from(&config.banner),
            screen: ScreenSize::from(&config.screen),
            main_window: None,
            surfaces: Surfaces::new(),
            dialog_open: false,
            tray,
            notification_area,
            config,
        };

        let (id, open) = window::open(windows::main());
        app.main_window = Some(id);
        app.surfaces.insert(id, Surface::Main);

        let measure = open
            .then(window::monitor_size)
            .map(Message::ScreenMeasured);
        let check_tray = Task::perform(
            tray::with_area(app.notification_area.clone(), |area| area.is_supported()),
            |supported| Message::TraySupportChecked(supported.unwrap_or(false)),
        );
        (app, Task::batch([measure, check_tray]))
    }

    /// Whether the tray presenter can be used. False until the startup check answers.
    fn tray_supported(&self) -> bool {
        self.tray.as_ref().is_some_and(TrayPresenter::is_supported)
    }

    fn title(&self, window: window::Id) -> String {
        match self.surfaces.get(window) {
            Some(Surface::Popup(popup)) => self.i18n.tr(popup.title_key()),
            _ => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self, _window: window::Id) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_banner_subscription(
                self.surfaces.has_moving_banners(),
                self.motion.tick,
            ),
        ])
    }

    fn view(&self, window: window::Id) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            window,
            surface: self.surfaces.get(window),
            dialog_open: self.dialog_open,
            tray_supported: self.tray_supported(),
            config_warning: self.config_warning.as_deref(),
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ScreenMeasured(size) => {
                update::handle_screen_measured(self, size);
                Task::none()
            }
            Message::ShowDialog => update::handle_show_dialog(self),
            Message::DialogClosed => {
                self.dialog_open = false;
                Task::none()
            }
            Message::ShowToast => update::handle_show_toast(self),
            Message::ToastExpired(id) => update::release_window(self, id),
            Message::TraySupportChecked(supported) => {
                update::handle_tray_support_checked(self, supported);
                Task::none()
            }
            Message::ShowTray => update::handle_show_tray(self),
            Message::TrayShown(result) => update::handle_tray_shown(self, result),
            Message::TrayExpired(ticket) => update::handle_tray_expired(self, ticket),
            Message::ShowPopup => update::handle_show_popup(self),
            Message::PopupClicked(id) => update::release_window(self, id),
            Message::ShowBanner => update::handle_show_banner(self),
            Message::BannerTick(_instant) => update::handle_banner_tick(self),
            Message::BannerDwellElapsed(id) => {
                update::handle_banner_dwell_elapsed(self, id);
                Task::none()
            }
            Message::BannerClosePressed(id) => update::release_window(self, id),
            Message::WindowClosed(id) => update::handle_window_closed(self, id),
        }
    }
}

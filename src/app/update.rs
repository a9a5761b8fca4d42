// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each presenter follows the same shape: open a window and record it in the
//! surface registry, then schedule whatever ends its life. Every path that
//! ends a life goes through [`release_window`], which closes a window only
//! if the registry still knew about it.

use super::{windows, App, Message};
use crate::error::TrayError;
use crate::notify::dialog::{self, DialogRequest};
use crate::notify::popup::{self, Popup};
use crate::notify::toast::{self, Toast};
use crate::notify::timer;
use crate::notify::tray::{self, Balloon, TrayPresenter, TrayTicket};
use crate::notify::{px, BannerEntry, ScreenSize, SlideBanner, Step, Surface};
use iced::{window, Point, Size, Task};
use std::time::Duration;

/// Delivers `message` once `delay` has elapsed.
fn after(delay: Duration, message: Message) -> Task<Message> {
    timer::one_shot(delay, message)
}

fn move_window(id: window::Id, x: i32, y: i32) -> Task<Message> {
    window::move_to(id, Point::new(x as f32, y as f32))
}

pub fn handle_screen_measured(app: &mut App, size: Option<Size>) {
    match size {
        Some(size) => {
            app.screen = ScreenSize::from(size);
            log::debug!("screen is {}x{}", app.screen.width, app.screen.height);
        }
        None => log::warn!(
            "monitor size unavailable, assuming {}x{}",
            app.screen.width,
            app.screen.height
        ),
    }
}

/// Forgets a notification window and closes it.
///
/// Stale timers and repeated clicks land here too; they find nothing in the
/// registry and do nothing.
pub fn release_window(app: &mut App, id: window::Id) -> Task<Message> {
    if app.main_window == Some(id) {
        return Task::none();
    }
    match app.surfaces.remove(id) {
        Some(_) => window::close(id),
        None => Task::none(),
    }
}

pub fn handle_window_closed(app: &mut App, id: window::Id) -> Task<Message> {
    if app.main_window == Some(id) {
        log::info!("main window closed, exiting");
        app.surfaces.remove(id);
        return iced::exit();
    }
    if let Some(surface) = app.surfaces.remove(id) {
        log::debug!("{} window {:?} closed by the platform", surface.kind(), id);
    }
    Task::none()
}

// =============================================================================
// Dialog
// =============================================================================

pub fn handle_show_dialog(app: &mut App) -> Task<Message> {
    let request = DialogRequest::info(app.i18n.tr("dialog-title"), app.i18n.tr("dialog-message"));
    open_dialog(app, request)
}

fn open_dialog(app: &mut App, request: DialogRequest) -> Task<Message> {
    if app.dialog_open {
        log::debug!("dialog already open, ignoring: {}", request.message);
        return Task::none();
    }
    app.dialog_open = true;
    Task::perform(dialog::show(request), |()| Message::DialogClosed)
}

// =============================================================================
// Toast & popup
// =============================================================================

pub fn handle_show_toast(app: &mut App) -> Task<Message> {
    let config = &app.config.toast;
    let position = toast::placement(app.screen, config);
    let toast = Toast::new("toast-message", config.duration());
    let lifetime = toast.lifetime();

    let (id, open) = window::open(windows::notification(position, config.width, config.height));
    app.surfaces.insert(id, Surface::Toast(toast));

    Task::batch([open.discard(), after(lifetime, Message::ToastExpired(id))])
}

pub fn handle_show_popup(app: &mut App) -> Task<Message> {
    let config = &app.config.popup;
    let position = popup::placement(app.screen, config);

    let (id, open) = window::open(windows::notification(position, config.width, config.height));
    app.surfaces
        .insert(id, Surface::Popup(Popup::new("popup-title", "popup-message")));

    open.discard()
}

// =============================================================================
// Tray
// =============================================================================

pub fn handle_tray_support_checked(app: &mut App, supported: bool) {
    log::info!("notification area supported: {}", supported);
    if let Some(presenter) = &mut app.tray {
        presenter.set_supported(supported);
    }
}

/// Posts the icon and balloon off the event loop.
///
/// An unsupported host goes straight to the fallback dialog without touching
/// the notification area.
pub fn handle_show_tray(app: &mut App) -> Task<Message> {
    let presenter = match &app.tray {
        Some(presenter) if presenter.is_supported() => presenter.clone(),
        _ => return tray_failed(app, TrayError::NotSupported),
    };
    let balloon = Balloon {
        title: app.i18n.tr("tray-title"),
        body: app.i18n.tr("tray-message"),
    };

    Task::perform(
        tray::with_area(app.notification_area.clone(), move |area| {
            presenter.show(area, &balloon)
        }),
        |result| Message::TrayShown(result.and_then(|shown| shown)),
    )
}

pub fn handle_tray_shown(app: &mut App, result: Result<TrayTicket, TrayError>) -> Task<Message> {
    match result {
        Ok(ticket) => {
            let lifetime = app
                .tray
                .as_ref()
                .map_or(Duration::ZERO, TrayPresenter::lifetime);
            after(lifetime, Message::TrayExpired(ticket))
        }
        Err(err) => tray_failed(app, err),
    }
}

/// Logs a tray failure and tells the user through a warning dialog.
fn tray_failed(app: &mut App, err: TrayError) -> Task<Message> {
    log::error!("tray notification failed: {}", err);
    let message = match &err {
        TrayError::RegistrationFailed(reason) => app
            .i18n
            .tr_with_args(err.i18n_key(), &[("reason", reason.as_str())]),
        TrayError::NotSupported => app.i18n.tr(err.i18n_key()),
    };
    let request = DialogRequest::warning(app.i18n.tr("error-dialog-title"), message);
    open_dialog(app, request)
}

pub fn handle_tray_expired(app: &mut App, ticket: TrayTicket) -> Task<Message> {
    Task::future(tray::with_area(
        app.notification_area.clone(),
        move |area| area.unregister(ticket),
    ))
    .then(move |removed| {
        match removed {
            Ok(true) => {}
            Ok(false) => log::debug!("tray icon {:?} was already gone", ticket),
            Err(err) => log::warn!("tray icon {:?} could not be removed: {}", ticket, err),
        }
        Task::none()
    })
}

// =============================================================================
// Slide-in banner
// =============================================================================

pub fn handle_show_banner(app: &mut App) -> Task<Message> {
    let config = &app.config.banner;
    let banner = SlideBanner::new(app.screen.width, px(config.width), &app.motion);

    let (id, open) = window::open(windows::notification(
        banner.position(),
        config.width,
        config.height,
    ));
    log::debug!(
        "banner {:?} sliding in from x={} to x={}",
        id,
        banner.position().0,
        banner.final_x()
    );
    app.surfaces.insert(id, Surface::Banner(BannerEntry::new(banner)));

    open.discard()
}

/// Advances every moving banner by one step.
pub fn handle_banner_tick(app: &mut App) -> Task<Message> {
    let dwell = app.motion.dwell;
    let mut tasks = Vec::new();

    for id in app.surfaces.moving_banners() {
        let Some(entry) = app.surfaces.banner_mut(id) else {
            continue;
        };
        let (_, y) = entry.banner.position();

        match entry.banner.tick() {
            Step::Moved(x) => tasks.push(move_window(id, x, y)),
            Step::Arrived(x) => {
                let (timer, handle) = after(dwell, Message::BannerDwellElapsed(id)).abortable();
                entry.arm_dwell(handle);
                log::debug!("banner {:?} dwelling at x={}", id, x);
                tasks.push(move_window(id, x, y));
                tasks.push(timer);
            }
            Step::Departed => tasks.push(release_window(app, id)),
            Step::Idle => {}
        }
    }

    Task::batch(tasks)
}

pub fn handle_banner_dwell_elapsed(app: &mut App, id: window::Id) {
    let Some(entry) = app.surfaces.banner_mut(id) else {
        log::debug!("dwell timer fired for released banner {:?}", id);
        return;
    };
    entry.disarm_dwell();
    if entry.banner.finish_dwell() {
        log::debug!("banner {:?} sliding out", id);
    }
}

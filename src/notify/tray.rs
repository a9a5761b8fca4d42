// SPDX-License-Identifier: MPL-2.0
//! Notification-area (system tray) presenter.
//!
//! The OS service is reached only through [`NotificationArea`], so the
//! presenter can be exercised without a desktop session. The production
//! implementation, [`DesktopNotificationArea`], is backed by `notify-rust`:
//! the freedesktop notification server on Linux/BSD and the native
//! notification centres on macOS and Windows.
//!
//! Every call into the service may be a D-Bus round trip, so the application
//! only touches a [`SharedArea`] through [`with_area`], which runs the call on
//! the blocking pool.

use crate::error::TrayError;
use crate::icon::IconImage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Handle to one registered tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrayTicket(u64);

impl TrayTicket {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Text of an informational balloon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balloon {
    pub title: String,
    pub body: String,
}

/// OS notification-area service.
pub trait NotificationArea {
    /// Whether the host has a notification area at all.
    fn is_supported(&self) -> bool;

    /// Registers an icon with its tooltip.
    fn register(&mut self, icon: &IconImage, tooltip: &str) -> Result<TrayTicket, TrayError>;

    /// Posts a balloon attached to a registered icon.
    fn display_message(&mut self, ticket: TrayTicket, balloon: &Balloon) -> Result<(), TrayError>;

    /// Removes a registered icon. Returns `false` if it was already gone.
    fn unregister(&mut self, ticket: TrayTicket) -> bool;
}

/// Notification area shared between the application and the blocking pool.
pub type SharedArea = Arc<Mutex<dyn NotificationArea + Send>>;

/// Runs `job` against the shared area on the blocking pool.
pub async fn with_area<T, F>(area: SharedArea, job: F) -> Result<T, TrayError>
where
    F: FnOnce(&mut dyn NotificationArea) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut area = area.lock().unwrap_or_else(PoisonError::into_inner);
        job(&mut *area)
    })
    .await
    .map_err(|err| TrayError::RegistrationFailed(err.to_string()))
}

/// Registers an icon, posts one balloon and tells the caller when to
/// unregister it.
#[derive(Debug, Clone)]
pub struct TrayPresenter {
    icon: IconImage,
    tooltip: String,
    lifetime: Duration,
    /// Result of the startup support check. Unknown counts as unsupported.
    supported: bool,
}

impl TrayPresenter {
    #[must_use]
    pub fn new(icon: IconImage, tooltip: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            icon,
            tooltip: tooltip.into(),
            lifetime,
            supported: false,
        }
    }

    /// Delay after which the returned ticket must be unregistered.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Records the outcome of the one-time support check.
    pub fn set_supported(&mut self, supported: bool) {
        self.supported = supported;
    }

    /// Shows the balloon.
    ///
    /// An unsupported host sees no registration at all. If the balloon cannot
    /// be posted, the icon is unregistered again before the error is returned.
    pub fn show(
        &self,
        area: &mut dyn NotificationArea,
        balloon: &Balloon,
    ) -> Result<TrayTicket, TrayError> {
        if !self.supported {
            return Err(TrayError::NotSupported);
        }

        let ticket = area.register(&self.icon, &self.tooltip)?;
        if let Err(err) = area.display_message(ticket, balloon) {
            area.unregister(ticket);
            return Err(err);
        }
        log::debug!("tray icon {:?} registered for {:?}", ticket, self.lifetime);
        Ok(ticket)
    }
}

// =============================================================================
// notify-rust backend
// =============================================================================

struct Registration {
    icon: IconImage,
    tooltip: String,
    #[cfg(all(unix, not(target_os = "macos")))]
    handle: Option<notify_rust::NotificationHandle>,
}

/// [`NotificationArea`] backed by the desktop notification service.
pub struct DesktopNotificationArea {
    next_ticket: u64,
    balloon_timeout: Duration,
    registrations: HashMap<TrayTicket, Registration>,
}

impl std::fmt::Debug for DesktopNotificationArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopNotificationArea")
            .field("registered", &self.registrations.len())
            .finish()
    }
}

impl DesktopNotificationArea {
    /// `balloon_timeout` is how long the server should keep a balloon up.
    #[must_use]
    pub fn new(balloon_timeout: Duration) -> Self {
        Self {
            next_ticket: 0,
            balloon_timeout,
            registrations: HashMap::new(),
        }
    }
}

impl NotificationArea for DesktopNotificationArea {
    fn is_supported(&self) -> bool {
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            match notify_rust::get_server_information() {
                Ok(info) => {
                    log::debug!("notification server: {} {}", info.name, info.version);
                    true
                }
                Err(err) => {
                    log::info!("no notification server: {}", err);
                    false
                }
            }
        }
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        {
            true
        }
    }

    fn register(&mut self, icon: &IconImage, tooltip: &str) -> Result<TrayTicket, TrayError> {
        let ticket = TrayTicket(self.next_ticket);
        self.next_ticket += 1;
        self.registrations.insert(
            ticket,
            Registration {
                icon: icon.clone(),
                tooltip: tooltip.to_string(),
                #[cfg(all(unix, not(target_os = "macos")))]
                handle: None,
            },
        );
        Ok(ticket)
    }

    fn display_message(&mut self, ticket: TrayTicket, balloon: &Balloon) -> Result<(), TrayError> {
        let Some(registration) = self.registrations.get_mut(&ticket) else {
            return Err(TrayError::RegistrationFailed(format!(
                "unknown tray icon {:?}",
                ticket
            )));
        };

        let timeout_ms = u32::try_from(self.balloon_timeout.as_millis()).unwrap_or(u32::MAX);
        let mut notification = notify_rust::Notification::new();
        notification
            .appname(&registration.tooltip)
            .summary(&balloon.title)
            .body(&balloon.body)
            .timeout(notify_rust::Timeout::Milliseconds(timeout_ms));

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            let icon = &registration.icon;
            match notify_rust::Image::from_rgba(
                icon.width as i32,
                icon.height as i32,
                icon.rgba.clone(),
            ) {
                Ok(image) => {
                    notification.image_data(image);
                }
                Err(err) => log::warn!("tray icon rejected: {}", err),
            }

            let handle = notification
                .show()
                .map_err(|err| TrayError::RegistrationFailed(err.to_string()))?;
            registration.handle = Some(handle);
        }

        #[cfg(not(all(unix, not(target_os = "macos"))))]
        {
            let _ = &registration.icon;
            notification
                .show()
                .map(|_| ())
                .map_err(|err| TrayError::RegistrationFailed(err.to_string()))?;
        }

        Ok(())
    }

    fn unregister(&mut self, ticket: TrayTicket) -> bool {
        let Some(registration) = self.registrations.remove(&ticket) else {
            return false;
        };

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            if let Some(handle) = registration.handle {
                handle.close();
            }
        }
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        {
            let _ = registration;
        }

        log::debug!("tray icon {:?} unregistered", ticket);
        true
    }
}

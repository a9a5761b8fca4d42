// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Reports every closed window, whoever closed it.
pub fn create_window_subscription() -> Subscription<Message> {
    window::close_events().map(Message::WindowClosed)
}

/// Animation clock for the slide-in banners.
///
/// Only runs while at least one banner is sliding, so a resting or empty
/// screen costs no wakeups.
pub fn create_banner_subscription(any_moving: bool, interval: Duration) -> Subscription<Message> {
    if any_moving {
        time::every(interval).map(Message::BannerTick)
    } else {
        Subscription::none()
    }
}

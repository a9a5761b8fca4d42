// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss delay and window size
//! - **Popup**: Window size
//! - **Banner**: Slide animation step, tick rate, dwell and placement
//! - **Tray**: Balloon lifetime
//! - **Screen**: Fallback screen size used before the monitor is measured
//! - **Limits**: Upper bounds applied to every pixel value read from disk

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// How long a toast stays on screen before its window is destroyed.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Toast window width.
pub const DEFAULT_TOAST_WIDTH: u32 = 360;

/// Toast window height.
pub const DEFAULT_TOAST_HEIGHT: u32 = 44;

/// Gap between the toast and the right screen edge.
pub const TOAST_RIGHT_MARGIN_PX: i32 = 20;

/// Gap between the toast and the bottom screen edge (leaves room for a taskbar).
pub const TOAST_BOTTOM_MARGIN_PX: i32 = 60;

// ==========================================================================
// Popup Defaults
// ==========================================================================

pub const DEFAULT_POPUP_WIDTH: u32 = 300;
pub const DEFAULT_POPUP_HEIGHT: u32 = 100;

// ==========================================================================
// Banner Defaults
// ==========================================================================

/// Horizontal distance covered by one animation tick.
pub const DEFAULT_BANNER_STEP_PX: i32 = 8;

/// Interval between two animation ticks.
pub const DEFAULT_BANNER_TICK_MS: u64 = 10;

/// Time the banner rests at its final position before sliding out.
pub const DEFAULT_BANNER_DWELL_MS: u64 = 4000;

/// Gap between the resting banner and the right screen edge.
pub const DEFAULT_BANNER_MARGIN_PX: i32 = 20;

/// Fixed vertical position of the banner.
pub const DEFAULT_BANNER_TOP_PX: i32 = 50;

pub const DEFAULT_BANNER_WIDTH: u32 = 280;
pub const DEFAULT_BANNER_HEIGHT: u32 = 48;

/// Largest accepted animation step.
pub const MAX_BANNER_STEP_PX: i32 = 200;

// ==========================================================================
// Tray Defaults
// ==========================================================================

/// Delay before the tray icon is unregistered.
pub const DEFAULT_TRAY_LIFETIME_MS: u64 = 5000;

/// Tooltip attached to the tray icon.
pub const DEFAULT_TRAY_TOOLTIP: &str = "Notification App";

// ==========================================================================
// Screen Defaults
// ==========================================================================

pub const DEFAULT_SCREEN_WIDTH: u32 = 1920;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 1080;

// ==========================================================================
// Limits
// ==========================================================================

/// Largest accepted window or screen dimension.
pub const MAX_SURFACE_PX: u32 = 16_384;

/// Largest accepted margin or offset.
pub const MAX_OFFSET_PX: i32 = 16_384;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_BANNER_STEP_PX > 0);
    assert!(DEFAULT_BANNER_STEP_PX <= MAX_BANNER_STEP_PX);
    assert!(DEFAULT_BANNER_TICK_MS > 0);
    assert!(DEFAULT_BANNER_DWELL_MS > DEFAULT_BANNER_TICK_MS);
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(DEFAULT_TRAY_LIFETIME_MS > 0);
    assert!(DEFAULT_SCREEN_WIDTH <= MAX_SURFACE_PX);
    assert!(DEFAULT_SCREEN_HEIGHT <= MAX_SURFACE_PX);
    assert!(MAX_OFFSET_PX as u32 == MAX_SURFACE_PX);
};

// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the main window and the notification surfaces.

pub mod button;
pub mod container;

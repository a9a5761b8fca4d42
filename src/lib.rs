// SPDX-License-Identifier: MPL-2.0
//! `toastbox` shows five kinds of desktop notifications from a single window,
//! built with the Iced GUI framework.
//!
//! The presenters live in [`notify`]; the Iced application that wires them to
//! buttons and windows lives in [`app`]. Localization uses Fluent, user
//! preferences are read from a TOML file.

#![doc(html_root_url = "https://docs.rs/toastbox/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod notify;
pub mod ui;

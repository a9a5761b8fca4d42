// SPDX-License-Identifier: MPL-2.0
//! Visual layer shared by every window.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theming;

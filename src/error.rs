// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Tray(TrayError),
}

/// Failures of the OS notification area.
/// Used to pick the localized fallback message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayError {
    /// The host has no notification area (checked before any registration).
    NotSupported,

    /// The notification service rejected the icon registration.
    RegistrationFailed(String),
}

impl TrayError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TrayError::NotSupported => "error-tray-not-supported",
            TrayError::RegistrationFailed(_) => "error-tray-registration-failed",
        }
    }
}

impl fmt::Display for TrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrayError::NotSupported => write!(f, "System tray is not supported"),
            TrayError::RegistrationFailed(msg) => {
                write!(f, "Tray icon registration failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for TrayError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Tray(e) => write!(f, "Tray Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<TrayError> for Error {
    fn from(err: TrayError) -> Self {
        Error::Tray(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

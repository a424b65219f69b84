// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! The component logic itself never fails: an unmatched breadcrumb path is an
//! empty segment list and closing an unknown toast is a no-op. Errors only
//! come from the edges (reading settings and navigation files).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A file could not be read or written.
    Io(String),
    /// `settings.toml` is not valid TOML or has wrongly typed fields.
    Config(String),
    /// A navigation file parsed but does not describe a forest.
    Navigation(String),
}

impl Error {
    /// Returns the i18n key of the warning toast shown for this error.
    #[must_use]
    pub fn warning_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-file-unreadable",
            Error::Config(_) => "notification-config-load-error",
            Error::Navigation(_) => "notification-navigation-load-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, detail) = match self {
            Error::Io(detail) => ("file access failed", detail),
            Error::Config(detail) => ("invalid settings", detail),
            Error::Navigation(detail) => ("invalid navigation tree", detail),
        };
        write!(f, "{kind}: {detail}")
    }
}

impl std::error::Error for Error {}

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

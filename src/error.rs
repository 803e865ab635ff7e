// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! [`Error`] covers the ambient layers (settings file IO and parsing).
//! [`NotifyError`] names the conditions the notification presenter recovers
//! from locally; none of them is ever returned to a caller of `show`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML for [`crate::config::Config`].
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Settings could not be serialized.
    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Conditions met while presenting a notification.
///
/// These are logged and recovered from inside the presenter: a failed
/// notification must never abort the action that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The severity string did not name a known level; `info` is used instead.
    #[error("unrecognized severity `{0}`")]
    InvalidSeverity(String),

    /// The presenter has no container to render into.
    #[error("no notification container is attached")]
    MissingContainer,
}

impl NotifyError {
    /// Returns the i18n key describing this condition.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NotifyError::InvalidSeverity(_) => "notification-error-invalid-severity",
            NotifyError::MissingContainer => "notification-error-missing-container",
        }
    }
}

//! Centralized error types for the Nimbus client core.
//!
//! Provides a typed error hierarchy with user-friendly messages suitable
//! for UI display while preserving full error context for logging.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] nimbus_schedule::ScheduleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Settings(e) => e.user_message(),
            AppError::Schedule(_) => {
                "That schedule can't be edited as a daily time. Showing it as-is."
            }
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Settings load/save/validation errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings directory unavailable")]
    NoConfigDir,

    #[error("Failed to read settings: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write settings: {0}")]
    Write(#[source] std::io::Error),

    #[error("Settings file is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

impl SettingsError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SettingsError::NoConfigDir => "Unable to locate app settings. Using defaults.",
            SettingsError::Read(_) => "Unable to read settings. Using defaults.",
            SettingsError::Write(_) => "Failed to save settings. Please try again.",
            SettingsError::Parse(_) => "Settings file is malformed. Check your settings.",
            SettingsError::Serialize(_) => "Failed to save settings. Please try again.",
            SettingsError::Invalid(_) => "Invalid settings. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use nimbus_schedule::{decode_daily_time, ScheduleError};

    #[test]
    fn test_schedule_error_converts() {
        let err = decode_daily_time("0 0 */6 * * *").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidFormat(_)));
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Schedule(_)));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Settings(SettingsError::NoConfigDir);
        assert_eq!(
            app_err.user_message(),
            "Unable to locate app settings. Using defaults."
        );
    }
}

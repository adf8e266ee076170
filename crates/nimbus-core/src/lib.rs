pub mod error;
pub mod settings;

pub use error::{AppError, SettingsError};
pub use settings::{
    ChartSettings, NotificationSchedule, Settings, TemperatureUnit, ValidationResult,
};

use anyhow::Result;

/// Default log filter when `RUST_LOG` is unset: quiet dependencies,
/// debug-level detail for the nimbus crates.
const DEFAULT_LOG_FILTER: &str = "info,nimbus_core=debug,nimbus_schedule=debug,nimbus_chart=debug";

/// Initialize the client core
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("Nimbus core initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}

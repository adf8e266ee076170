//! Explicit settings container for the client.
//!
//! Loaded once at startup and passed by reference to consumers — there is
//! no ambient global. Persisted as TOML in the platform config directory
//! with an explicit save-on-change lifecycle.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use nimbus_schedule::codec::CRON_FIELDS;

/// Validation issue for one settings field.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of settings validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Summarize all errors for a single user-facing message.
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Auto,
    Celsius,
    Fahrenheit,
}

/// Padding constants fed to the chart axis scaler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Fraction of the data range added as axis headroom
    #[serde(default = "default_padding_fraction")]
    pub padding_fraction: f64,
    /// Minimum absolute headroom for near-constant series
    #[serde(default = "default_min_padding")]
    pub min_padding: f64,
}

fn default_padding_fraction() -> f64 {
    0.15
}

fn default_min_padding() -> f64 {
    2.0
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            padding_fraction: default_padding_fraction(),
            min_padding: default_min_padding(),
        }
    }
}

impl ChartSettings {
    /// Build the scaler options the chart call sites pass to
    /// [`nimbus_chart::compute_linear_scale`].
    pub fn scale_options(&self) -> nimbus_chart::ScaleOptions {
        nimbus_chart::ScaleOptions {
            padding_fraction: self.padding_fraction,
            min_padding: self.min_padding,
            chart_height_px: None,
        }
    }
}

/// One scheduled notification, as persisted by the scheduling backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSchedule {
    /// User-facing name for the list row
    pub label: String,
    /// Six-field cron expression
    pub cron: String,
    /// Disabled schedules stay in the list but don't fire
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Temperature unit preference
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    /// Forecast refresh interval in minutes
    #[serde(default = "default_refresh_minutes")]
    pub refresh_minutes: u32,

    /// Chart axis tuning
    #[serde(default)]
    pub chart: ChartSettings,

    /// Scheduled notifications
    #[serde(default)]
    pub schedules: Vec<NotificationSchedule>,
}

fn default_refresh_minutes() -> u32 {
    15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::default(),
            refresh_minutes: default_refresh_minutes(),
            chart: ChartSettings::default(),
            schedules: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from the platform config directory, creating the
    /// default file on first run.
    ///
    /// # Errors
    ///
    /// Fails when the config directory is unavailable or the file cannot
    /// be read or parsed.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(path).map_err(SettingsError::Read)?;
        let settings = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Save settings to the platform config directory.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::settings_path()?)
    }

    /// Save settings to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SettingsError::Write)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(SettingsError::Write)?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Load and validate, failing on validation errors and logging warnings.
    pub fn load_validated() -> Result<(Self, ValidationResult), SettingsError> {
        let settings = Self::load()?;
        let validation = settings.validate();

        if !validation.is_valid() {
            return Err(SettingsError::Invalid(validation.error_summary()));
        }
        for warning in &validation.warnings {
            tracing::warn!("Settings warning: {}", warning);
        }

        Ok((settings, validation))
    }

    /// Validate the settings, returning errors and warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.refresh_minutes == 0 {
            result.add_warning("refresh_minutes", "Forecast refresh disabled (0 minutes)");
        } else if self.refresh_minutes > 1440 {
            result.add_warning(
                "refresh_minutes",
                "Refresh interval is more than 24 hours",
            );
        }

        if !(self.chart.padding_fraction > 0.0 && self.chart.padding_fraction <= 1.0) {
            result.add_error(
                "chart.padding_fraction",
                "Padding fraction must be in (0, 1]",
            );
        }
        if self.chart.min_padding <= 0.0 {
            result.add_error("chart.min_padding", "Minimum padding must be positive");
        }

        for (i, schedule) in self.schedules.iter().enumerate() {
            if schedule.cron.split_whitespace().count() != CRON_FIELDS {
                result.add_error(
                    format!("schedules[{}].cron", i),
                    format!("Expected a {}-field cron expression", CRON_FIELDS),
                );
            }
            if schedule.label.trim().is_empty() {
                result.add_warning(format!("schedules[{}].label", i), "Schedule has no label");
            }
        }

        result
    }

    fn settings_path() -> Result<PathBuf, SettingsError> {
        let config_dir = dirs::config_dir()
            .ok_or(SettingsError::NoConfigDir)?
            .join("nimbus");
        Ok(config_dir.join("settings.toml"))
    }
}

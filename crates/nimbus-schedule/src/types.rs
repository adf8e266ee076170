use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A daily recurrence point picked in the notification scheduling form.
///
/// Built from two independently wrapping stepper controls; consumed to
/// build a six-field cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TimeOfDay {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Minute of hour, 0-59
    pub minute: u8,
}

impl TimeOfDay {
    /// Create a time of day, wrapping out-of-range values into range.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    /// Step the hour counter forward, wrapping 23 -> 0.
    pub fn next_hour(self) -> Self {
        Self {
            hour: (self.hour + 1) % 24,
            ..self
        }
    }

    /// Step the hour counter backward, wrapping 0 -> 23.
    pub fn prev_hour(self) -> Self {
        Self {
            hour: (self.hour + 23) % 24,
            ..self
        }
    }

    /// Step the minute counter forward, wrapping 59 -> 0.
    pub fn next_minute(self) -> Self {
        Self {
            minute: (self.minute + 1) % 60,
            ..self
        }
    }

    /// Step the minute counter backward, wrapping 0 -> 59.
    pub fn prev_minute(self) -> Self {
        Self {
            minute: (self.minute + 59) % 60,
            ..self
        }
    }

    /// Convert to a `chrono::NaiveTime` for clock widgets.
    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

/// A quick-pick schedule option offered alongside the custom time form.
///
/// The table also reverse-maps a persisted cron expression back to its
/// friendly label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronPreset {
    /// Friendly label shown in pickers and list rows
    pub label: String,
    /// Six-field cron expression; empty for the custom-time sentinel
    pub value: String,
    /// Longer description for the picker detail line
    pub description: String,
}

impl CronPreset {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: description.into(),
        }
    }

    /// The "Custom Time…" sentinel carries no cron expression of its own;
    /// callers open the time form instead of persisting its value.
    pub fn is_custom(&self) -> bool {
        self.value.is_empty()
    }
}

/// Schedule codec errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Not a fixed daily-time cron expression: {0}")]
    InvalidFormat(String),
}

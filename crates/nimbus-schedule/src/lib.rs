//! Notification schedule codec for Nimbus
//!
//! Converts between a time-of-day picked in the scheduling form and the
//! six-field cron expressions the scheduling backend persists, and renders
//! cron expressions back into human-readable labels.

pub mod codec;
pub mod presets;
pub mod types;

pub use codec::{decode_daily_time, describe, encode_daily_time};
pub use presets::presets;
pub use types::{CronPreset, ScheduleError, TimeOfDay};

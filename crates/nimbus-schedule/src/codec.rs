//! Encode/decode between [`TimeOfDay`] and six-field cron expressions,
//! and best-effort human-readable rendering.
//!
//! Only the "fixed daily time" shape (`0 <minute> <hour> * * *`) round-trips
//! through [`TimeOfDay`]; every other shape is opaque and displayed verbatim.

use crate::types::{CronPreset, ScheduleError, TimeOfDay};

/// Number of whitespace-separated fields in the cron format the
/// scheduling backend persists (second minute hour day month weekday).
pub const CRON_FIELDS: usize = 6;

/// Build the cron expression for a fixed daily time. Never fails.
pub fn encode_daily_time(time: TimeOfDay) -> String {
    format!("0 {} {} * * *", time.minute, time.hour)
}

/// Recover the time of day from a fixed-daily-time cron expression.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidFormat`] unless the expression has
/// exactly six fields with literal in-range minute and hour. Periodic
/// (`*/N`) and wildcard expressions are not representable as a single
/// daily time; callers treat the error as "not editable as a simple
/// daily time" and show the raw expression instead.
pub fn decode_daily_time(cron: &str) -> Result<TimeOfDay, ScheduleError> {
    let fields: Vec<&str> = cron.split_whitespace().collect();
    if fields.len() != CRON_FIELDS {
        tracing::debug!("Rejecting cron with {} fields: {}", fields.len(), cron);
        return Err(ScheduleError::InvalidFormat(cron.to_string()));
    }

    let minute = parse_literal(fields[1]);
    let hour = parse_literal(fields[2]);
    match (hour, minute) {
        (Some(hour), Some(minute)) if hour < 24 && minute < 60 => {
            Ok(TimeOfDay { hour, minute })
        }
        _ => Err(ScheduleError::InvalidFormat(cron.to_string())),
    }
}

/// Parse a cron field as a plain integer literal, rejecting wildcards
/// and step expressions.
fn parse_literal(field: &str) -> Option<u8> {
    if field.contains('*') || field.contains('/') {
        return None;
    }
    field.parse().ok()
}

/// Render a cron expression as a human-readable label.
///
/// Precedence: exact preset match first, then "Daily at H:MM AM/PM" for
/// fixed daily times, otherwise the raw expression verbatim. Unsupported
/// shapes (weekly, monthly, steps) degrade to the raw string rather than
/// failing.
pub fn describe(cron: &str, presets: &[CronPreset]) -> String {
    if let Some(preset) = presets
        .iter()
        .filter(|p| !p.is_custom())
        .find(|p| p.value == cron)
    {
        return preset.label.clone();
    }

    let fields: Vec<&str> = cron.split_whitespace().collect();
    if fields.len() != CRON_FIELDS {
        return cron.to_string();
    }

    let (day_of_month, month, day_of_week) = (fields[3], fields[4], fields[5]);
    if day_of_month != "*" || month != "*" || day_of_week != "*" {
        return cron.to_string();
    }

    match (parse_literal(fields[2]), parse_literal(fields[1])) {
        (Some(hour), Some(minute)) => {
            let hour_12 = match hour {
                0 => 12,
                1..=12 => hour,
                _ => hour - 12,
            };
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            format!("Daily at {}:{:02} {}", hour_12, minute, meridiem)
        }
        _ => cron.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::presets;

    #[test]
    fn test_encode_daily_time() {
        assert_eq!(encode_daily_time(TimeOfDay::new(7, 0)), "0 0 7 * * *");
        assert_eq!(encode_daily_time(TimeOfDay::new(18, 30)), "0 30 18 * * *");
        assert_eq!(encode_daily_time(TimeOfDay::new(0, 5)), "0 5 0 * * *");
    }

    #[test]
    fn test_round_trip_all_times() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let time = TimeOfDay { hour, minute };
                assert_eq!(decode_daily_time(&encode_daily_time(time)), Ok(time));
            }
        }
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        assert!(decode_daily_time("0 30 7 * *").is_err());
        assert!(decode_daily_time("0 30 7 * * * *").is_err());
        assert!(decode_daily_time("").is_err());
    }

    #[test]
    fn test_decode_rejects_step_expression() {
        assert!(decode_daily_time("0 0 */6 * * *").is_err());
        assert!(decode_daily_time("0 */15 8 * * *").is_err());
    }

    #[test]
    fn test_decode_rejects_wildcard_fields() {
        assert!(decode_daily_time("0 * 7 * * *").is_err());
        assert!(decode_daily_time("0 30 * * * *").is_err());
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        assert!(decode_daily_time("0 75 7 * * *").is_err());
        assert!(decode_daily_time("0 30 24 * * *").is_err());
    }

    #[test]
    fn test_decode_rejects_garbage_literals() {
        assert!(decode_daily_time("0 aa 7 * * *").is_err());
        assert!(decode_daily_time("0 -5 7 * * *").is_err());
    }

    #[test]
    fn test_describe_morning() {
        let p = presets();
        assert_eq!(
            describe(&encode_daily_time(TimeOfDay::new(7, 0)), &p),
            "7:00 AM Daily" // preset wins over the generic formatter
        );
        assert_eq!(
            describe(&encode_daily_time(TimeOfDay::new(9, 15)), &p),
            "Daily at 9:15 AM"
        );
    }

    #[test]
    fn test_describe_evening() {
        assert_eq!(
            describe(&encode_daily_time(TimeOfDay::new(18, 30)), &presets()),
            "Daily at 6:30 PM"
        );
    }

    #[test]
    fn test_describe_midnight_and_noon() {
        let p = presets();
        assert_eq!(
            describe(&encode_daily_time(TimeOfDay::new(0, 0)), &p),
            "Daily at 12:00 AM"
        );
        assert_eq!(
            describe(&encode_daily_time(TimeOfDay::new(12, 0)), &p),
            "Daily at 12:00 PM"
        );
    }

    #[test]
    fn test_describe_preset_lookup_precedence() {
        assert_eq!(describe("0 0 6 * * *", &presets()), "6:00 AM Daily");
        assert_eq!(describe("0 0 */12 * * *", &presets()), "Every 12 Hours");
    }

    #[test]
    fn test_describe_falls_back_to_raw() {
        let p = presets();
        // Weekly, monthly and unknown step shapes stay verbatim
        assert_eq!(describe("0 0 9 * * 1", &p), "0 0 9 * * 1");
        assert_eq!(describe("0 0 9 1 * *", &p), "0 0 9 1 * *");
        assert_eq!(describe("0 0 */3 * * *", &p), "0 0 */3 * * *");
        assert_eq!(describe("not a cron", &p), "not a cron");
    }

    #[test]
    fn test_describe_skips_custom_sentinel() {
        // An empty cron string must not match the sentinel's empty value
        assert_eq!(describe("", &presets()), "");
    }
}

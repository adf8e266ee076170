use crate::types::CronPreset;

/// The fixed, ordered quick-pick table for notification schedules.
///
/// The first entry is the "Custom Time…" sentinel; it has no cron value
/// and must be special-cased by callers (never passed to [`describe`]).
///
/// [`describe`]: crate::codec::describe
pub fn presets() -> Vec<CronPreset> {
    vec![
        CronPreset::new("Custom Time…", "", "Pick an exact time of day"),
        CronPreset::new("6:00 AM Daily", "0 0 6 * * *", "Every morning at 6:00 AM"),
        CronPreset::new("7:00 AM Daily", "0 0 7 * * *", "Every morning at 7:00 AM"),
        CronPreset::new("8:00 AM Daily", "0 0 8 * * *", "Every morning at 8:00 AM"),
        CronPreset::new("6:00 PM Daily", "0 0 18 * * *", "Every evening at 6:00 PM"),
        CronPreset::new("Every 6 Hours", "0 0 */6 * * *", "Four times a day"),
        CronPreset::new("Every 12 Hours", "0 0 */12 * * *", "Twice a day"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_sentinel_is_first() {
        let table = presets();
        assert!(table[0].is_custom());
        assert_eq!(table[0].label, "Custom Time…");
    }

    #[test]
    fn test_non_sentinel_presets_have_six_fields() {
        for preset in presets().iter().filter(|p| !p.is_custom()) {
            assert_eq!(
                preset.value.split_whitespace().count(),
                6,
                "preset {} is not six-field",
                preset.label
            );
        }
    }

    #[test]
    fn test_table_order_is_stable() {
        let labels: Vec<_> = presets().into_iter().map(|p| p.label).collect();
        assert_eq!(
            labels,
            vec![
                "Custom Time…",
                "6:00 AM Daily",
                "7:00 AM Daily",
                "8:00 AM Daily",
                "6:00 PM Daily",
                "Every 6 Hours",
                "Every 12 Hours",
            ]
        );
    }
}

use crate::domain::models::{LayoutConfig, MinuteOfDay};
use chrono::NaiveDate;

/// Vertical offset of the "now" marker for the viewed day, or `None` when
/// the viewed day is not today. Recomputed on the caller's periodic tick;
/// has no effect on the scheduling data itself.
pub fn cursor_offset(
    day: NaiveDate,
    today: NaiveDate,
    now_minute: MinuteOfDay,
    config: &LayoutConfig,
) -> Option<f64> {
    if day != today {
        return None;
    }
    Some(f64::from(now_minute) * config.px_per_minute())
}

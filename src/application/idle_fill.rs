use crate::domain::models::{ActivitySegment, MinuteOfDay, OvernightPart, SegmentKind};

const IDLE_TITLE: &str = "Idle Time";

/// Insert synthetic "Idle Time" segments into the gaps of a day's sorted
/// activity list.
///
/// Idle synthesis is a live-observation feature: for any day other than
/// today the activities pass through untouched. `idle_anchor` is the minute
/// at which continuous idle tracking began. Gap rules, in order:
///
/// 1. no activities at all: one idle block from the anchor to now, even if
///    shorter than the threshold;
/// 2. anchor before the first activity: a leading idle block;
/// 3. a gap between adjacent activities strictly greater than the threshold:
///    an idle block spanning it (smaller gaps are transition noise);
/// 4. now strictly more than the threshold past the last activity: a
///    trailing idle block up to now.
///
/// The returned list is the input plus any idle blocks, stably sorted by
/// start minute.
pub fn synthesize_idle(
    sorted_activities: Vec<ActivitySegment>,
    is_today: bool,
    idle_anchor: Option<MinuteOfDay>,
    now_minute: MinuteOfDay,
    idle_threshold_minutes: u32,
) -> Vec<ActivitySegment> {
    if !is_today {
        return sorted_activities;
    }

    if sorted_activities.is_empty() {
        return match idle_anchor {
            Some(anchor) => vec![idle_segment(anchor, now_minute.max(anchor))],
            None => Vec::new(),
        };
    }

    let threshold = i64::from(idle_threshold_minutes);
    let mut idles = Vec::new();

    if let Some(anchor) = idle_anchor {
        let first_start = sorted_activities[0].start_minute;
        if anchor < first_start {
            idles.push(idle_segment(anchor, first_start));
        }
    }

    for pair in sorted_activities.windows(2) {
        let gap_start = pair[0].end_minute;
        let gap_end = pair[1].start_minute;
        if i64::from(gap_end) - i64::from(gap_start) > threshold {
            idles.push(idle_segment(gap_start, gap_end));
        }
    }

    if let Some(last) = sorted_activities.last() {
        if i64::from(now_minute) - i64::from(last.end_minute) > threshold {
            idles.push(idle_segment(last.end_minute, now_minute));
        }
    }

    let mut merged = sorted_activities;
    merged.extend(idles);
    merged.sort_by_key(|segment| segment.start_minute);
    merged
}

fn idle_segment(start_minute: MinuteOfDay, end_minute: MinuteOfDay) -> ActivitySegment {
    ActivitySegment {
        id: format!("idle:{start_minute}-{end_minute}"),
        title: IDLE_TITLE.to_string(),
        start_minute,
        end_minute,
        kind: SegmentKind::Idle,
        description: None,
        source_routine_id: None,
        overnight_part: OvernightPart::None,
    }
}

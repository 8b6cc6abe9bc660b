use crate::application::expansion::expand_routine;
use crate::domain::models::{
    ActivitySegment, FocusLogEntry, MinuteOfDay, OvernightPart, RoutineDefinition, SegmentKind,
};
use chrono::{DateTime, NaiveDate, TimeZone, Timelike};

const FALLBACK_FOCUS_TITLE: &str = "Focus Session";

/// Merge the day's focus-log entries with every active routine's expanded
/// segments into one unsorted list: focus segments first, then routine
/// segments, each group in input order. Ties are broken later by a stable
/// sort.
pub fn collect_day<Tz: TimeZone>(
    day: NaiveDate,
    zone: &Tz,
    focus_logs: &[FocusLogEntry],
    routines: &[RoutineDefinition],
) -> Vec<ActivitySegment> {
    let mut segments = Vec::new();

    for log in focus_logs {
        // A session that never completed contributes nothing to this day.
        let Some(ended_at) = log.ended_at else {
            continue;
        };
        let started_local = log.started_at.with_timezone(zone);
        if started_local.date_naive() != day {
            continue;
        }

        let start_minute = minute_of_day(&started_local);
        let end_minute = minute_of_day(&ended_at.with_timezone(zone)).max(start_minute);

        segments.push(ActivitySegment {
            id: log.id.clone(),
            title: focus_title(log),
            start_minute,
            end_minute,
            kind: SegmentKind::Focus,
            description: log.description.clone(),
            source_routine_id: None,
            overnight_part: OvernightPart::None,
        });
    }

    for routine in routines {
        if !routine.active {
            continue;
        }
        segments.extend(expand_routine(routine));
    }

    segments
}

fn minute_of_day<Tz: TimeZone>(value: &DateTime<Tz>) -> MinuteOfDay {
    value.hour() * 60 + value.minute()
}

fn focus_title(log: &FocusLogEntry) -> String {
    [
        log.title.as_deref(),
        log.linked_task_title.as_deref(),
        log.description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|value| !value.is_empty())
    .unwrap_or(FALLBACK_FOCUS_TITLE)
    .to_string()
}

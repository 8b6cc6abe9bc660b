use crate::domain::clock::{END_OF_DAY_MINUTE, MINUTES_PER_DAY};
use crate::domain::models::{ActivitySegment, OvernightPart, RoutineDefinition, SegmentKind};

/// Expand one routine into one or two day-bounded segments.
///
/// A routine whose duration pushes past midnight is split into a "start"
/// part ending at minute 1439 and an "end" part beginning at minute 0; the
/// pair covers the requested duration up to the one-minute rounding at the
/// day boundary. Expansion is applied identically for every requested day;
/// the per-weekday schedule on the definition is not consulted.
pub fn expand_routine(routine: &RoutineDefinition) -> Vec<ActivitySegment> {
    let start = routine.start_minute % MINUTES_PER_DAY;
    let duration = routine.duration_minutes.max(0);

    if duration == 0 {
        // Zero-length in time; the layout stage floors it to a visible
        // height instead of dropping it.
        return vec![part(routine, routine.id.clone(), start, start, OvernightPart::None)];
    }

    let wrapped_end = ((i64::from(start) + duration) % i64::from(MINUTES_PER_DAY)) as u32;
    if wrapped_end > start {
        return vec![part(
            routine,
            routine.id.clone(),
            start,
            wrapped_end,
            OvernightPart::None,
        )];
    }

    vec![
        part(
            routine,
            format!("{}:overnight-start", routine.id),
            start,
            END_OF_DAY_MINUTE,
            OvernightPart::Start,
        ),
        part(
            routine,
            format!("{}:overnight-end", routine.id),
            0,
            wrapped_end.saturating_sub(1),
            OvernightPart::End,
        ),
    ]
}

fn part(
    routine: &RoutineDefinition,
    id: String,
    start_minute: u32,
    end_minute: u32,
    overnight_part: OvernightPart,
) -> ActivitySegment {
    ActivitySegment {
        id,
        title: routine.name.clone(),
        start_minute,
        end_minute,
        kind: SegmentKind::Routine,
        description: routine.description.clone(),
        source_routine_id: Some(routine.id.clone()),
        overnight_part,
    }
}

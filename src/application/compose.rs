use crate::application::collection::collect_day;
use crate::application::cursor::cursor_offset;
use crate::application::idle_fill::synthesize_idle;
use crate::application::layout::layout_segments;
use crate::domain::models::{
    ComposedTimeline, FocusLogEntry, MinuteOfDay, RoutineDefinition, TimelineConfig,
};
use chrono::{NaiveDate, TimeZone};

/// Explicit inputs for one timeline computation. `today` and `now_minute`
/// come from the caller, never from an ambient clock, so composition is
/// deterministic.
pub struct TimelineQuery<'a, Tz: TimeZone> {
    /// The day being viewed.
    pub day: NaiveDate,
    /// The current calendar day; idle synthesis and the live cursor apply
    /// only when it equals `day`.
    pub today: NaiveDate,
    pub now_minute: MinuteOfDay,
    /// Minute at which continuous idle tracking began, if any.
    pub idle_anchor: Option<MinuteOfDay>,
    /// Zone used to project focus-log instants onto local calendar days.
    pub zone: &'a Tz,
}

/// The whole pipeline in one pure call: collect the day's segments, sort,
/// fill idle gaps, lay out, position the live cursor.
pub fn compose_timeline<Tz: TimeZone>(
    query: &TimelineQuery<'_, Tz>,
    focus_logs: &[FocusLogEntry],
    routines: &[RoutineDefinition],
    config: &TimelineConfig,
) -> ComposedTimeline {
    let mut activities = collect_day(query.day, query.zone, focus_logs, routines);
    activities.sort_by_key(|segment| segment.start_minute);

    let is_today = query.day == query.today;
    let segments = synthesize_idle(
        activities,
        is_today,
        query.idle_anchor,
        query.now_minute,
        config.idle_threshold_minutes,
    );

    ComposedTimeline {
        segments: layout_segments(&segments, &config.layout),
        cursor_offset: cursor_offset(query.day, query.today, query.now_minute, &config.layout),
    }
}

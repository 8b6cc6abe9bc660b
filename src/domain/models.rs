use crate::domain::clock::{self, MINUTES_PER_DAY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minutes since local midnight, valid range `[0, 1440)`.
pub type MinuteOfDay = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Focus,
    Routine,
    Idle,
}

/// Which half of a midnight-crossing routine a segment represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OvernightPart {
    None,
    Start,
    End,
}

/// One time-bounded block on the day timeline. Derived fresh on every
/// computation; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivitySegment {
    pub id: String,
    pub title: String,
    pub start_minute: MinuteOfDay,
    pub end_minute: MinuteOfDay,
    pub kind: SegmentKind,
    pub description: Option<String>,
    pub source_routine_id: Option<String>,
    pub overnight_part: OvernightPart,
}

impl ActivitySegment {
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.id, "segment.id")?;
        validate_non_empty(&self.title, "segment.title")?;
        if self.start_minute >= MINUTES_PER_DAY {
            return Err("segment.start_minute must be < 1440".to_string());
        }
        if self.end_minute >= MINUTES_PER_DAY {
            return Err("segment.end_minute must be < 1440".to_string());
        }
        if self.end_minute < self.start_minute {
            return Err("segment.end_minute must be >= segment.start_minute".to_string());
        }
        Ok(())
    }
}

/// A recurring routine as supplied by the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutineDefinition {
    pub id: String,
    pub name: String,
    pub start_minute: MinuteOfDay,
    /// May be zero or negative in stored data; expansion clamps to zero.
    pub duration_minutes: i64,
    pub description: Option<String>,
    pub active: bool,
    /// Bit per weekday, Sunday = bit 0. Stored and round-tripped but never
    /// consulted by expansion: every active routine is projected onto every
    /// requested day.
    pub weekday_mask: u8,
}

impl RoutineDefinition {
    /// Build a definition from the storage collaborator's row shape, where
    /// the start time is a 24-hour clock string. An unparseable start time
    /// degrades to midnight rather than failing the whole day.
    pub fn from_storage(
        id: String,
        name: String,
        start_clock: &str,
        duration_minutes: i64,
        description: Option<String>,
        active: bool,
        weekday_mask: u8,
    ) -> Self {
        Self {
            id,
            name,
            start_minute: clock::parse_clock_or_midnight(start_clock),
            duration_minutes,
            description,
            active,
            weekday_mask,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.id, "routine.id")?;
        validate_non_empty(&self.name, "routine.name")?;
        if self.start_minute >= MINUTES_PER_DAY {
            return Err("routine.start_minute must be < 1440".to_string());
        }
        Ok(())
    }
}

/// A logged focus session with absolute timestamps, projected onto the
/// viewed day by local calendar-date match of `started_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocusLogEntry {
    pub id: String,
    pub title: Option<String>,
    pub started_at: DateTime<Utc>,
    /// `None` means the session never completed; such entries contribute no
    /// segment.
    pub ended_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub linked_task_title: Option<String>,
}

impl FocusLogEntry {
    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.id, "focus_log.id")?;
        if let Some(ended_at) = self.ended_at {
            if ended_at < self.started_at {
                return Err("focus_log.ended_at must be >= focus_log.started_at".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Strictly minute-proportional placement. Segments whose time ranges
    /// truly overlap will render overlapping boxes; not corrected.
    Proportional,
    /// Running-cursor stacking: collision-free, not strictly proportional
    /// on dense days.
    Stacked,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Vertical units for the full 24-hour timeline.
    pub timeline_height: f64,
    pub min_block_height: f64,
    pub min_gap: f64,
    pub mode: LayoutMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            timeline_height: 1920.0,
            min_block_height: 40.0,
            min_gap: 8.0,
            mode: LayoutMode::Stacked,
        }
    }
}

impl LayoutConfig {
    pub fn px_per_minute(&self) -> f64 {
        self.timeline_height / f64::from(MINUTES_PER_DAY)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.timeline_height > 0.0) {
            return Err("layout.timeline_height must be > 0".to_string());
        }
        if !(self.min_block_height > 0.0) {
            return Err("layout.min_block_height must be > 0".to_string());
        }
        if self.min_gap < 0.0 {
            return Err("layout.min_gap must be >= 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineConfig {
    pub idle_threshold_minutes: u32,
    pub layout: LayoutConfig,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            idle_threshold_minutes: 15,
            layout: LayoutConfig::default(),
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()
    }
}

/// A segment with its assigned vertical placement, in abstract layout units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaidOutSegment {
    #[serde(flatten)]
    pub segment: ActivitySegment,
    pub top: f64,
    pub height: f64,
}

/// The render contract: ordered segments plus the live-cursor offset
/// (`None` for any day other than today).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposedTimeline {
    pub segments: Vec<LaidOutSegment>,
    pub cursor_offset: Option<f64>,
}

fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field_name} must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value)
            .expect("valid datetime")
            .with_timezone(&Utc)
    }

    fn sample_segment() -> ActivitySegment {
        ActivitySegment {
            id: "seg-1".to_string(),
            title: "Deep work".to_string(),
            start_minute: 540,
            end_minute: 600,
            kind: SegmentKind::Focus,
            description: Some("sprint planning notes".to_string()),
            source_routine_id: None,
            overnight_part: OvernightPart::None,
        }
    }

    fn sample_routine() -> RoutineDefinition {
        RoutineDefinition {
            id: "rtn-1".to_string(),
            name: "Evening reading".to_string(),
            start_minute: 1290,
            duration_minutes: 45,
            description: None,
            active: true,
            weekday_mask: 0b111_1111,
        }
    }

    fn sample_focus_log() -> FocusLogEntry {
        FocusLogEntry {
            id: "log-1".to_string(),
            title: Some("Write report".to_string()),
            started_at: fixed_time("2026-02-16T09:00:00Z"),
            ended_at: Some(fixed_time("2026-02-16T10:00:00Z")),
            description: None,
            linked_task_title: Some("Q1 report".to_string()),
        }
    }

    #[test]
    fn segment_validate_accepts_valid_segment() {
        assert!(sample_segment().validate().is_ok());
    }

    #[test]
    fn segment_validate_rejects_out_of_range_minutes() {
        let mut segment = sample_segment();
        segment.end_minute = 1440;
        assert!(segment.validate().is_err());

        let mut segment = sample_segment();
        segment.start_minute = 700;
        assert!(segment.validate().is_err());
    }

    #[test]
    fn focus_log_validate_rejects_reversed_instants() {
        let mut log = sample_focus_log();
        log.ended_at = Some(fixed_time("2026-02-16T08:59:00Z"));
        assert!(log.validate().is_err());
    }

    #[test]
    fn routine_from_storage_parses_clock_and_degrades_to_midnight() {
        let routine = RoutineDefinition::from_storage(
            "rtn-2".to_string(),
            "Standup".to_string(),
            "09:15",
            15,
            None,
            true,
            0b011_1110,
        );
        assert_eq!(routine.start_minute, 555);

        let broken = RoutineDefinition::from_storage(
            "rtn-3".to_string(),
            "Broken".to_string(),
            "whenever",
            15,
            None,
            true,
            0,
        );
        assert_eq!(broken.start_minute, 0);
    }

    #[test]
    fn layout_config_defaults_and_scaling() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.px_per_minute() - 1920.0 / 1440.0).abs() < 1e-9);

        let mut config = config;
        config.timeline_height = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn domain_models_support_serde_roundtrip() {
        let segment = sample_segment();
        let routine = sample_routine();
        let log = sample_focus_log();

        let segment_roundtrip: ActivitySegment =
            serde_json::from_str(&serde_json::to_string(&segment).expect("serialize segment"))
                .expect("deserialize segment");
        let routine_roundtrip: RoutineDefinition =
            serde_json::from_str(&serde_json::to_string(&routine).expect("serialize routine"))
                .expect("deserialize routine");
        let log_roundtrip: FocusLogEntry =
            serde_json::from_str(&serde_json::to_string(&log).expect("serialize log"))
                .expect("deserialize log");

        assert_eq!(segment_roundtrip, segment);
        assert_eq!(routine_roundtrip, routine);
        assert_eq!(log_roundtrip, log);
    }
}

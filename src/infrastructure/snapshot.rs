use crate::domain::models::{FocusLogEntry, RoutineDefinition};
use crate::infrastructure::error::TimelineError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::time::{sleep, Duration};

/// Complete, already-fetched inputs for a single timeline computation.
/// The engine never writes back; storage owns these records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySnapshot {
    pub focus_logs: Vec<FocusLogEntry>,
    pub routines: Vec<RoutineDefinition>,
}

/// Storage collaborator seam: supplies focus logs and routine definitions
/// for a given day.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_day(&self, day: NaiveDate) -> Result<DaySnapshot, TimelineError>;
}

#[derive(Debug, Default)]
pub struct InMemorySnapshotSource {
    days: Mutex<HashMap<NaiveDate, DaySnapshot>>,
    fetch_delay: Option<Duration>,
}

impl InMemorySnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    pub fn insert_day(&self, day: NaiveDate, snapshot: DaySnapshot) -> Result<(), TimelineError> {
        let mut days = self
            .days
            .lock()
            .map_err(|error| TimelineError::Snapshot(format!("snapshot lock poisoned: {error}")))?;
        days.insert(day, snapshot);
        Ok(())
    }
}

#[async_trait]
impl SnapshotSource for InMemorySnapshotSource {
    async fn fetch_day(&self, day: NaiveDate) -> Result<DaySnapshot, TimelineError> {
        if let Some(delay) = self.fetch_delay {
            sleep(delay).await;
        }
        let days = self
            .days
            .lock()
            .map_err(|error| TimelineError::Snapshot(format!("snapshot lock poisoned: {error}")))?;
        Ok(days.get(&day).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 16).expect("valid date")
    }

    fn sample_snapshot() -> DaySnapshot {
        DaySnapshot {
            focus_logs: Vec::new(),
            routines: vec![RoutineDefinition {
                id: "rtn-1".to_string(),
                name: "Morning review".to_string(),
                start_minute: 540,
                duration_minutes: 30,
                description: None,
                active: true,
                weekday_mask: 0b0111110,
            }],
        }
    }

    #[tokio::test]
    async fn fetch_returns_stored_snapshot() {
        let source = InMemorySnapshotSource::new();
        source
            .insert_day(sample_day(), sample_snapshot())
            .expect("insert snapshot");

        let fetched = source.fetch_day(sample_day()).await.expect("fetch day");
        assert_eq!(fetched, sample_snapshot());
    }

    #[tokio::test]
    async fn fetch_of_unknown_day_yields_empty_snapshot() {
        let source = InMemorySnapshotSource::new();
        let fetched = source.fetch_day(sample_day()).await.expect("fetch day");
        assert!(fetched.focus_logs.is_empty());
        assert!(fetched.routines.is_empty());
    }
}

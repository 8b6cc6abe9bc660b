use crate::infrastructure::error::TimelineError;
use crate::infrastructure::snapshot::{DaySnapshot, SnapshotSource};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Coordinates day navigation against an async snapshot source.
///
/// Every fetch is tagged with the view generation current at dispatch time;
/// a result whose generation no longer matches is discarded, so a slow
/// fetch for one day can never overwrite a faster-arriving render for the
/// day the user has since navigated to.
pub struct ViewSession<S: SnapshotSource> {
    source: Arc<S>,
    generation: AtomicU64,
}

impl<S: SnapshotSource> ViewSession<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
        }
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Advance the view generation, invalidating any fetch still in flight
    /// for the previously viewed day.
    pub fn navigate(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Fetch the snapshot for `day`. Returns `Ok(None)` when another
    /// navigation happened while the fetch was in flight.
    pub async fn load_day(&self, day: NaiveDate) -> Result<Option<DaySnapshot>, TimelineError> {
        let token = self.navigate();
        let snapshot = self.source.fetch_day(day).await?;
        if self.generation.load(Ordering::SeqCst) != token {
            log::debug!("discarding stale snapshot for {day}: view has moved on");
            return Ok(None);
        }
        Ok(Some(snapshot))
    }
}

/// Scoped handle for the periodic live-cursor tick. Dropping the guard
/// cancels the tick on every exit path, so timers never leak across day
/// navigations or screen dismissals.
pub struct TickGuard {
    handle: JoinHandle<()>,
}

impl TickGuard {
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn a periodic tick (the live cursor runs on a one-second cadence) and
/// return its guard. Must be called from within a tokio runtime.
pub fn start_ticker<F>(period: Duration, mut on_tick: F) -> TickGuard
where
    F: FnMut() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // interval fires immediately once; skip that so the first call back
        // lands one full period in.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            on_tick();
        }
    });
    TickGuard { handle }
}

//! Daily activity timeline compositor for the WorkSight productivity app.
//!
//! Takes a snapshot of a user's focus logs and recurring routine
//! definitions for one calendar day and produces a chronologically ordered,
//! collision-free, render-ready schedule: routines crossing midnight are
//! split into two day-bounded parts, untracked gaps above a threshold
//! become synthetic "Idle Time" blocks (today only), and every block gets a
//! vertical position in abstract layout units. The whole pipeline is a pure
//! function of explicit inputs — the viewed day, "today", "now", the idle
//! anchor and the data snapshot — so recomputation is idempotent and
//! deterministic in tests.
//!
//! Fetch coordination (view-generation tokens for day navigation) and the
//! scoped one-second live-cursor tick live in
//! [`application::view_session`]; the storage collaborator is abstracted
//! behind [`infrastructure::snapshot::SnapshotSource`].

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::compose::{compose_timeline, TimelineQuery};
pub use application::cursor::cursor_offset;
pub use application::view_session::{start_ticker, TickGuard, ViewSession};
pub use domain::clock::{
    add_minutes, diff_minutes, format_minutes, parse_clock, parse_clock_or_midnight,
    END_OF_DAY_MINUTE, MINUTES_PER_DAY,
};
pub use domain::models::{
    ActivitySegment, ComposedTimeline, FocusLogEntry, LaidOutSegment, LayoutConfig, LayoutMode,
    MinuteOfDay, OvernightPart, RoutineDefinition, SegmentKind, TimelineConfig,
};
pub use infrastructure::error::TimelineError;
pub use infrastructure::snapshot::{DaySnapshot, InMemorySnapshotSource, SnapshotSource};

//! Preventive-maintenance rotation scheduler.
//!
//! This crate provides:
//! - YAML `PmRotation` catalogs with validation and "did you mean" suggestions
//! - Filesystem loader with hot-reload via `notify` watcher
//! - ISO-week to 4-week cycle resolution
//! - Schedule lookup with dangling-reference reporting
//! - Today, week and date-range views

pub mod catalog;
pub mod clock;
pub mod loader;
pub mod lookup;
pub mod schema;
pub mod validation;
pub mod view;
pub mod week;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::{CycleCatalog, ReferenceCatalog, Rotation, ScheduleSlot, WeeklySchedule};
pub use clock::{Clock, FixedClock, SystemClock};
pub use loader::{CatalogError, CatalogStore};
pub use lookup::{lookup, DanglingReference, DaySchedule, MissingRef, ResolvedAssignment};
pub use view::{range_view, schedule_for_date, today_view, week_view, DayPlan, WeekView};
pub use week::{resolve, weekday_name_of, WeekCycle};

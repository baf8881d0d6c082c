//! Schedule lookup: (cycle week, weekday) → ordered (asset, team) assignments.
//!
//! Slots are resolved against the [`ReferenceCatalog`] in their original
//! order. A slot whose asset or team does not resolve is skipped, logged at
//! `warn`, and reported in [`DaySchedule::skipped`]; it never fails the call.
//! Nothing is reordered or deduplicated.

mod diagnostics;


pub use self::diagnostics::{DanglingReference, MissingRef};

use opswall_core::{Asset, CycleWeek, OpsError, Team, TeamId, Weekday};
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{CycleCatalog, ReferenceCatalog, Rotation};

/// One resolved slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAssignment<'a> {
    pub asset: &'a Asset,
    pub team_id: TeamId,
    pub team: &'a Team,
}

/// Result of a lookup for a single day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DaySchedule<'a> {
    pub assignments: Vec<ResolvedAssignment<'a>>,
    pub skipped: Vec<DanglingReference>,
}

impl<'a> DaySchedule<'a> {
    /// No assignments and nothing skipped (weekends, unknown day names).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }
}

/// Look up the assignments for a numeric week-in-cycle and a weekday name.
///
/// - `week_in_cycle` outside `1..=4` → `OpsError::Configuration`.
/// - `weekday_name` not one of `SENIN..JUMAT` (weekends included) → empty.
pub fn lookup<'a>(
    reference: &'a ReferenceCatalog,
    cycle: &'a CycleCatalog,
    week_in_cycle: u32,
    weekday_name: &str,
) -> opswall_core::Result<DaySchedule<'a>> {
    let week = cycle_week(week_in_cycle)?;

    match Weekday::from_name(weekday_name) {
        Some(day) => Ok(lookup_day(reference, cycle, week, day)),
        None => {
            debug!(weekday = %weekday_name, "no schedule for non-working day name");
            Ok(DaySchedule::empty())
        }
    }
}

fn cycle_week(week_in_cycle: u32) -> opswall_core::Result<CycleWeek> {
    CycleWeek::from_number(week_in_cycle).ok_or_else(|| {
        OpsError::Configuration(format!(
            "cycle catalog has no week{}, expected week1..week4",
            week_in_cycle
        ))
    })
}

/// Typed lookup once the cycle week and weekday are known.
pub fn lookup_day<'a>(
    reference: &'a ReferenceCatalog,
    cycle: &'a CycleCatalog,
    week: CycleWeek,
    day: Weekday,
) -> DaySchedule<'a> {
    let slots = cycle.week(week).slots(day);
    let mut schedule = DaySchedule {
        assignments: Vec::with_capacity(slots.len()),
        skipped: Vec::new(),
    };

    for (position, slot) in slots.iter().enumerate() {
        let asset = reference.asset(&slot.asset_id);
        let team = reference.team(slot.team_id);

        match (asset, team) {
            (Some(asset), Some(team)) => schedule.assignments.push(ResolvedAssignment {
                asset,
                team_id: slot.team_id,
                team,
            }),
            (asset, team) => {
                let Some(missing) = MissingRef::from_flags(asset.is_none(), team.is_none()) else {
                    continue;
                };
                let dangling = DanglingReference {
                    cycle: week,
                    weekday: day,
                    position,
                    slot: slot.clone(),
                    missing,
                };
                warn!(
                    cycle = %week,
                    weekday = %day,
                    position,
                    asset_id = %slot.asset_id,
                    team_id = slot.team_id,
                    missing = %missing,
                    "skipping schedule slot with dangling reference"
                );
                schedule.skipped.push(dangling);
            }
        }
    }

    schedule
}

impl Rotation {
    /// [`lookup`] against this rotation's own catalogs.
    ///
    /// A disabled rotation still checks `week_in_cycle` but schedules nothing.
    pub fn lookup(&self, week_in_cycle: u32, weekday_name: &str) -> opswall_core::Result<DaySchedule<'_>> {
        if !self.is_enabled() {
            cycle_week(week_in_cycle)?;
            return Ok(DaySchedule::empty());
        }
        lookup(&self.reference, &self.cycle, week_in_cycle, weekday_name)
    }

    /// [`lookup_day`] against this rotation; empty when the rotation is disabled.
    pub fn day_schedule(&self, week: CycleWeek, day: Weekday) -> DaySchedule<'_> {
        if !self.is_enabled() {
            return DaySchedule::empty();
        }
        lookup_day(&self.reference, &self.cycle, week, day)
    }
}

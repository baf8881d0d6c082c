//! Date-driven views over a [`Rotation`]: today, a whole week, a date range.

use chrono::{Duration, NaiveDate};
use opswall_core::{OpsError, Weekday};
use serde::Serialize;

use crate::catalog::Rotation;
use crate::clock::Clock;
use crate::lookup::DaySchedule;
use crate::week::{self, WeekCycle};

/// Longest span [`range_view`] will expand.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Schedule for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan<'a> {
    pub date: NaiveDate,
    /// `None` on Saturday and Sunday.
    pub weekday: Option<Weekday>,
    pub week: WeekCycle,
    pub schedule: DaySchedule<'a>,
}

impl DayPlan<'_> {
    pub fn is_working_day(&self) -> bool {
        self.weekday.is_some()
    }
}

/// The five working days of one ISO week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekView<'a> {
    pub week: WeekCycle,
    pub days: Vec<DayPlan<'a>>,
}

/// Resolve a single date. Weekends and disabled rotations yield an empty schedule.
pub fn schedule_for_date(rotation: &Rotation, date: NaiveDate) -> DayPlan<'_> {
    let week = week::resolve(date);
    let weekday = week::weekday_name_of(date);
    let schedule = match weekday {
        Some(day) => rotation.day_schedule(week.cycle(), day),
        None => DaySchedule::empty(),
    };
    DayPlan {
        date,
        weekday,
        week,
        schedule,
    }
}

/// What is due on the clock's current date.
pub fn today_view<'a>(rotation: &'a Rotation, clock: &dyn Clock) -> DayPlan<'a> {
    schedule_for_date(rotation, clock.today())
}

/// Monday to Friday of the ISO week containing `date`.
pub fn week_view(rotation: &Rotation, date: NaiveDate) -> WeekView<'_> {
    let week = week::resolve(date);
    let days = week
        .working_days()
        .map(|(day, date)| DayPlan {
            date,
            weekday: Some(day),
            week,
            schedule: rotation.day_schedule(week.cycle(), day),
        })
        .collect();
    WeekView { week, days }
}

/// Every date from `from` to `to` inclusive, weekends included.
///
/// An inverted range is empty. A span longer than [`MAX_RANGE_DAYS`] is
/// rejected with `OpsError::Configuration`.
pub fn range_view(
    rotation: &Rotation,
    from: NaiveDate,
    to: NaiveDate,
) -> opswall_core::Result<Vec<DayPlan<'_>>> {
    if to < from {
        return Ok(Vec::new());
    }
    let span = (to - from).num_days() + 1;
    if span > MAX_RANGE_DAYS {
        return Err(OpsError::Configuration(format!(
            "range {}..{} spans {} days, limit is {}",
            from, to, span, MAX_RANGE_DAYS
        )));
    }

    let mut plans = Vec::with_capacity(span as usize);
    let mut date = from;
    loop {
        plans.push(schedule_for_date(rotation, date));
        if date >= to {
            break;
        }
        match date.checked_add_signed(Duration::days(1)) {
            Some(next) => date = next,
            None => break,
        }
    }
    Ok(plans)
}

//! Shared test catalogs.

use opswall_core::{Asset, Team, Weekday};

use crate::catalog::{CycleCatalog, ReferenceCatalog, Rotation, ScheduleSlot, WeeklySchedule};

pub(crate) fn reference() -> ReferenceCatalog {
    ReferenceCatalog::new(
        vec![
            Asset::new(1, "Chiller A", "Roof chiller, north side"),
            Asset::new(2, "AHU Lt.1", "Air handling unit, ground floor"),
            Asset::new("GEN-1", "Genset", "Backup generator 500 kVA"),
        ],
        vec![
            Team::new("team1", "Team Alpha", &["Alice", "Bob"]),
            Team::new("team2", "Team Bravo", &["Citra", "Dedi"]),
        ],
    )
}

/// week1: Senin Chiller/Alpha. week2: Senin Chiller/Alpha, Selasa three
/// slots with a dangling asset in the middle. week3: Jumat Genset twice.
/// week4: empty.
pub(crate) fn cycle() -> CycleCatalog {
    CycleCatalog::new([
        WeeklySchedule::new().with_day(Weekday::Senin, vec![ScheduleSlot::new(1, 1)]),
        WeeklySchedule::new()
            .with_day(Weekday::Senin, vec![ScheduleSlot::new(1, 1)])
            .with_day(
                Weekday::Selasa,
                vec![
                    ScheduleSlot::new(2, 2),
                    ScheduleSlot::new(99, 1),
                    ScheduleSlot::new("GEN-1", 2),
                ],
            ),
        WeeklySchedule::new().with_day(
            Weekday::Jumat,
            vec![ScheduleSlot::new("GEN-1", 1), ScheduleSlot::new("GEN-1", 1)],
        ),
        WeeklySchedule::new(),
    ])
}

pub(crate) fn rotation() -> Rotation {
    Rotation::new(reference(), cycle())
}

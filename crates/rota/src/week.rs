//! ISO-8601 week numbering and 4-week cycle resolution.
//!
//! ```text
//!     December 2024 / January 2025
//! Mo Tu We Th Fr Sa Su
//! 23 24 25 26 27 28 29   week 52 (2024)
//! 30 31  1  2  3  4  5   week 1  (2025)  <- contains the first Thursday
//!  6  7  8  9 10 11 12   week 2
//! ```
//!
//! A week belongs to the year of its Thursday, so Dec 30 2024 is week 1 of
//! 2025 and Jan 1 2021 is week 53 of 2020. The cycle slot is
//! `((week_in_year - 1) mod 4) + 1`; in a 53-week year week 53 and the next
//! year's week 1 both land on slot 1.

use chrono::{Datelike, Duration, NaiveDate};
use opswall_core::{CycleWeek, Weekday};
use serde::Serialize;

/// Where a date falls in the ISO calendar and the PM rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekCycle {
    /// 1..=4
    pub week_in_cycle: u8,
    /// ISO week number, 1..=53.
    pub week_in_year: u32,
    /// Year the ISO week belongs to (may differ from the date's calendar year).
    pub iso_year: i32,
    /// Monday of the ISO week.
    pub week_start: NaiveDate,
    #[serde(skip)]
    cycle: CycleWeek,
}

impl WeekCycle {
    pub fn cycle(&self) -> CycleWeek {
        self.cycle
    }

    /// Working days of this week, Monday first.
    pub fn working_days(&self) -> impl Iterator<Item = (Weekday, NaiveDate)> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, shift(self.week_start, i64::from(day.days_from_monday()))))
    }
}

/// Map a calendar date to its ISO week and rotation slot.
pub fn resolve(date: NaiveDate) -> WeekCycle {
    let day_offset = i64::from(date.weekday().num_days_from_monday());
    let monday = shift(date, -day_offset);
    let thursday = shift(monday, 3);

    let first_thursday = first_thursday_of(thursday);
    let weeks_between = (thursday - first_thursday).num_days() / 7;
    let week_in_year = u32::try_from(weeks_between + 1).unwrap_or(1);

    let cycle = CycleWeek::for_week_in_year(week_in_year);
    WeekCycle {
        week_in_cycle: cycle.number(),
        week_in_year,
        iso_year: thursday.year(),
        week_start: monday,
        cycle,
    }
}

/// Schedule day name for `date`; `None` on Saturday and Sunday.
pub fn weekday_name_of(date: NaiveDate) -> Option<Weekday> {
    Weekday::from_chrono(date.weekday())
}

/// First Thursday on or after Jan 1 of `date`'s year.
fn first_thursday_of(date: NaiveDate) -> NaiveDate {
    let jan1 = date.with_ordinal(1).unwrap_or(date);
    let thursday = chrono::Weekday::Thu.num_days_from_monday();
    let ahead = (7 + thursday - jan1.weekday().num_days_from_monday()) % 7;
    shift(jan1, i64::from(ahead))
}

/// Add `days`, staying put if the result leaves chrono's range. Only the
/// outermost days of that range can hit the fallback.
fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn first_monday_of_2025_is_week_two() {
        let w = resolve(d(2025, 1, 6));
        assert_eq!(w.week_in_year, 2);
        assert_eq!(w.week_in_cycle, 2);
        assert_eq!(w.cycle(), CycleWeek::Week2);
        assert_eq!(w.iso_year, 2025);
        assert_eq!(w.week_start, d(2025, 1, 6));
    }

    #[test]
    fn late_december_can_belong_to_next_year() {
        let w = resolve(d(2024, 12, 30));
        assert_eq!(w.week_in_year, 1);
        assert_eq!(w.iso_year, 2025);
        assert_eq!(w.week_in_cycle, 1);
        // Jan 1 2025 (Wednesday) is the same ISO week.
        assert_eq!(resolve(d(2025, 1, 1)), w);
    }

    #[test]
    fn early_january_can_belong_to_previous_year() {
        let w = resolve(d(2021, 1, 1));
        assert_eq!(w.week_in_year, 53);
        assert_eq!(w.iso_year, 2020);
        assert_eq!(w.week_start, d(2020, 12, 28));

        let w = resolve(d(2023, 1, 1));
        assert_eq!(w.week_in_year, 52);
        assert_eq!(w.iso_year, 2022);
    }

    #[test]
    fn leap_day() {
        let w = resolve(d(2024, 2, 29));
        assert_eq!(w.week_in_year, 9);
        assert_eq!(w.week_in_cycle, 1);
        assert_eq!(resolve(d(2024, 3, 1)).week_in_year, 9);
        assert_eq!(resolve(d(2024, 3, 4)).week_in_year, 10);
    }

    #[test]
    fn matches_chrono_iso_week_for_a_decade() {
        let mut date = d(2018, 1, 1);
        let end = d(2030, 12, 31);
        while date <= end {
            let iso = date.iso_week();
            let w = resolve(date);
            assert_eq!(w.week_in_year, iso.week(), "week mismatch on {date}");
            assert_eq!(w.iso_year, iso.year(), "year mismatch on {date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn same_iso_week_same_result() {
        let mut monday = d(2018, 1, 1);
        let end = d(2030, 12, 31);
        while monday <= end {
            assert_eq!(monday.weekday(), chrono::Weekday::Mon);
            let expected = resolve(monday);
            for offset in 1..7 {
                let day = monday + Duration::days(offset);
                assert_eq!(resolve(day), expected, "{day} differs from its Monday {monday}");
            }
            monday = monday + Duration::days(7);
        }
    }

    #[test]
    fn cycle_is_always_one_to_four() {
        let mut date = d(1999, 12, 1);
        for _ in 0..3_000 {
            let w = resolve(date);
            assert!((1..=4).contains(&w.week_in_cycle), "{date}: {}", w.week_in_cycle);
            date = date + Duration::days(1);
        }
    }

    #[test]
    fn consecutive_weeks_advance_the_cycle_within_a_year() {
        let mut date = d(2025, 1, 6);
        while date.year() == 2025 && resolve(date + Duration::days(7)).iso_year == 2025 {
            let this = resolve(date).week_in_cycle;
            let next = resolve(date + Duration::days(7)).week_in_cycle;
            assert_eq!(next, this % 4 + 1, "continuity broken after {date}");
            date = date + Duration::days(7);
        }
    }

    /// 2026 has 53 ISO weeks: week 53 and 2027's week 1 both map to slot 1,
    /// so the rotation repeats a slot across the boundary.
    #[test]
    fn week_53_repeats_slot_one_across_the_year_boundary() {
        let last = resolve(d(2026, 12, 28));
        let first = resolve(d(2027, 1, 4));
        assert_eq!((last.week_in_year, last.week_in_cycle), (53, 1));
        assert_eq!((first.week_in_year, first.week_in_cycle), (1, 1));
    }

    #[test]
    fn working_days_start_on_monday() {
        let days: Vec<_> = resolve(d(2025, 1, 8)).working_days().collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0], (Weekday::Senin, d(2025, 1, 6)));
        assert_eq!(days[4], (Weekday::Jumat, d(2025, 1, 10)));
    }

    #[test]
    fn weekday_names() {
        assert_eq!(weekday_name_of(d(2025, 1, 6)), Some(Weekday::Senin));
        assert_eq!(weekday_name_of(d(2025, 1, 10)), Some(Weekday::Jumat));
        assert_eq!(weekday_name_of(d(2025, 1, 11)), None);
        assert_eq!(weekday_name_of(d(2025, 1, 12)), None);
    }

    #[test]
    fn extreme_dates_do_not_panic() {
        let _ = resolve(NaiveDate::MIN);
        let _ = resolve(NaiveDate::MAX);
    }
}

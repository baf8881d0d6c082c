//! Integration tests against the shipped catalog in `data/catalog/`.

use chrono::NaiveDate;
use opswall_core::Weekday;
use opswall_rota::clock::FixedClock;
use opswall_rota::loader::{load_document, load_file};
use opswall_rota::validation::validate_document;
use opswall_rota::{range_view, today_view, week_view, Rotation};

/// Integration tests run from the crate directory, so we go up two levels.
fn catalog_path() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.join("../../data/catalog/pm-rotation.yml")
}

fn load() -> Rotation {
    let path = catalog_path();
    load_file(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn shipped_catalog_validates_cleanly() {
    let doc = load_document(&catalog_path()).unwrap();
    let result = validate_document(&doc);
    assert!(result.valid, "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
}

#[test]
fn shipped_catalog_metadata_and_reference_data() {
    let rotation = load();
    assert_eq!(rotation.metadata.id, "gedung-a-pm");
    assert_eq!(rotation.reference.asset_count(), 9);
    assert_eq!(rotation.reference.teams().len(), 4);
    assert_eq!(rotation.reference.team_id_of("team3"), Some(3));
}

#[test]
fn monday_jan_6_2025_is_chiller_b_for_hvac() {
    let rotation = load();
    let plan = today_view(&rotation, &FixedClock(d(2025, 1, 6)));

    assert_eq!(plan.week.week_in_year, 2);
    assert_eq!(plan.week.week_in_cycle, 2);
    assert_eq!(plan.weekday, Some(Weekday::Senin));
    let got: Vec<_> = plan
        .schedule
        .assignments
        .iter()
        .map(|a| (a.asset.name.as_str(), a.team.name.as_str()))
        .collect();
    assert_eq!(got, vec![("Chiller B", "Tim HVAC")]);
}

#[test]
fn week_view_keeps_slot_order() {
    let rotation = load();
    // 2025-01-13 is ISO week 3
    let view = week_view(&rotation, d(2025, 1, 14));
    assert_eq!(view.week.week_in_cycle, 3);

    let tuesday = &view.days[1];
    assert_eq!(tuesday.weekday, Some(Weekday::Selasa));
    let names: Vec<_> = tuesday.schedule.assignments.iter().map(|a| a.asset.name.as_str()).collect();
    assert_eq!(names, vec!["AHU Lt.1", "AHU Lt.2"]);
    assert!(view.days[4].schedule.is_empty(), "week3 has no Friday slots");
}

#[test]
fn shipped_catalog_has_no_dangling_slots_over_a_year() {
    let rotation = load();
    let plans = range_view(&rotation, d(2025, 1, 1), d(2025, 12, 31)).unwrap();
    assert_eq!(plans.len(), 365);
    assert!(plans.iter().all(|p| p.schedule.skipped.is_empty()));
    assert!(plans
        .iter()
        .filter(|p| !p.is_working_day())
        .all(|p| p.schedule.is_empty()));
}

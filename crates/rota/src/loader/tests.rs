//! Tests for the catalog loader module.

use std::fs;
use std::path::PathBuf;

use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use opswall_core::AssetId;
use tempfile::TempDir;

use super::watcher::handle_fs_event;
use super::*;

const VALID_CATALOG_YAML: &str = r#"
apiVersion: v1
kind: PmRotation
metadata:
  id: gedung-a
  name: Gedung A
assets:
  - { id: 1, name: Chiller A }
  - { id: GEN-1, name: Genset }
teams:
  - { key: team1, name: Team Alpha, members: [Alice] }
  - { key: team2, name: Team Bravo, members: [Citra] }
cycle:
  week1:
    SENIN: [{ assetId: 1, teamId: 1 }]
  week2:
    SELASA: [{ assetId: GEN-1, teamId: 2 }]
  week3:
    RABU: [{ assetId: 1, teamId: 2 }]
  week4:
    KAMIS: [{ assetId: GEN-1, teamId: 1 }]
"#;

fn temp_catalog(yaml: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create tempdir");
    let path = dir.path().join("pm-rotation.yml");
    fs::write(&path, yaml).unwrap();
    (dir, path)
}

fn modify_event(path: PathBuf) -> Event {
    Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content))).add_path(path)
}

// ── load_file / parse_str ───────────────────────────────────────────

#[test]
fn load_catalog_from_file() {
    let (_dir, path) = temp_catalog(VALID_CATALOG_YAML);

    let rotation = load_file(&path).unwrap();
    assert_eq!(rotation.metadata.id, "gedung-a");
    assert_eq!(rotation.reference.asset_count(), 2);
    assert_eq!(
        rotation.reference.asset(&AssetId::from("GEN-1")).map(|a| a.name.as_str()),
        Some("Genset")
    );
    assert_eq!(rotation.lookup(2, "SELASA").unwrap().len(), 1);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_file(&dir.path().join("nope.yml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)), "got {err:?}");
}

#[test]
fn malformed_yaml_is_parse_error() {
    let err = parse_str("apiVersion: v1\nkind: [").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)), "got {err:?}");
}

#[test]
fn wrong_kind_is_rejected() {
    let yaml = VALID_CATALOG_YAML.replace("kind: PmRotation", "kind: PmSchedule");
    let err = parse_str(&yaml).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)), "got {err:?}");
    assert!(err.to_string().contains("PmSchedule"));
}

#[test]
fn empty_id_is_rejected() {
    let yaml = VALID_CATALOG_YAML.replace("id: gedung-a", "id: \"\"");
    let err = parse_str(&yaml).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)), "got {err:?}");
}

#[test]
fn missing_cycle_week_is_configuration_error() {
    let yaml = VALID_CATALOG_YAML.replace(
        "  week4:\n    KAMIS: [{ assetId: GEN-1, teamId: 1 }]\n",
        "",
    );
    let err = parse_str(&yaml).unwrap_err();
    assert!(err.is_configuration(), "got {err:?}");
    assert!(err.to_string().contains("week4"));
}

#[test]
fn duplicate_asset_id_is_rejected() {
    let yaml = VALID_CATALOG_YAML.replace(
        "  - { id: GEN-1, name: Genset }",
        "  - { id: GEN-1, name: Genset }\n  - { id: 1, name: Chiller B }",
    );
    let err = parse_str(&yaml).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)), "got {err:?}");
    assert!(err.to_string().contains("assets[2].id"));
}

#[test]
fn dangling_reference_only_warns() {
    let yaml = VALID_CATALOG_YAML.replace("RABU: [{ assetId: 1, teamId: 2 }]", "RABU: [{ assetId: 77, teamId: 2 }]");
    let rotation = parse_str(&yaml).unwrap();
    let schedule = rotation.lookup(3, "RABU").unwrap();
    assert!(schedule.is_empty());
    assert_eq!(schedule.skipped.len(), 1);
}

#[test]
fn disabled_catalog_loads_but_schedules_nothing() {
    let yaml = VALID_CATALOG_YAML.replace("  name: Gedung A\n", "  name: Gedung A\n  enabled: false\n");
    let rotation = parse_str(&yaml).unwrap();

    assert!(!rotation.is_enabled());
    assert!(rotation.lookup(2, "SELASA").unwrap().is_empty());
    assert_eq!(parse_str(VALID_CATALOG_YAML).unwrap().lookup(2, "SELASA").unwrap().len(), 1);
}

#[test]
fn load_document_keeps_raw_cycle_map() {
    let (_dir, path) = temp_catalog(VALID_CATALOG_YAML);
    let doc = load_document(&path).unwrap();
    assert_eq!(doc.cycle.keys().collect::<Vec<_>>(), vec!["week1", "week2", "week3", "week4"]);
}

// ── CatalogStore ────────────────────────────────────────────────────

#[test]
fn store_open_fails_on_bad_initial_file() {
    let (_dir, path) = temp_catalog("not: [valid");
    assert!(CatalogStore::open(&path).is_err());
}

#[test]
fn store_reload_swaps_rotation_and_bumps_generation() {
    let (_dir, path) = temp_catalog(VALID_CATALOG_YAML);
    let store = CatalogStore::open(&path).unwrap();
    assert_eq!(store.generation(), 1);
    let before = store.snapshot();

    fs::write(&path, VALID_CATALOG_YAML.replace("name: Genset", "name: Genset Utama")).unwrap();
    assert_eq!(store.reload().unwrap(), 2);

    let after = store.snapshot();
    assert_eq!(
        after.reference.asset(&AssetId::from("GEN-1")).unwrap().name,
        "Genset Utama"
    );
    // earlier snapshots are unaffected
    assert_eq!(before.reference.asset(&AssetId::from("GEN-1")).unwrap().name, "Genset");
}

#[test]
fn store_reload_failure_keeps_previous_rotation() {
    let (_dir, path) = temp_catalog(VALID_CATALOG_YAML);
    let store = CatalogStore::open(&path).unwrap();

    fs::write(&path, "apiVersion: v1\nkind: [").unwrap();
    assert!(store.reload().is_err());

    assert_eq!(store.generation(), 1);
    assert_eq!(store.snapshot().metadata.id, "gedung-a");
}

#[test]
fn fs_event_for_catalog_file_reloads() {
    let (_dir, path) = temp_catalog(VALID_CATALOG_YAML);
    let store = CatalogStore::open(&path).unwrap();

    fs::write(&path, VALID_CATALOG_YAML.replace("name: Gedung A", "name: Gedung A (rev 2)")).unwrap();
    handle_fs_event(&modify_event(path.clone()), &path, &store.current, &store.generation);

    assert_eq!(store.generation(), 2);
    assert_eq!(store.snapshot().metadata.name, "Gedung A (rev 2)");
}

#[test]
fn fs_event_for_other_files_is_ignored() {
    let (dir, path) = temp_catalog(VALID_CATALOG_YAML);
    let store = CatalogStore::open(&path).unwrap();

    let other = dir.path().join("notes.yml");
    fs::write(&other, "hello").unwrap();
    handle_fs_event(&modify_event(other), &path, &store.current, &store.generation);
    let created = Event::new(EventKind::Create(CreateKind::File)).add_path(dir.path().join(".pm-rotation.yml.swp"));
    handle_fs_event(&created, &path, &store.current, &store.generation);

    assert_eq!(store.generation(), 1);
}

#[test]
fn fs_remove_event_keeps_rotation() {
    let (_dir, path) = temp_catalog(VALID_CATALOG_YAML);
    let store = CatalogStore::open(&path).unwrap();

    fs::remove_file(&path).unwrap();
    let removed = Event::new(EventKind::Remove(RemoveKind::File)).add_path(path.clone());
    handle_fs_event(&removed, &path, &store.current, &store.generation);

    assert_eq!(store.generation(), 1);
    assert_eq!(store.snapshot().metadata.id, "gedung-a");
}

#[test]
fn watch_starts_on_catalog_directory() {
    let (_dir, path) = temp_catalog(VALID_CATALOG_YAML);
    let mut store = CatalogStore::open(&path).unwrap();
    assert!(!store.is_watching());

    store.watch().unwrap();
    assert!(store.is_watching());
    assert_eq!(store.path(), path.as_path());
}

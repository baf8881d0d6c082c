//! Cycle pattern validation: week keys, slot references, coverage.

use std::collections::HashSet;

use opswall_core::CycleWeek;

use super::fuzzy::fuzzy_match;
use super::ValidationResult;
use crate::schema::RotationDocument;

pub(super) fn validate_cycle_keys(doc: &RotationDocument, result: &mut ValidationResult) {
    let expected: Vec<&str> = CycleWeek::ALL.iter().map(|w| w.key()).collect();

    for key in doc.cycle.keys() {
        if key.parse::<CycleWeek>().is_err() {
            let path = format!("cycle.{key}");
            match fuzzy_match(key, &expected) {
                Some(s) => result.error_with_suggestion(
                    path,
                    format!("unknown cycle week '{key}'"),
                    format!("Did you mean '{s}'?"),
                ),
                None => result.error(
                    path,
                    format!("unknown cycle week '{key}', expected week1..week4"),
                ),
            }
        }
    }

    for week in CycleWeek::ALL {
        match doc.cycle.get(week.key()) {
            None => result.error(
                format!("cycle.{}", week.key()),
                format!("cycle is missing {}", week.key()),
            ),
            Some(schedule) if schedule.is_empty() => result.warn(
                format!("cycle.{}", week.key()),
                format!("{} has no scheduled slots", week.key()),
            ),
            Some(_) => {}
        }
    }
}

pub(super) fn validate_slots(doc: &RotationDocument, result: &mut ValidationResult) {
    let asset_ids: HashSet<_> = doc.assets.iter().map(|a| &a.id).collect();
    let id_strings: Vec<String> = doc.assets.iter().map(|a| a.id.to_string()).collect();
    let candidates: Vec<&str> = id_strings.iter().map(String::as_str).collect();
    let team_count = doc.teams.len();

    for (key, schedule) in &doc.cycle {
        for (day, slots) in schedule.iter() {
            for (i, slot) in slots.iter().enumerate() {
                let path = format!("cycle.{key}.{day}[{i}]");

                if !asset_ids.contains(&slot.asset_id) {
                    let input = slot.asset_id.to_string();
                    let suggestion =
                        fuzzy_match(&input, &candidates).map(|s| format!("Did you mean '{s}'?"));
                    result.warn_with_suggestion(
                        format!("{path}.assetId"),
                        format!("unknown asset '{}', slot will be skipped", slot.asset_id),
                        suggestion,
                    );
                }

                let team_ok = slot.team_id >= 1 && (slot.team_id as usize) <= team_count;
                if !team_ok {
                    result.warn(
                        format!("{path}.teamId"),
                        format!(
                            "unknown team {}, team ids run 1..={}; slot will be skipped",
                            slot.team_id, team_count
                        ),
                    );
                }
            }
        }
    }
}

pub(super) fn validate_coverage(doc: &RotationDocument, result: &mut ValidationResult) {
    let scheduled: HashSet<_> = doc
        .cycle
        .values()
        .flat_map(|schedule| schedule.iter())
        .flat_map(|(_, slots)| slots.iter().map(|s| &s.asset_id))
        .collect();

    for (i, asset) in doc.assets.iter().enumerate() {
        if !scheduled.contains(&asset.id) {
            result.warn(
                format!("assets[{i}]"),
                format!("asset '{}' ({}) is never scheduled", asset.id, asset.name),
            );
        }
    }
}

//! Reference data validation: asset ids and names, team keys, names and members.

use std::collections::HashMap;

use opswall_core::AssetId;

use super::ValidationResult;
use crate::schema::RotationDocument;

pub(super) fn validate_assets(doc: &RotationDocument, result: &mut ValidationResult) {
    let mut seen: HashMap<&AssetId, usize> = HashMap::new();

    for (i, asset) in doc.assets.iter().enumerate() {
        let path = format!("assets[{i}]");

        if let Some(&first) = seen.get(&asset.id) {
            result.error(
                format!("{path}.id"),
                format!("duplicate asset id '{}', first defined at assets[{first}]", asset.id),
            );
        } else {
            seen.insert(&asset.id, i);
        }

        if asset.name.trim().is_empty() {
            result.error(format!("{path}.name"), format!("asset '{}' has an empty name", asset.id));
        }
    }
}

pub(super) fn validate_teams(doc: &RotationDocument, result: &mut ValidationResult) {
    if doc.teams.is_empty() {
        result.error("teams", "at least one team is required");
        return;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (i, team) in doc.teams.iter().enumerate() {
        let path = format!("teams[{i}]");
        let key = team.key.trim();

        if key.is_empty() {
            result.error(format!("{path}.key"), "team key must not be empty");
        } else if let Some(&first) = seen.get(key) {
            result.error(
                format!("{path}.key"),
                format!("duplicate team key '{key}', first defined at teams[{first}]"),
            );
        } else {
            seen.insert(key, i);
        }

        if team.name.trim().is_empty() {
            result.error(format!("{path}.name"), format!("team '{key}' has an empty name"));
        }

        if team.members.is_empty() {
            result.warn(format!("{path}.members"), format!("team '{key}' has no members"));
        }
    }
}

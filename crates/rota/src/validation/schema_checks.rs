//! Envelope validation: apiVersion, kind, metadata.

use super::fuzzy::is_kebab_case;
use super::ValidationResult;
use crate::schema::{RotationDocument, API_VERSION, ROTATION_KIND};

pub(super) fn validate_schema(doc: &RotationDocument, result: &mut ValidationResult) {
    if doc.api_version != API_VERSION {
        result.error(
            "apiVersion",
            format!("apiVersion must be '{}', got '{}'", API_VERSION, doc.api_version),
        );
    }

    if doc.kind != ROTATION_KIND {
        result.error(
            "kind",
            format!("kind must be '{}', got '{}'", ROTATION_KIND, doc.kind),
        );
    }

    let id = doc.metadata.id.trim();
    if id.is_empty() {
        result.error("metadata.id", "id must not be empty");
    } else if !is_kebab_case(id) {
        result.warn(
            "metadata.id",
            format!(
                "id should be kebab-case (lowercase alphanumeric + hyphens), got '{}'",
                doc.metadata.id
            ),
        );
    }

    if doc.metadata.name.trim().is_empty() {
        result.warn("metadata.name", "name is empty");
    }
}

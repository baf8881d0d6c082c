//! Rotation document validation with structured errors and suggestions.
//!
//! Checks the envelope (apiVersion, kind, metadata), the reference data
//! (assets and teams) and the cycle pattern of a [`RotationDocument`].
//! Returns a [`ValidationResult`] with errors (block loading) and warnings
//! (advisory). Dangling slot references are warnings: lookup skips them.

mod cycle_checks;
mod reference_checks;
mod schema_checks;

pub mod fuzzy;


use crate::schema::RotationDocument;
use serde::{Deserialize, Serialize};

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Path-like location, e.g. `"teams[2].key"`.
    pub path: String,
    pub message: String,
    /// Optional "Did you mean …?" suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: Some(suggestion.into()),
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn warn_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: Option<String>,
    ) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
            suggestion,
        });
    }

    /// Errors first, then warnings, one per line.
    pub fn summary_lines(&self) -> Vec<String> {
        let errors = self.errors.iter().map(|e| match &e.suggestion {
            Some(s) => format!("error   {}: {} ({})", e.path, e.message, s),
            None => format!("error   {}: {}", e.path, e.message),
        });
        let warnings = self.warnings.iter().map(|w| match &w.suggestion {
            Some(s) => format!("warning {}: {} ({})", w.path, w.message, s),
            None => format!("warning {}: {}", w.path, w.message),
        });
        errors.chain(warnings).collect()
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a parsed [`RotationDocument`].
pub fn validate_document(doc: &RotationDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    schema_checks::validate_schema(doc, &mut result);
    reference_checks::validate_assets(doc, &mut result);
    reference_checks::validate_teams(doc, &mut result);
    cycle_checks::validate_cycle_keys(doc, &mut result);
    cycle_checks::validate_slots(doc, &mut result);
    cycle_checks::validate_coverage(doc, &mut result);
    result
}

/// Parse raw YAML and validate. Returns parse errors merged with validation errors.
pub fn validate_yaml(yaml: &str) -> ValidationResult {
    match serde_yaml::from_str::<RotationDocument>(yaml) {
        Ok(doc) => validate_document(&doc),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.error("", format!("YAML parse error: {e}"));
            result
        }
    }
}

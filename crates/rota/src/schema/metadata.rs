//! Metadata block shared by catalog documents.

use serde::{Deserialize, Serialize};

/// `metadata:` section of a rotation document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CommonMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// A disabled rotation loads but schedules nothing.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl CommonMetadata {
    /// Metadata for rotations assembled in code rather than loaded from a file.
    pub fn anonymous() -> Self {
        Self {
            id: "inline".to_string(),
            name: "Inline rotation".to_string(),
            description: None,
            enabled: true,
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}

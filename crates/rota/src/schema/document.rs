//! Rotation document: the on-disk shape of a PM rotation catalog.

use std::collections::BTreeMap;

use opswall_core::{Asset, Team};
use serde::{Deserialize, Serialize};

use super::CommonMetadata;
use crate::catalog::{CycleCatalog, ReferenceCatalog, Rotation, WeeklySchedule};

/// Only supported `apiVersion`.
pub const API_VERSION: &str = "v1";
/// Only supported `kind`.
pub const ROTATION_KIND: &str = "PmRotation";

/// Top-level rotation document parsed from YAML.
///
/// `cycle` is kept as a raw `week1..week4` map so validation can report a
/// missing week instead of failing the parse outright. [`into_rotation`]
/// enforces the four-week shape.
///
/// [`into_rotation`]: RotationDocument::into_rotation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RotationDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: CommonMetadata,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub cycle: BTreeMap<String, WeeklySchedule>,
}

impl RotationDocument {
    /// Convert into the in-memory [`Rotation`].
    ///
    /// Fails with `OpsError::Configuration` when the cycle map does not hold
    /// exactly `week1..week4`.
    pub fn into_rotation(self) -> opswall_core::Result<Rotation> {
        let cycle = CycleCatalog::from_keyed(self.cycle)?;
        Ok(Rotation {
            metadata: self.metadata,
            reference: ReferenceCatalog::new(self.assets, self.teams),
            cycle,
        })
    }
}

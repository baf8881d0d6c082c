//! Skip diagnostics for slots that could not be resolved.

use std::fmt;

use opswall_core::{CycleWeek, Weekday};
use serde::Serialize;

use crate::catalog::ScheduleSlot;

/// Which side of a slot failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingRef {
    Asset,
    Team,
    Both,
}

impl MissingRef {
    pub(crate) fn from_flags(asset_missing: bool, team_missing: bool) -> Option<Self> {
        match (asset_missing, team_missing) {
            (true, true) => Some(MissingRef::Both),
            (true, false) => Some(MissingRef::Asset),
            (false, true) => Some(MissingRef::Team),
            (false, false) => None,
        }
    }
}

impl fmt::Display for MissingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRef::Asset => write!(f, "asset"),
            MissingRef::Team => write!(f, "team"),
            MissingRef::Both => write!(f, "asset and team"),
        }
    }
}

/// A slot skipped during lookup because it points at unknown reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingReference {
    pub cycle: CycleWeek,
    pub weekday: Weekday,
    /// Zero-based position of the slot within the day.
    pub position: usize,
    pub slot: ScheduleSlot,
    pub missing: MissingRef,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}[{}]: unknown {} (assetId={}, teamId={})",
            self.cycle, self.weekday, self.position, self.missing, self.slot.asset_id, self.slot.team_id
        )
    }
}

//! The 4-week rotation pattern: cycle week → weekday → ordered slots.

use std::collections::BTreeMap;

use opswall_core::{AssetId, CycleWeek, OpsError, TeamId, Weekday};
use serde::{Deserialize, Serialize};

/// One assignment entry: which asset is serviced by which team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub asset_id: AssetId,
    /// 1-based position in the team catalog.
    pub team_id: TeamId,
}

impl ScheduleSlot {
    pub fn new(asset_id: impl Into<AssetId>, team_id: TeamId) -> Self {
        Self {
            asset_id: asset_id.into(),
            team_id,
        }
    }
}

/// Slots per working day. Slot order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: BTreeMap<Weekday, Vec<ScheduleSlot>>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any slots already set for `day`.
    pub fn with_day(mut self, day: Weekday, slots: Vec<ScheduleSlot>) -> Self {
        self.days.insert(day, slots);
        self
    }

    /// Slots for `day`; empty when the day is absent.
    pub fn slots(&self, day: Weekday) -> &[ScheduleSlot] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days that have an entry, in weekday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[ScheduleSlot])> {
        self.days.iter().map(|(day, slots)| (*day, slots.as_slice()))
    }

    pub fn slot_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_count() == 0
    }
}

/// Exactly four weekly schedules, one per [`CycleWeek`].
///
/// Serialized as a `week1..week4` map. Deserialization goes through
/// [`CycleCatalog::from_keyed`], so a document missing a week is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, WeeklySchedule>",
    into = "BTreeMap<String, WeeklySchedule>"
)]
pub struct CycleCatalog {
    weeks: [WeeklySchedule; 4],
}

impl CycleCatalog {
    pub fn new(weeks: [WeeklySchedule; 4]) -> Self {
        Self { weeks }
    }

    /// Build from a `week1..week4` keyed map.
    ///
    /// Fails with [`OpsError::Configuration`] on an unknown key or when any of
    /// the four weeks is missing.
    pub fn from_keyed(mut keyed: BTreeMap<String, WeeklySchedule>) -> opswall_core::Result<Self> {
        if let Some(unknown) = keyed.keys().find(|k| k.parse::<CycleWeek>().is_err()) {
            return Err(OpsError::Configuration(format!(
                "unknown cycle week '{}', expected week1..week4",
                unknown
            )));
        }

        let missing: Vec<&str> = CycleWeek::ALL
            .iter()
            .filter(|w| !keyed.contains_key(w.key()))
            .map(|w| w.key())
            .collect();
        if !missing.is_empty() {
            return Err(OpsError::Configuration(format!(
                "cycle catalog is missing {}",
                missing.join(", ")
            )));
        }

        let mut take = |w: CycleWeek| keyed.remove(w.key()).unwrap_or_default();
        Ok(Self::new([
            take(CycleWeek::Week1),
            take(CycleWeek::Week2),
            take(CycleWeek::Week3),
            take(CycleWeek::Week4),
        ]))
    }

    pub fn week(&self, week: CycleWeek) -> &WeeklySchedule {
        &self.weeks[week.index()]
    }

    /// Schedule for a numeric week-in-cycle; anything outside `1..=4` is a
    /// configuration error.
    pub fn get(&self, week_in_cycle: u32) -> opswall_core::Result<&WeeklySchedule> {
        CycleWeek::from_number(week_in_cycle)
            .map(|w| self.week(w))
            .ok_or_else(|| {
                OpsError::Configuration(format!(
                    "cycle catalog has no week{}, expected week1..week4",
                    week_in_cycle
                ))
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (CycleWeek, &WeeklySchedule)> {
        CycleWeek::ALL.into_iter().map(move |w| (w, self.week(w)))
    }
}

impl TryFrom<BTreeMap<String, WeeklySchedule>> for CycleCatalog {
    type Error = OpsError;

    fn try_from(keyed: BTreeMap<String, WeeklySchedule>) -> Result<Self, Self::Error> {
        Self::from_keyed(keyed)
    }
}

impl From<CycleCatalog> for BTreeMap<String, WeeklySchedule> {
    fn from(catalog: CycleCatalog) -> Self {
        let [w1, w2, w3, w4] = catalog.weeks;
        CycleWeek::ALL
            .iter()
            .map(|w| w.key().to_string())
            .zip([w1, w2, w3, w4])
            .collect()
    }
}

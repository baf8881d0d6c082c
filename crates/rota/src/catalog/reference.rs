//! Asset and team reference data.

use indexmap::IndexMap;
use opswall_core::{Asset, AssetId, Team, TeamId};
use tracing::warn;

/// Immutable asset/team catalog used to resolve schedule slots.
///
/// Assets are keyed by id in catalog order. Teams are addressed by their
/// 1-based position, which is what `ScheduleSlot::team_id` refers to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceCatalog {
    assets: IndexMap<AssetId, Asset>,
    teams: Vec<Team>,
}

impl ReferenceCatalog {
    /// Build the catalog. When two assets share an id the first one wins,
    /// matching a first-match search over the raw list.
    pub fn new(assets: Vec<Asset>, teams: Vec<Team>) -> Self {
        let mut by_id = IndexMap::with_capacity(assets.len());
        for asset in assets {
            if by_id.contains_key(&asset.id) {
                warn!(asset_id = %asset.id, name = %asset.name, "duplicate asset id, keeping first entry");
                continue;
            }
            by_id.insert(asset.id.clone(), asset);
        }
        Self {
            assets: by_id,
            teams,
        }
    }

    pub fn asset(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.get(id)
    }

    /// Team at 1-based position `team_id`. `0` never resolves.
    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        let index = usize::try_from(team_id).ok()?.checked_sub(1)?;
        self.teams.get(index)
    }

    /// 1-based position of the team with the given key.
    pub fn team_id_of(&self, key: &str) -> Option<TeamId> {
        self.teams
            .iter()
            .position(|t| t.key == key)
            .and_then(|i| TeamId::try_from(i + 1).ok())
    }

    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}

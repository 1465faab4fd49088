use serde::Deserialize;

use super::PlayerId;

pub type FranchiseId = String;

/// Top-level shape of a rosters export.
#[derive(Deserialize, Debug)]
pub struct RostersResponse {
    pub rosters: Rosters,
    pub version: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Rosters {
    #[serde(default)]
    pub franchise: Vec<RosterFranchise>,
}

#[derive(Deserialize, Debug)]
pub struct RosterFranchise {
    pub id: FranchiseId,
    #[serde(default)]
    pub player: Vec<RosterSlot>,
}

#[derive(Deserialize, Debug)]
pub struct RosterSlot {
    pub id: PlayerId,
    /// `ROSTER`, `TAXI_SQUAD`, or `INJURED_RESERVE`.
    pub status: Option<String>,
}

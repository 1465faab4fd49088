use serde::Deserialize;

use super::{FranchiseId, PlayerId};

/// Top-level shape of a liveScoring export.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LiveScoringResponse {
    pub live_scoring: LiveScoring,
    pub version: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LiveScoring {
    pub week: Option<String>,
    #[serde(default)]
    pub matchup: Vec<Matchup>,
}

#[derive(Deserialize, Debug)]
pub struct Matchup {
    #[serde(default)]
    pub franchise: Vec<LiveFranchise>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LiveFranchise {
    pub id: FranchiseId,
    pub score: Option<String>,
    pub game_seconds_remaining: Option<String>,
    pub players_yet_to_play: Option<String>,
    /// Per-player breakdown, present when the request set `DETAILS=1`.
    pub players: Option<LivePlayers>,
}

#[derive(Deserialize, Debug)]
pub struct LivePlayers {
    #[serde(default)]
    pub player: Vec<LivePlayer>,
}

#[derive(Deserialize, Debug)]
pub struct LivePlayer {
    pub id: PlayerId,
    pub score: Option<String>,
    pub status: Option<String>,
}

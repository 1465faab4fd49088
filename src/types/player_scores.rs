use serde::Deserialize;

use super::PlayerId;

/// Top-level shape of a playerScores export.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoresResponse {
    pub player_scores: PlayerScores,
    pub version: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScores {
    #[serde(default)]
    pub player_score: Vec<PlayerScore>,
}

#[derive(Deserialize, Debug)]
pub struct PlayerScore {
    pub id: PlayerId,
    pub score: Option<String>,
    pub week: Option<String>,
}

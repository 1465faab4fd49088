use serde::Deserialize;

pub type PlayerId = String;

/// Top-level shape of a players export.
#[derive(Deserialize, Debug)]
pub struct PlayersResponse {
    pub players: Players,
    pub version: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Players {
    pub timestamp: Option<String>,
    #[serde(default)]
    pub player: Vec<Player>,
}

/// One player database entry. The detail fields are only populated when the
/// request set `DETAILS=1`.
#[derive(Deserialize, Debug)]
pub struct Player {
    pub id: PlayerId,
    /// `Last, First` as the API formats it.
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub draft_year: Option<String>,
    pub draft_team: Option<String>,
    pub college: Option<String>,
    pub jersey: Option<String>,
}

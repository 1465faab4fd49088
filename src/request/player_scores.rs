use crate::types::{PlayerId, PlayerScoresResponse};
use crate::Error;

use super::common::{ParamList, Params, Request, Resource};

/// Request for fantasy point totals per player.
///
/// The upstream API also accepts a `YEAR` override here, but the season in
/// [`Config`](crate::Config) is authoritative for every request this client
/// builds, so no such field is exposed.
#[derive(Clone, Debug)]
pub struct PlayerScoresRequest {
    pub league_id: String,
    pub week: Option<u16>,
    pub players: Vec<PlayerId>,
    pub status: Option<String>,
    pub rules: bool,
    pub count: Option<u32>,
}

impl PlayerScoresRequest {
    pub fn new(league_id: &str) -> Self {
        Self {
            league_id: league_id.to_string(),
            week: None,
            players: Vec::new(),
            status: None,
            rules: false,
            count: None,
        }
    }

    pub fn with_week(mut self, week: u16) -> Self {
        self.week = Some(week);
        self
    }

    pub fn with_player(mut self, player_id: &str) -> Self {
        self.players.push(player_id.to_string());
        self
    }

    pub fn with_players(mut self, player_ids: &[PlayerId]) -> Self {
        self.players.extend_from_slice(player_ids);
        self
    }

    /// Filters by roster status, e.g. `freeagent`.
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Scores players against the league's scoring rules rather than raw
    /// stats.
    pub fn with_rules(mut self) -> Self {
        self.rules = true;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl Request for PlayerScoresRequest {
    type Response = PlayerScoresResponse;
    const RESOURCE: Resource = Resource::PlayerScores;

    fn params(&self) -> Result<Params, Error> {
        let mut params = ParamList::new(Self::RESOURCE);
        params.push_required("L", "league_id", &self.league_id)?;
        params.push_opt("W", self.week);
        params.push_list("PLAYERS", &self.players);
        params.push_opt("STATUS", self.status.as_deref());
        params.push_flag("RULES", self.rules);
        params.push_opt("COUNT", self.count);
        Ok(params.finish_json())
    }
}

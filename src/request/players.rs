use crate::types::{PlayerId, PlayersResponse};
use crate::Error;

use super::common::{ParamList, Params, Request, Resource};

/// Request for the player database. The only export request that works
/// without a league id: with none set it queries the full player pool.
#[derive(Clone, Debug, Default)]
pub struct PlayersRequest {
    pub league_id: Option<String>,
    pub details: bool,
    pub since: Option<i64>,
    pub players: Vec<PlayerId>,
}

impl PlayersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_league_id(mut self, league_id: &str) -> Self {
        self.league_id = Some(league_id.to_string());
        self
    }

    /// Requests the expanded per-player detail fields.
    pub fn with_details(mut self) -> Self {
        self.details = true;
        self
    }

    /// Restricts the result to players changed since the given unix timestamp.
    pub fn with_since(mut self, since: i64) -> Self {
        self.since = Some(since);
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
}

impl Request for PlayersRequest {
    type Response = PlayersResponse;
    const RESOURCE: Resource = Resource::Players;

    fn params(&self) -> Result<Params, Error> {
        let mut params = ParamList::new(Self::RESOURCE);
        params.push_opt("L", self.league_id.as_deref());
        params.push_flag("DETAILS", self.details);
        params.push_opt("SINCE", self.since);
        params.push_list("PLAYERS", &self.players);
        Ok(params.finish_json())
    }
}

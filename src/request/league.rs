use crate::types::LeagueResponse;
use crate::Error;

use super::common::{ParamList, Params, Request, Resource};

/// Request for league metadata: name, franchises, roster limits.
#[derive(Clone, Debug)]
pub struct LeagueRequest {
    pub league_id: String,
}

impl LeagueRequest {
    pub fn new(league_id: &str) -> Self {
        Self {
            league_id: league_id.to_string(),
        }
    }
}

impl Request for LeagueRequest {
    type Response = LeagueResponse;
    const RESOURCE: Resource = Resource::League;

    fn params(&self) -> Result<Params, Error> {
        let mut params = ParamList::new(Self::RESOURCE);
        params.push_required("L", "league_id", &self.league_id)?;
        Ok(params.finish_json())
    }
}

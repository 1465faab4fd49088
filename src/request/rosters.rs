use crate::types::RostersResponse;
use crate::Error;

use super::common::{ParamList, Params, Request, Resource};

/// Request for league rosters, optionally narrowed to a single franchise or
/// week.
#[derive(Clone, Debug)]
pub struct RostersRequest {
    pub league_id: String,
    pub franchise: Option<String>,
    pub week: Option<u16>,
}

impl RostersRequest {
    pub fn new(league_id: &str) -> Self {
        Self {
            league_id: league_id.to_string(),
            franchise: None,
            week: None,
        }
    }

    pub fn with_franchise(mut self, franchise: &str) -> Self {
        self.franchise = Some(franchise.to_string());
        self
    }

    pub fn with_week(mut self, week: u16) -> Self {
        self.week = Some(week);
        self
    }
}

impl Request for RostersRequest {
    type Response = RostersResponse;
    const RESOURCE: Resource = Resource::Rosters;

    fn params(&self) -> Result<Params, Error> {
        let mut params = ParamList::new(Self::RESOURCE);
        params.push_required("L", "league_id", &self.league_id)?;
        params.push_opt("FRANCHISE", self.franchise.as_deref());
        params.push_opt("W", self.week);
        Ok(params.finish_json())
    }
}

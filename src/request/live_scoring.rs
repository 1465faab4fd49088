use crate::types::LiveScoringResponse;
use crate::Error;

use super::common::{ParamList, Params, Request, Resource};

/// Request for in-progress matchup scores.
#[derive(Clone, Debug)]
pub struct LiveScoringRequest {
    pub league_id: String,
    pub week: Option<u16>,
    pub details: bool,
}

impl LiveScoringRequest {
    pub fn new(league_id: &str) -> Self {
        Self {
            league_id: league_id.to_string(),
            week: None,
            details: false,
        }
    }

    pub fn with_week(mut self, week: u16) -> Self {
        self.week = Some(week);
        self
    }

    /// Requests per-player scoring detail inside each matchup.
    pub fn with_details(mut self) -> Self {
        self.details = true;
        self
    }
}

impl Request for LiveScoringRequest {
    type Response = LiveScoringResponse;
    const RESOURCE: Resource = Resource::LiveScoring;

    fn params(&self) -> Result<Params, Error> {
        let mut params = ParamList::new(Self::RESOURCE);
        params.push_required("L", "league_id", &self.league_id)?;
        params.push_opt("W", self.week);
        params.push_flag("DETAILS", self.details);
        Ok(params.finish_json())
    }
}

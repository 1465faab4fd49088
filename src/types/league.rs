use serde::Deserialize;

use super::FranchiseId;

pub type LeagueId = String;

/// Top-level shape of a league export.
#[derive(Deserialize, Debug)]
pub struct LeagueResponse {
    pub league: League,
    pub version: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    /// League-specific host the export endpoints live on, e.g.
    /// `https://www43.myfantasyleague.com`.
    #[serde(rename = "baseURL")]
    pub base_url: Option<String>,
    pub franchises: Option<LeagueFranchises>,
}

#[derive(Deserialize, Debug)]
pub struct LeagueFranchises {
    pub count: Option<String>,
    #[serde(default)]
    pub franchise: Vec<LeagueFranchise>,
}

#[derive(Deserialize, Debug)]
pub struct LeagueFranchise {
    pub id: FranchiseId,
    pub name: String,
}

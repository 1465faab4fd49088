//! HTTP client for the MyFantasyLeague export API.

use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::Config,
    errors::truncate_body,
    request::{
        LeagueRequest, LiveScoringRequest, LoginRequest, Params, PlayerScoresRequest,
        PlayersRequest, Request, Resource, RostersRequest,
    },
    types::{
        LeagueResponse, LiveScoringResponse, LoginResponse, PlayerScoresResponse, PlayersResponse,
        RostersResponse,
    },
    Error,
};

/// Name of the session cookie attached to authenticated export requests.
const SESSION_COOKIE: &str = "MFL_USER_ID";

/// HTTP client for the MyFantasyLeague export API.
///
/// Holds the per-session [`Config`] and a reused `reqwest::Client`. Every
/// call is a single form-encoded POST; there is no retry, caching, or shared
/// mutable state, so the client is freely shareable across tasks.
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn post(&self, url: Url, params: &Params, with_cookie: bool) -> Result<String, Error> {
        tracing::debug!("POST {} params {:?}", url, params);
        let mut req = self.http.post(url).form(params);
        if with_cookie {
            if let Some(session_id) = &self.config.session_id {
                req = req.header(COOKIE, format!("{SESSION_COOKIE}={session_id}"));
            }
        }
        let resp = req.send().await.map_err(|e| {
            tracing::error!("transport failure: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    async fn export<R>(&self, request: &R) -> Result<R::Response, Error>
    where
        R: Request,
        R::Response: DeserializeOwned,
    {
        let params = request.params()?;
        let url = self.config.request_url(R::RESOURCE)?;
        let body = self.post(url, &params, true).await?;
        serde_json::from_str(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!(
                "failed to decode {} response: {} | body: {}",
                R::RESOURCE.type_tag(),
                e,
                snippet
            );
            Error::MalformedResponse {
                message: e.to_string(),
                body: snippet,
            }
        })
    }

    /// Fetches the rosters of every franchise, or one franchise/week when the
    /// request narrows it.
    pub async fn rosters(&self, request: &RostersRequest) -> Result<RostersResponse, Error> {
        self.export(request).await
    }

    /// Fetches the player database, optionally scoped to a league.
    pub async fn players(&self, request: &PlayersRequest) -> Result<PlayersResponse, Error> {
        self.export(request).await
    }

    /// Fetches league metadata.
    pub async fn league(&self, request: &LeagueRequest) -> Result<LeagueResponse, Error> {
        self.export(request).await
    }

    /// Fetches in-progress matchup scores.
    pub async fn live_scoring(
        &self,
        request: &LiveScoringRequest,
    ) -> Result<LiveScoringResponse, Error> {
        self.export(request).await
    }

    /// Fetches fantasy point totals per player.
    pub async fn player_scores(
        &self,
        request: &PlayerScoresRequest,
    ) -> Result<PlayerScoresResponse, Error> {
        self.export(request).await
    }

    /// Exchanges credentials for a session cookie. Always hits the canonical
    /// API host and parses the XML body; no cookie is sent.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, Error> {
        let params = request.params()?;
        let url = self.config.request_url(Resource::Login)?;
        let body = self.post(url, &params, false).await?;
        LoginResponse::from_xml(&body)
    }
}

//! Client configuration: protocol, host, season year, and session cookie.

use url::Url;

use crate::{request::Resource, Error};

/// Canonical MFL API host. Login always targets this host; export requests
/// may target a league-specific host (e.g. `www43.myfantasyleague.com`).
pub const API_HOST: &str = "api.myfantasyleague.com";

/// Per-session configuration read by every request the client builds.
///
/// Set once when the client is created; never mutated by requests. Refreshing
/// the session cookie after a re-login means building a new `Config`.
#[derive(Clone, Debug)]
pub struct Config {
    /// URL scheme. Defaults to `https`.
    pub protocol: String,
    /// Host for export requests. Defaults to [`API_HOST`].
    pub host: String,
    /// Season year, the first path segment of every request URL.
    pub year: u16,
    /// `MFL_USER_ID` cookie value from a prior login. `None` for
    /// unauthenticated requests.
    pub session_id: Option<String>,
}

impl Config {
    /// Creates a configuration for the given season with default protocol and
    /// host and no session cookie.
    pub fn new(year: u16) -> Self {
        Self {
            protocol: "https".to_string(),
            host: API_HOST.to_string(),
            year,
            session_id: None,
        }
    }

    pub fn with_protocol(mut self, protocol: &str) -> Self {
        self.protocol = protocol.to_string();
        self
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn with_session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    /// Builds the request URL `{protocol}://{host}/{year}/{endpoint}` for the
    /// given resource. Login is pinned to [`API_HOST`] regardless of the
    /// configured host.
    pub fn request_url(&self, resource: Resource) -> Result<Url, Error> {
        let host = match resource {
            Resource::Login => API_HOST,
            _ => self.host.as_str(),
        };
        let url = format!(
            "{}://{}/{}/{}",
            self.protocol,
            host,
            self.year,
            resource.endpoint()
        );
        Url::parse(&url).map_err(|e| {
            tracing::error!("invalid request URL {}: {}", url, e);
            Error::InvalidRequest {
                reason: format!("invalid request URL `{url}`: {e}"),
            }
        })
    }
}

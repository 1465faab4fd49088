//! Shared request infrastructure: the [`Request`] trait, [`Resource`] tags,
//! and ordered parameter assembly.

use crate::Error;

/// Ordered form parameters. Kept as a pair list rather than a map so the
/// `TYPE` tag leads and the format flag trails, matching the wire order the
/// API expects.
pub type Params = Vec<(&'static str, String)>;

/// The six supported API resources.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Resource {
    Rosters,
    Players,
    League,
    LiveScoring,
    PlayerScores,
    Login,
}

impl Resource {
    /// Value of the `TYPE` form parameter for export resources.
    pub fn type_tag(self) -> &'static str {
        match self {
            Resource::Rosters => "rosters",
            Resource::Players => "players",
            Resource::League => "league",
            Resource::LiveScoring => "liveScoring",
            Resource::PlayerScores => "playerScores",
            Resource::Login => "login",
        }
    }

    /// URL path segment after the year: `export` for everything but login.
    pub fn endpoint(self) -> &'static str {
        match self {
            Resource::Login => "login",
            _ => "export",
        }
    }
}

/// Trait implemented by all request builders. Parameter assembly is a pure
/// function of the builder's fields; it never touches the network.
pub trait Request {
    /// Decoded response type the client produces for this request.
    type Response;

    /// Resource this request targets.
    const RESOURCE: Resource;

    /// Builds the ordered form parameters, validating mandatory fields.
    fn params(&self) -> Result<Params, Error>;
}

/// Accumulates parameters in table order. Unset optional fields contribute no
/// key at all; a set value of `0` is still sent.
pub(crate) struct ParamList {
    params: Params,
}

impl ParamList {
    /// Starts an export parameter list with the leading `TYPE` tag.
    pub(crate) fn new(resource: Resource) -> Self {
        Self {
            params: vec![("TYPE", resource.type_tag().to_string())],
        }
    }

    /// Starts an empty list with no `TYPE` tag (login only).
    pub(crate) fn bare() -> Self {
        Self { params: Vec::new() }
    }

    /// Appends a mandatory key, failing with `InvalidRequest` when empty.
    pub(crate) fn push_required(
        &mut self,
        key: &'static str,
        field: &'static str,
        value: &str,
    ) -> Result<(), Error> {
        if value.is_empty() {
            return Err(Error::missing_field(field));
        }
        self.params.push((key, value.to_string()));
        Ok(())
    }

    pub(crate) fn push(&mut self, key: &'static str, value: impl ToString) {
        self.params.push((key, value.to_string()));
    }

    /// Appends a key only when the optional field is set.
    pub(crate) fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.params.push((key, value.to_string()));
        }
    }

    /// Appends `key=1` when the flag is true, nothing otherwise.
    pub(crate) fn push_flag(&mut self, key: &'static str, flag: bool) {
        if flag {
            self.params.push((key, "1".to_string()));
        }
    }

    /// Appends a comma-joined id list when non-empty.
    pub(crate) fn push_list(&mut self, key: &'static str, values: &[String]) {
        if !values.is_empty() {
            self.params.push((key, values.join(",")));
        }
    }

    /// Closes an export parameter list with the fixed `JSON=1` format flag.
    pub(crate) fn finish_json(mut self) -> Params {
        self.params.push(("JSON", "1".to_string()));
        self.params
    }

    pub(crate) fn into_params(self) -> Params {
        self.params
    }
}

mod client;
mod config;
mod errors;
mod request;
pub mod types;
pub use self::client::Client;
pub use self::config::{Config, API_HOST};
pub use self::errors::Error;
pub use self::request::{
    LeagueRequest, LiveScoringRequest, LoginRequest, Params, PlayerScoresRequest, PlayersRequest,
    Request, Resource, RostersRequest,
};

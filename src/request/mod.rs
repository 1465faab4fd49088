mod common;
pub use self::common::{Params, Request, Resource};

mod rosters;
pub use self::rosters::RostersRequest;

mod players;
pub use self::players::PlayersRequest;

mod league;
pub use self::league::LeagueRequest;

mod live_scoring;
pub use self::live_scoring::LiveScoringRequest;

mod player_scores;
pub use self::player_scores::PlayerScoresRequest;

mod login;
pub use self::login::LoginRequest;

mod rosters;
pub use self::rosters::{FranchiseId, RosterFranchise, RosterSlot, Rosters, RostersResponse};

mod players;
pub use self::players::{Player, PlayerId, Players, PlayersResponse};

mod league;
pub use self::league::{League, LeagueFranchise, LeagueFranchises, LeagueId, LeagueResponse};

mod live_scoring;
pub use self::live_scoring::{
    LiveFranchise, LivePlayer, LivePlayers, LiveScoring, LiveScoringResponse, Matchup,
};

mod player_scores;
pub use self::player_scores::{PlayerScore, PlayerScores, PlayerScoresResponse};

mod login;
pub use self::login::LoginResponse;

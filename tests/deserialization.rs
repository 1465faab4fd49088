use mfl_api::types::{
    LeagueResponse, LiveScoringResponse, LoginResponse, PlayerScoresResponse, PlayersResponse,
    RostersResponse,
};
use mfl_api::Error;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_rosters() {
    let json = load_fixture("rosters.json");
    let resp: RostersResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.version.as_deref(), Some("1.0"));
    assert_eq!(resp.rosters.franchise.len(), 2);

    let first = &resp.rosters.franchise[0];
    assert_eq!(first.id, "0001");
    assert_eq!(first.player.len(), 2);
    assert_eq!(first.player[0].id, "13593");
    assert_eq!(first.player[1].status.as_deref(), Some("INJURED_RESERVE"));
}

#[test]
fn deserialize_players() {
    let json = load_fixture("players.json");
    let resp: PlayersResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.players.timestamp.as_deref(), Some("1630291200"));
    assert_eq!(resp.players.player.len(), 2);

    let mahomes = &resp.players.player[0];
    assert_eq!(mahomes.name, "Mahomes, Patrick");
    assert_eq!(mahomes.position.as_deref(), Some("QB"));
    assert_eq!(mahomes.draft_year.as_deref(), Some("2017"));

    // detail fields absent when DETAILS was not requested
    let jones = &resp.players.player[1];
    assert!(jones.draft_year.is_none());
    assert!(jones.college.is_none());
}

#[test]
fn deserialize_league() {
    let json = load_fixture("league.json");
    let resp: LeagueResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.league.id, "35465");
    assert_eq!(resp.league.name, "Example Dynasty League");
    assert_eq!(
        resp.league.base_url.as_deref(),
        Some("https://www43.myfantasyleague.com")
    );

    let franchises = resp.league.franchises.unwrap();
    assert_eq!(franchises.count.as_deref(), Some("2"));
    assert_eq!(franchises.franchise[1].name, "Bravo Bunch");
}

#[test]
fn deserialize_live_scoring() {
    let json = load_fixture("live_scoring.json");
    let resp: LiveScoringResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.live_scoring.week.as_deref(), Some("3"));
    assert_eq!(resp.live_scoring.matchup.len(), 1);

    let franchises = &resp.live_scoring.matchup[0].franchise;
    assert_eq!(franchises.len(), 2);
    assert_eq!(franchises[0].score.as_deref(), Some("87.5"));
    assert_eq!(franchises[0].players_yet_to_play.as_deref(), Some("3"));

    let detail = franchises[0].players.as_ref().unwrap();
    assert_eq!(detail.player[0].id, "13593");
    assert_eq!(detail.player[0].status.as_deref(), Some("playing"));
    assert!(franchises[1].players.is_none());
}

#[test]
fn deserialize_player_scores() {
    let json = load_fixture("player_scores.json");
    let resp: PlayerScoresResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.player_scores.player_score.len(), 2);
    assert_eq!(resp.player_scores.player_score[0].score.as_deref(), Some("21.90"));
    assert_eq!(resp.player_scores.player_score[1].week.as_deref(), Some("3"));
}

#[test]
fn deserialize_login_xml() {
    let xml = load_fixture("login.xml");
    let resp = LoginResponse::from_xml(&xml).unwrap();
    assert_eq!(resp.session_id, "dGVzdF9zZXNzaW9uX2Nvb2tpZQ==");
}

#[test]
fn login_xml_without_session_attribute() {
    let result = LoginResponse::from_xml("<status>invalid password</status>");
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[test]
fn login_xml_without_status_element() {
    let result = LoginResponse::from_xml("<error>service unavailable</error>");
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"rosters": not valid json}"#;
    let result = serde_json::from_str::<RostersResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"version": "1.0"}"#;
    let result = serde_json::from_str::<LeagueResponse>(json);
    assert!(result.is_err());
}

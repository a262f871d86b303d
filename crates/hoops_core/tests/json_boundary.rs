//! The string-in, string-out boundary as an outside caller sees it.

use hoops_core::models::generator::uniform_roster;
use hoops_core::models::GameResult;
use hoops_core::{simulate_game_json, SimError, API_SCHEMA_VERSION};
use serde_json::{json, Value};

fn request(seed: u64) -> Value {
    json!({
        "schema_version": API_SCHEMA_VERSION,
        "seed": seed,
        "home": uniform_roster(10, "Rivertown", 77),
        "away": uniform_roster(20, "Lakeside", 73),
    })
}

#[test]
fn hand_written_request_plays_a_game() {
    let out = simulate_game_json(&request(5).to_string()).unwrap();
    let result: GameResult = serde_json::from_str(&out).unwrap();
    assert_eq!(result.home_team_id, 10);
    assert_eq!(result.away_team_id, 20);
    assert!(result.winner_id == 10 || result.winner_id == 20);
    assert_eq!(result.quarters.len(), 4 + result.overtime_periods as usize);

    let value: Value = serde_json::from_str(&out).unwrap();
    let first = &value["plays"][0];
    assert_eq!(first["type"], "quarter_start");
}

#[test]
fn partial_config_overrides_defaults() {
    let mut req = request(6);
    req["config"] = json!({ "clock": { "quarter_length": 360.0 } });
    req["include_plays"] = json!(false);
    let out = simulate_game_json(&req.to_string()).unwrap();
    let result: GameResult = serde_json::from_str(&out).unwrap();
    let minutes: f32 = result.home_players.iter().map(|p| p.minutes).sum();
    let expected = 5.0 * (24.0 + 5.0 * result.overtime_periods as f32);
    assert!((minutes - expected).abs() < 0.5, "minutes {}", minutes);
    assert!(!out.contains("\"plays\":[{"));
}

#[test]
fn out_of_range_rating_is_rejected() {
    let mut req = request(7);
    req["home"]["players"][3]["attributes"]["three_point"] = json!(120);
    let err = simulate_game_json(&req.to_string()).unwrap_err();
    assert!(
        matches!(err, SimError::InvalidAttribute { attribute: "three_point", value: 120, .. }),
        "{:?}",
        err
    );
    assert!(!err.is_recoverable());
}

#[test]
fn duplicate_player_ids_are_rejected() {
    let mut req = request(8);
    let dup = req["away"]["players"][0]["id"].clone();
    req["away"]["players"][1]["id"] = dup;
    let err = simulate_game_json(&req.to_string()).unwrap_err();
    assert!(matches!(err, SimError::DuplicatePlayer { .. }));
}

#[test]
fn empty_roster_is_fatal() {
    let mut req = request(9);
    req["home"]["players"] = json!([]);
    let err = simulate_game_json(&req.to_string()).unwrap_err();
    assert!(matches!(err, SimError::EmptyRoster { .. }));
}

#[test]
fn team_cannot_face_itself() {
    let mut req = request(10);
    req["away"] = req["home"].clone();
    let err = simulate_game_json(&req.to_string()).unwrap_err();
    assert!(matches!(err, SimError::SameTeam { id: 10 }), "{:?}", err);
    assert!(!err.is_recoverable());
}

#[test]
fn overall_out_of_range_is_rejected() {
    let mut req = request(11);
    req["away"]["players"][0]["overall"] = json!(150);
    let err = simulate_game_json(&req.to_string()).unwrap_err();
    assert!(matches!(err, SimError::InvalidAttribute { attribute: "overall", value: 150, .. }));
}

//! JSON boundary for callers that only speak strings (scripts, other
//! runtimes, the CLI's `--json` mode).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, GameEngine};
use crate::error::{Result, SimError};
use crate::models::roster::TeamRoster;

pub const API_SCHEMA_VERSION: u32 = 1;

fn default_include_plays() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRequest {
    pub schema_version: u32,
    pub seed: u64,
    pub home: TeamRoster,
    pub away: TeamRoster,
    #[serde(default)]
    pub config: Option<EngineConfig>,
    /// Include the flat play-by-play log in the response (default: true)
    #[serde(default = "default_include_plays")]
    pub include_plays: bool,
}

impl GameRequest {
    pub fn new(home: TeamRoster, away: TeamRoster, seed: u64) -> Self {
        Self {
            schema_version: API_SCHEMA_VERSION,
            seed,
            home,
            away,
            config: None,
            include_plays: true,
        }
    }
}

/// Simulate one game from a JSON request, returning the `GameResult` as JSON.
pub fn simulate_game_json(request_json: &str) -> Result<String> {
    let request: GameRequest = serde_json::from_str(request_json)?;
    if request.schema_version != API_SCHEMA_VERSION {
        return Err(SimError::UnsupportedSchema {
            found: request.schema_version,
            expected: API_SCHEMA_VERSION,
        });
    }
    debug!(
        "JSON request: {} vs {} seed {}",
        request.home.name, request.away.name, request.seed
    );

    let mut engine = GameEngine::from_rosters(&request.home, &request.away, request.seed)?;
    if let Some(config) = request.config {
        engine = engine.with_config(config)?;
    }
    let mut result = engine.simulate();
    if !request.include_plays {
        result.plays.clear();
        for quarter in &mut result.quarters {
            quarter.plays.clear();
        }
    }

    serde_json::to_string(&result).map_err(|e| SimError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game_result::GameResult;
    use crate::models::generator::uniform_roster;

    fn request() -> GameRequest {
        GameRequest::new(uniform_roster(1, "Home", 78), uniform_roster(2, "Away", 74), 11)
    }

    #[test]
    fn round_trips_a_game() {
        let json = serde_json::to_string(&request()).unwrap();
        let out = simulate_game_json(&json).unwrap();
        let result: GameResult = serde_json::from_str(&out).unwrap();
        assert_eq!(result.seed, 11);
        assert_eq!(result.home_box.points, result.home_score);
        assert!(!result.plays.is_empty());
        // Same request, same bytes.
        assert_eq!(simulate_game_json(&json).unwrap(), out);
    }

    #[test]
    fn plays_can_be_left_out() {
        let mut req = request();
        req.include_plays = false;
        let out = simulate_game_json(&serde_json::to_string(&req).unwrap()).unwrap();
        let result: GameResult = serde_json::from_str(&out).unwrap();
        assert!(result.plays.is_empty());
        assert!(result.quarters.iter().all(|q| q.plays.is_empty()));
        assert!(result.home_score > 0);
    }

    #[test]
    fn rejects_other_schema_versions() {
        let mut req = request();
        req.schema_version = 2;
        let err = simulate_game_json(&serde_json::to_string(&req).unwrap()).unwrap_err();
        assert!(matches!(err, SimError::UnsupportedSchema { found: 2, expected: 1 }));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        assert!(matches!(simulate_game_json("{\"seed\": 1"), Err(SimError::Deserialization(_))));
    }

    #[test]
    fn short_roster_is_reported() {
        let mut req = request();
        req.away.players.truncate(3);
        let err = simulate_game_json(&serde_json::to_string(&req).unwrap()).unwrap_err();
        assert!(matches!(err, SimError::InsufficientRoster { found: 3, .. }));
    }

    #[test]
    fn config_in_request_is_validated() {
        let mut req = request();
        let mut cfg = EngineConfig::default();
        cfg.shot.min_probability = 0.9;
        cfg.shot.max_probability = 0.2;
        req.config = Some(cfg);
        let err = simulate_game_json(&serde_json::to_string(&req).unwrap()).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }
}

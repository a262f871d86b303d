pub mod json_api;

pub use json_api::{simulate_game_json, GameRequest, API_SCHEMA_VERSION};

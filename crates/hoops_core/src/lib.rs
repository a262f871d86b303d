//! # hoops_core - Deterministic Basketball Game Simulation Engine
//!
//! A possession-driven basketball engine: given two rosters and a seed it
//! plays a full game (four quarters plus overtime) and returns the final
//! score, the play-by-play log and box scores derived from that log.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Attribute-driven shot, pass, drive and rebound resolution
//! - Hot/cold streaks, fatigue and automatic substitutions
//! - JSON API and a parallel slate runner for batch use
//!
//! ```rust
//! use hoops_core::models::generator::uniform_roster;
//! use hoops_core::GameEngine;
//!
//! let home = uniform_roster(1, "Home", 80);
//! let away = uniform_roster(2, "Away", 70);
//! let result = GameEngine::from_rosters(&home, &away, 42)?.simulate();
//! assert_eq!(result.home_box.points, result.home_score);
//! # Ok::<(), hoops_core::SimError>(())
//! ```

// Game engine APIs often require many parameters for clock, score, etc.
#![allow(clippy::too_many_arguments)]
// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod batch;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{simulate_game_json, GameRequest, API_SCHEMA_VERSION};
pub use batch::{simulate_slate, Fixture, SeriesSummary, SlateOutcome, WorkerPool};
pub use engine::{EngineConfig, GameEngine, GameRng};
pub use error::{Result, SimError};
pub use models::{GameResult, Play, PlayType, SimTeam, TeamRoster};
